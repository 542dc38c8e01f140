use crate::domain::model::{
    Car, LeaveOutcome, MoveOutcome, Occupancy, ParkOutcome, RemoveOutcome, SpotEntry,
};
use crate::utils::error::{LotError, Result};

/// Fixed-capacity table of spots. Spots are 1-based outside this type and
/// 0-based in `slots`. A capacity of 0 means no lot has been created.
#[derive(Debug, Clone, Default)]
pub struct ParkingLot {
    slots: Vec<Option<Car>>,
}

impl ParkingLot {
    /// Fails instead of aborting when `capacity` spots cannot be allocated.
    pub fn new(capacity: usize) -> Result<Self> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|_| LotError::CapacityTooLarge { capacity })?;
        slots.resize(capacity, None);
        Ok(Self { slots })
    }

    /// Replaces the whole lot with `capacity` empty spots, dropping every parked car.
    /// On failure the current lot is left untouched.
    pub fn create(&mut self, capacity: usize) -> Result<()> {
        *self = Self::new(capacity)?;
        tracing::info!(capacity, "parking lot created");
        Ok(())
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn is_created(&self) -> bool {
        !self.slots.is_empty()
    }

    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    fn ensure_created(&self) -> Result<()> {
        if self.is_created() {
            Ok(())
        } else {
            Err(LotError::NotCreated)
        }
    }

    fn index_of(&self, spot: i64) -> Option<usize> {
        usize::try_from(spot)
            .ok()
            .filter(|spot| (1..=self.capacity()).contains(spot))
            .map(|spot| spot - 1)
    }

    fn position_of(&self, car: &Car) -> Option<usize> {
        self.slots.iter().position(|slot| slot.as_ref() == Some(car))
    }

    fn occupants(&self) -> impl Iterator<Item = (usize, &Car)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|car| (index + 1, car)))
    }

    /// Parks `car` in the lowest-numbered empty spot.
    pub fn add_first_free(&mut self, car: Car) -> Result<ParkOutcome> {
        self.ensure_created()?;

        let Some(index) = self.slots.iter().position(Option::is_none) else {
            tracing::debug!(car = %car, "lot full");
            return Ok(ParkOutcome::LotFull);
        };

        let color = car.color().to_string();
        tracing::debug!(car = %car, spot = index + 1, "car parked");
        self.slots[index] = Some(car);
        Ok(ParkOutcome::Parked {
            spot: index + 1,
            color,
        })
    }

    /// Parks `car` in an exact spot and returns that spot.
    pub fn place_at(&mut self, car: Car, spot: i64) -> Result<usize> {
        self.ensure_created()?;

        if self.position_of(&car).is_some() {
            return Err(LotError::AlreadyParked { car });
        }
        let index = self
            .index_of(spot)
            .ok_or_else(|| LotError::WrongSpotNumber {
                spot,
                car: Some(car.clone()),
            })?;
        if self.slots[index].is_some() {
            return Err(LotError::OccupiedSpot {
                spot: index + 1,
                car,
            });
        }

        tracing::debug!(car = %car, spot = index + 1, "car placed");
        self.slots[index] = Some(car);
        Ok(index + 1)
    }

    /// Moves a parked car to an empty spot. Any failure, including an
    /// out-of-range destination, yields [`MoveOutcome::Unable`].
    pub fn move_to(&mut self, car: Car, spot: i64) -> Result<MoveOutcome> {
        self.ensure_created()?;

        let source = self.position_of(&car);
        let target = self
            .index_of(spot)
            .filter(|&index| self.slots[index].is_none());

        match (source, target) {
            (Some(from), Some(to)) => {
                self.slots[to] = self.slots[from].take();
                tracing::debug!(car = %car, from = from + 1, to = to + 1, "car moved");
                Ok(MoveOutcome::Moved {
                    car,
                    from: from + 1,
                    to: to + 1,
                })
            }
            _ => Ok(MoveOutcome::Unable { car }),
        }
    }

    pub fn remove_by_car(&mut self, car: Car) -> Result<RemoveOutcome> {
        self.ensure_created()?;

        match self.position_of(&car) {
            Some(index) => {
                self.slots[index] = None;
                tracing::debug!(car = %car, spot = index + 1, "car removed");
                Ok(RemoveOutcome::Removed {
                    car,
                    spot: index + 1,
                })
            }
            None => Ok(RemoveOutcome::NotFound { car }),
        }
    }

    pub fn remove_by_spot(&mut self, spot: i64) -> Result<LeaveOutcome> {
        self.ensure_created()?;

        let index = self
            .index_of(spot)
            .ok_or(LotError::WrongSpotNumber { spot, car: None })?;

        match self.slots[index].take() {
            Some(car) => {
                tracing::debug!(car = %car, spot = index + 1, "spot freed");
                Ok(LeaveOutcome::Freed {
                    spot: index + 1,
                    car,
                })
            }
            None => Ok(LeaveOutcome::AlreadyEmpty { spot: index + 1 }),
        }
    }

    /// Registration numbers of cars with `color`, in spot order.
    pub fn registrations_by_color(&self, color: &str) -> Result<Vec<&str>> {
        self.ensure_created()?;
        Ok(self
            .occupants()
            .filter(|(_, car)| car.has_color(color))
            .map(|(_, car)| car.registration())
            .collect())
    }

    pub fn spots_by_color(&self, color: &str) -> Result<Vec<usize>> {
        self.ensure_created()?;
        Ok(self
            .occupants()
            .filter(|(_, car)| car.has_color(color))
            .map(|(spot, _)| spot)
            .collect())
    }

    /// First spot whose registration number contains `registration`.
    pub fn spot_by_registration_substring(&self, registration: &str) -> Result<Option<usize>> {
        self.ensure_created()?;
        Ok(self
            .occupants()
            .find(|(_, car)| car.registration().contains(registration))
            .map(|(spot, _)| spot))
    }

    pub fn full_listing(&self) -> Result<Vec<SpotEntry<'_>>> {
        self.ensure_created()?;
        Ok(self
            .slots
            .iter()
            .enumerate()
            .map(|(index, slot)| SpotEntry {
                spot: index + 1,
                car: slot.as_ref(),
            })
            .collect())
    }

    pub fn occupied_listing(&self) -> Result<Occupancy<'_>> {
        self.ensure_created()?;
        let entries: Vec<SpotEntry<'_>> = self
            .occupants()
            .map(|(spot, car)| SpotEntry {
                spot,
                car: Some(car),
            })
            .collect();

        if entries.is_empty() {
            Ok(Occupancy::Empty)
        } else {
            Ok(Occupancy::Occupied(entries))
        }
    }
}
