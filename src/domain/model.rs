use std::fmt;

/// A parked car, identified by its registration number and color.
///
/// Two cars are the same car when both fields match exactly. Color
/// comparisons for queries are case-insensitive, see [`Car::has_color`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Car {
    registration: String,
    color: String,
}

impl Car {
    pub fn new(registration: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            registration: registration.into(),
            color: color.into(),
        }
    }

    pub fn registration(&self) -> &str {
        &self.registration
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn has_color(&self, color: &str) -> bool {
        self.color.to_lowercase() == color.to_lowercase()
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.registration, self.color)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParkOutcome {
    Parked { spot: usize, color: String },
    LotFull,
}

impl fmt::Display for ParkOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parked { spot, color } => write!(f, "{} car parked in spot {}.", color, spot),
            Self::LotFull => write!(f, "Sorry, the parking lot is full."),
        }
    }
}

/// Moving reports one generic failure whether the car is missing or the target is taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved { car: Car, from: usize, to: usize },
    Unable { car: Car },
}

impl fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Moved { car, from, to } => write!(
                f,
                "The car {} has been successfully moved from spot {} to spot {}",
                car, from, to
            ),
            Self::Unable { car } => write!(f, "Unable to move the car {}", car),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed { car: Car, spot: usize },
    NotFound { car: Car },
}

impl fmt::Display for RemoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Removed { car, .. } => write!(f, "The car {} has been successfully deleted", car),
            Self::NotFound { car } => write!(f, "Unable to delete the car {}", car),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeaveOutcome {
    Freed { spot: usize, car: Car },
    AlreadyEmpty { spot: usize },
}

impl fmt::Display for LeaveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Freed { spot, .. } => write!(f, "Spot {} is free.", spot),
            Self::AlreadyEmpty { spot } => write!(f, "There is no car in spot {}.", spot),
        }
    }
}

/// One row of a lot listing, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpotEntry<'a> {
    pub spot: usize,
    pub car: Option<&'a Car>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Occupancy<'a> {
    Empty,
    Occupied(Vec<SpotEntry<'a>>),
}
