use crate::domain::model::{Occupancy, SpotEntry};

pub fn created(capacity: usize) -> String {
    format!("Created a parking lot with {} spots.", capacity)
}

pub fn registrations_by_color(color: &str, registrations: &[&str]) -> String {
    if registrations.is_empty() {
        no_color_match(color)
    } else {
        registrations.join(", ")
    }
}

pub fn spots_by_color(color: &str, spots: &[usize]) -> String {
    if spots.is_empty() {
        no_color_match(color)
    } else {
        spots
            .iter()
            .map(usize::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn no_color_match(color: &str) -> String {
    format!("No cars with color {} were found.", color)
}

pub fn spot_by_registration(registration: &str, spot: Option<usize>) -> String {
    match spot {
        Some(spot) => spot.to_string(),
        None => format!(
            "No cars with registration number {} were found.",
            registration
        ),
    }
}

/// `status` output: one `spot REG COLOR` line per parked car.
pub fn occupancy(occupancy: &Occupancy<'_>) -> Vec<String> {
    match occupancy {
        Occupancy::Empty => vec!["Parking lot is empty.".to_string()],
        Occupancy::Occupied(entries) => entries
            .iter()
            .filter_map(|entry| entry.car.map(|car| format!("{} {}", entry.spot, car)))
            .collect(),
    }
}

/// Tab-separated line for every spot, empty ones included.
pub fn full_listing(entries: &[SpotEntry<'_>]) -> Vec<String> {
    entries
        .iter()
        .map(|entry| match entry.car {
            Some(car) => format!("{}\t{}", entry.spot, car),
            None => format!("{}\tempty", entry.spot),
        })
        .collect()
}
