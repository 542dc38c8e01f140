use crate::domain::model::Car;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LotError {
    #[error("Sorry, a parking lot has not been created.")]
    NotCreated,

    /// `car` is set when a specific car was being placed.
    #[error("{}", wrong_spot_message(.car))]
    WrongSpotNumber { spot: i64, car: Option<Car> },

    #[error("Unable to create a parking lot with {capacity} spots.")]
    CapacityTooLarge { capacity: usize },

    #[error("The spot for {car} is occupied")]
    OccupiedSpot { spot: usize, car: Car },

    #[error("The car {car} is already parked")]
    AlreadyParked { car: Car },

    #[error("Malformed input: {reason}")]
    MalformedInput { reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl LotError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            reason: reason.into(),
        }
    }

    /// Business-rule failures are reported and the command loop keeps going.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::NotCreated
                | Self::WrongSpotNumber { .. }
                | Self::CapacityTooLarge { .. }
                | Self::OccupiedSpot { .. }
                | Self::AlreadyParked { .. }
                | Self::MalformedInput { .. }
        )
    }

    /// The single line shown to the user; malformed-input details only go to the log.
    pub fn user_message(&self) -> String {
        match self {
            Self::MalformedInput { .. } => "Wrong input!".to_string(),
            other => other.to_string(),
        }
    }
}

fn wrong_spot_message(car: &Option<Car>) -> String {
    match car {
        Some(car) => format!("Wrong spot number for {}", car),
        None => "Wrong spot value!".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, LotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_input_hides_reason() {
        let err = LotError::malformed("unknown command 'fly'");
        assert_eq!(err.user_message(), "Wrong input!");
        assert!(err.to_string().contains("unknown command 'fly'"));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_rule_violation_messages() {
        let car = Car::new("AB1234", "Red");
        assert_eq!(
            LotError::AlreadyParked { car: car.clone() }.user_message(),
            "The car AB1234 Red is already parked"
        );
        assert_eq!(
            LotError::OccupiedSpot { spot: 2, car }.user_message(),
            "The spot for AB1234 Red is occupied"
        );
        assert_eq!(
            LotError::NotCreated.user_message(),
            "Sorry, a parking lot has not been created."
        );
    }

    #[test]
    fn test_wrong_spot_messages() {
        let leave = LotError::WrongSpotNumber {
            spot: 9,
            car: None,
        };
        let place = LotError::WrongSpotNumber {
            spot: 9,
            car: Some(Car::new("AB1234", "Red")),
        };

        assert_eq!(leave.user_message(), "Wrong spot value!");
        assert_eq!(place.user_message(), "Wrong spot number for AB1234 Red");
    }

    #[test]
    fn test_capacity_too_large_is_recoverable() {
        let err = LotError::CapacityTooLarge { capacity: 7 };
        assert!(err.is_recoverable());
        assert_eq!(
            err.user_message(),
            "Unable to create a parking lot with 7 spots."
        );
    }

    #[test]
    fn test_io_error_is_not_recoverable() {
        let err = LotError::from(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "closed",
        ));
        assert!(!err.is_recoverable());
    }
}
