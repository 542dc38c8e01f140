pub mod command;
pub mod registry;
pub mod report;
pub mod session;

pub use crate::domain::model::{
    Car, LeaveOutcome, MoveOutcome, Occupancy, ParkOutcome, RemoveOutcome,
};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
