pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use core::{registry::ParkingLot, session::CommandLoop};
pub use domain::model::Car;
pub use utils::error::{LotError, Result};
