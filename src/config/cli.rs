use crate::config::toml_config::TomlConfig;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "parking-lot")]
#[command(about = "Command-driven parking lot registry reading commands from stdin")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Create a lot with this many spots before reading commands
    #[arg(long)]
    pub capacity: Option<usize>,

    /// Print every spot after each create, park or leave
    #[arg(long)]
    pub show_lot: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Command-line flags win over values from the file.
    pub fn apply_to(&self, config: &mut TomlConfig) {
        if let Some(capacity) = self.capacity {
            config.lot.capacity = Some(capacity);
            tracing::info!("🔧 Start-up capacity overridden to: {}", capacity);
        }
        if self.show_lot {
            config.output.show_lot_after_change = true;
        }
    }
}

impl ConfigProvider for CliConfig {
    fn initial_capacity(&self) -> Option<usize> {
        self.capacity
    }

    fn show_lot_after_change(&self) -> bool {
        self.show_lot
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}
