pub mod cli;
pub mod scenario;

#[cfg(feature = "cli")]
use crate::core::{ShiftSelection, TillConfig};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_non_empty_string, validate_non_negative_amount, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "small-till")]
#[command(about = "A small cash register shift workflow simulator")]
pub struct CliConfig {
    #[arg(long, default_value = "Highway 101 Forecourt")]
    pub station: String,

    #[arg(long, default_value_t = 200.0)]
    pub opening_float: f64,

    #[arg(long, default_value_t = 150.0)]
    pub carried_balance: f64,

    #[arg(long, value_enum, default_value = "all")]
    pub shift: ShiftSelection,

    #[arg(long, help = "Path to a scenario TOML file")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log system resource usage")]
    pub monitor: bool,

    #[arg(long, help = "Print a JSON run summary after the scenario")]
    pub summary: bool,
}

#[cfg(feature = "cli")]
impl TillConfig for CliConfig {
    fn station(&self) -> &str {
        &self.station
    }

    fn opening_float(&self) -> f64 {
        self.opening_float
    }

    fn carried_balance(&self) -> f64 {
        self.carried_balance
    }

    fn shifts(&self) -> ShiftSelection {
        self.shift
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("station", &self.station)?;
        validate_non_negative_amount("opening_float", self.opening_float)?;
        validate_non_negative_amount("carried_balance", self.carried_balance)?;
        Ok(())
    }
}
