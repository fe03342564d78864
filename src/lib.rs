pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::{cli::StdoutConsole, scenario::ScenarioConfig};
pub use crate::core::desks::{FuelDesk, StoreDesk};
pub use crate::core::register::RegisterEngine;
pub use crate::core::sale::SaleProcessor;
pub use crate::core::scenario::ScenarioRunner;
pub use crate::core::shifts::{MorningShift, NightShift};
pub use crate::utils::error::{Result, TillError};
