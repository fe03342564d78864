use crate::core::{ShiftSelection, TillConfig};
use crate::utils::error::{Result, TillError};
use crate::utils::validation::{validate_non_empty_string, validate_non_negative_amount, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Scenario description loaded from a TOML file, an alternative to plain
/// CLI flags for repeatable demonstrations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub scenario: ScenarioInfo,
    pub till: TillSettings,
    pub monitoring: Option<MonitoringSettings>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioInfo {
    pub name: String,
    pub description: Option<String>,
    pub station: String,
    pub shifts: Option<ShiftSelection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TillSettings {
    pub opening_float: f64,
    pub carried_balance: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringSettings {
    pub enabled: bool,
}

impl ScenarioConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TillError::Io)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| TillError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl TillConfig for ScenarioConfig {
    fn station(&self) -> &str {
        &self.scenario.station
    }

    fn opening_float(&self) -> f64 {
        self.till.opening_float
    }

    fn carried_balance(&self) -> f64 {
        self.till.carried_balance
    }

    fn shifts(&self) -> ShiftSelection {
        self.scenario.shifts.unwrap_or(ShiftSelection::All)
    }
}

impl Validate for ScenarioConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("scenario.name", &self.scenario.name)?;
        validate_non_empty_string("scenario.station", &self.scenario.station)?;
        validate_non_negative_amount("till.opening_float", self.till.opening_float)?;
        validate_non_negative_amount("till.carried_balance", self.till.carried_balance)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[scenario]
name = "weekday"
station = "Highway 101 Forecourt"
shifts = "all"

[till]
opening_float = 200.0
carried_balance = 150.0

[monitoring]
enabled = true
"#;

    #[test]
    fn test_parse_sample_scenario() {
        let config = ScenarioConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.scenario.name, "weekday");
        assert_eq!(config.station(), "Highway 101 Forecourt");
        assert_eq!(config.opening_float(), 200.0);
        assert_eq!(config.shifts(), ShiftSelection::All);
        assert!(config.monitoring_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_shifts_default_to_all() {
        let toml = r#"
[scenario]
name = "minimal"
station = "Test"

[till]
opening_float = 10.0
carried_balance = 0.0
"#;
        let config = ScenarioConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.shifts(), ShiftSelection::All);
        assert!(!config.monitoring_enabled());
    }

    #[test]
    fn test_single_shift_selection_parses() {
        let toml = r#"
[scenario]
name = "late"
station = "Test"
shifts = "night"

[till]
opening_float = 10.0
carried_balance = 5.0
"#;
        let config = ScenarioConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.shifts(), ShiftSelection::Night);
    }

    #[test]
    fn test_missing_till_section_is_a_config_error() {
        let toml = r#"
[scenario]
name = "broken"
station = "Test"
"#;
        let result = ScenarioConfig::from_toml_str(toml);
        assert!(matches!(result, Err(TillError::Config { .. })));
    }

    #[test]
    fn test_negative_amounts_fail_validation() {
        let toml = r#"
[scenario]
name = "negative"
station = "Test"

[till]
opening_float = -1.0
carried_balance = 0.0
"#;
        let config = ScenarioConfig::from_toml_str(toml).unwrap();
        assert!(matches!(
            config.validate(),
            Err(TillError::InvalidConfigValue { .. })
        ));
    }
}
