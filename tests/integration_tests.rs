use small_till::domain::model::{Phase, ShiftSelection};
use small_till::domain::ports::{Console, TillConfig};
use small_till::utils::error::Result;
use small_till::utils::validation::Validate;
use small_till::{ScenarioConfig, ScenarioRunner};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct CaptureConsole {
    lines: Arc<Mutex<Vec<String>>>,
}

impl CaptureConsole {
    fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl Console for CaptureConsole {
    fn line(&self, text: &str) -> Result<()> {
        self.lines.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

struct FixedConfig;

impl TillConfig for FixedConfig {
    fn station(&self) -> &str {
        "Highway 101 Forecourt"
    }

    fn opening_float(&self) -> f64 {
        200.0
    }

    fn carried_balance(&self) -> f64 {
        150.0
    }

    fn shifts(&self) -> ShiftSelection {
        ShiftSelection::All
    }
}

#[test]
fn test_full_scenario_emits_two_sections_and_six_phase_blocks() {
    let console = CaptureConsole::default();
    let runner = ScenarioRunner::new(console.clone());
    let summary = runner.run(&FixedConfig).unwrap();

    let lines = console.lines();

    let morning_section = lines
        .iter()
        .position(|l| l == "🌅 SIMULATING THE MORNING SHIFT:")
        .expect("morning section banner");
    let night_section = lines
        .iter()
        .position(|l| l == "🌙 SIMULATING THE NIGHT SHIFT:")
        .expect("night section banner");
    assert!(morning_section < night_section);

    for phase in [Phase::Opening, Phase::Movements, Phase::Closing] {
        let positions: Vec<usize> = lines
            .iter()
            .enumerate()
            .filter(|(_, l)| *l == phase.banner())
            .map(|(i, _)| i)
            .collect();
        assert_eq!(positions.len(), 2, "banner twice: {}", phase.banner());
        assert!(positions[0] > morning_section && positions[0] < night_section);
        assert!(positions[1] > night_section);
    }

    assert_eq!(summary.shifts.len(), 2);
    assert_eq!(summary.shifts[0].shift, "MORNING");
    assert_eq!(summary.shifts[1].shift, "NIGHT");
}

#[test]
fn test_scenario_output_is_stable_across_runs() {
    let first = {
        let console = CaptureConsole::default();
        ScenarioRunner::new(console.clone()).run(&FixedConfig).unwrap();
        console.lines()
    };
    let second = {
        let console = CaptureConsole::default();
        ScenarioRunner::new(console.clone()).run(&FixedConfig).unwrap();
        console.lines()
    };
    assert_eq!(first, second);
}

#[test]
fn test_run_summary_serializes_to_json() {
    let console = CaptureConsole::default();
    let summary = ScenarioRunner::new(console).run(&FixedConfig).unwrap();

    let value = serde_json::to_value(&summary).unwrap();
    assert_eq!(value["station"], "Highway 101 Forecourt");
    assert_eq!(value["shifts"].as_array().unwrap().len(), 2);
    assert_eq!(value["shifts"][0]["phases"][0], "opening");
    assert_eq!(value["shifts"][1]["phases"][2], "closing");
}

#[test]
fn test_scenario_config_file_drives_the_run() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("weekday.toml");
    std::fs::write(
        &path,
        r#"
[scenario]
name = "weekday"
station = "Test Station"
shifts = "morning"

[till]
opening_float = 75.5
carried_balance = 0.0
"#,
    )
    .unwrap();

    let config = ScenarioConfig::from_file(&path).unwrap();
    config.validate().unwrap();

    let console = CaptureConsole::default();
    let summary = ScenarioRunner::new(console.clone()).run(&config).unwrap();

    assert_eq!(summary.station, "Test Station");
    assert_eq!(summary.shifts.len(), 1);
    assert!(console
        .lines()
        .iter()
        .any(|l| l == "Setting the opening float: $75.50"));
}

#[test]
fn test_missing_scenario_file_is_an_io_error() {
    let result = ScenarioConfig::from_file("/definitely/not/here.toml");
    assert!(matches!(result, Err(small_till::TillError::Io(_))));
}
