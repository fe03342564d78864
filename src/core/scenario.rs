use crate::core::register::RegisterEngine;
use crate::core::shifts::{MorningShift, NightShift};
use crate::core::{Console, RunSummary, TillConfig};
use crate::utils::error::Result;
use chrono::Local;

/// Drives the demonstration: one engine run per selected shift, morning
/// before night, each preceded by a section banner.
pub struct ScenarioRunner<C: Console + Clone> {
    console: C,
}

impl<C: Console + Clone> ScenarioRunner<C> {
    pub fn new(console: C) -> Self {
        Self { console }
    }

    pub fn run<T: TillConfig>(&self, config: &T) -> Result<RunSummary> {
        let started_at = Local::now();
        let run_id = format!("till_{}", started_at.format("%Y%m%d_%H%M%S"));

        tracing::info!(
            "🚀 Starting shift scenario '{}' at {}",
            run_id,
            config.station()
        );

        self.console.line("FORECOURT TILL SHIFT SIMULATION")?;
        self.console.line("===============================")?;
        self.console.blank()?;

        let selection = config.shifts();
        let mut shifts = Vec::new();

        if selection.includes_morning() {
            self.console.line("🌅 SIMULATING THE MORNING SHIFT:")?;
            let engine = RegisterEngine::new(
                MorningShift::new(self.console.clone(), config.opening_float()),
                self.console.clone(),
            );
            shifts.push(engine.run()?);
        }

        if selection.includes_night() {
            self.console.line("🌙 SIMULATING THE NIGHT SHIFT:")?;
            let engine = RegisterEngine::new(
                NightShift::new(self.console.clone(), config.carried_balance()),
                self.console.clone(),
            );
            shifts.push(engine.run()?);
        }

        tracing::info!("Scenario '{}' finished: {} shift(s) run", run_id, shifts.len());

        Ok(RunSummary {
            run_id,
            station: config.station().to_string(),
            started_at,
            shifts,
        })
    }
}
