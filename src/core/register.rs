use crate::core::{Console, Phase, ShiftRoutine, ShiftSummary};
use crate::utils::error::Result;

/// Runs the fixed open / movements / close procedure for one shift.
///
/// Phase ordering lives in `run` and the private phase methods only; a
/// `ShiftRoutine` has no way to skip, reorder or repeat phases.
pub struct RegisterEngine<P: ShiftRoutine, C: Console> {
    shift: P,
    console: C,
}

impl<P: ShiftRoutine, C: Console> RegisterEngine<P, C> {
    pub fn new(shift: P, console: C) -> Self {
        Self { shift, console }
    }

    pub fn run(&self) -> Result<ShiftSummary> {
        tracing::debug!("Operating the till for the {} shift", self.shift.shift_name());

        let mut phases = Vec::with_capacity(3);

        self.open_till()?;
        phases.push(Phase::Opening);

        self.process_movements()?;
        phases.push(Phase::Movements);

        self.close_till()?;
        phases.push(Phase::Closing);

        Ok(ShiftSummary {
            shift: self.shift.shift_name().to_string(),
            phases,
        })
    }

    fn open_till(&self) -> Result<()> {
        self.console.line(Phase::Opening.banner())?;
        self.console.line("Powering up the terminal...")?;
        self.shift.set_opening_float()?;
        self.shift.opening_checks()?;
        self.console.line("Till open!")?;
        self.console.blank()
    }

    fn process_movements(&self) -> Result<()> {
        self.console.line(Phase::Movements.banner())?;
        self.console
            .line(&format!("Processing {} shift sales...", self.shift.shift_name()))?;
        self.console.line("Movements recorded!")?;
        self.console.blank()
    }

    fn close_till(&self) -> Result<()> {
        self.console.line(Phase::Closing.banner())?;
        self.console.line("Totalling the drawer...")?;
        self.shift.reconcile_takings()?;
        self.shift.closing_procedures()?;
        self.console.line("Till closed!")?;
        self.console.blank()
    }
}
