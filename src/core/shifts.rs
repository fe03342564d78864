use crate::core::{Console, ShiftRoutine};
use crate::utils::error::Result;

/// Day-opening shift: starts from a fixed float and hands over to the
/// afternoon crew.
pub struct MorningShift<C: Console> {
    console: C,
    opening_float: f64,
}

impl<C: Console> MorningShift<C> {
    pub fn new(console: C, opening_float: f64) -> Self {
        Self {
            console,
            opening_float,
        }
    }
}

impl<C: Console> ShiftRoutine for MorningShift<C> {
    fn shift_name(&self) -> &str {
        "MORNING"
    }

    fn set_opening_float(&self) -> Result<()> {
        self.console
            .line(&format!("Setting the opening float: ${:.2}", self.opening_float))
    }

    fn opening_checks(&self) -> Result<()> {
        self.console.line("Checking the previous shift's close-out")?;
        self.console.line("Testing receipt printer and cash drawer")
    }

    fn reconcile_takings(&self) -> Result<()> {
        self.console.line("Standard count of the drawer")?;
        self.console.line("Preparing the morning report")
    }

    fn closing_procedures(&self) -> Result<()> {
        self.console.line("Handing figures over to the afternoon shift")?;
        self.console.line("Leaving the float for the next shift")
    }
}

/// Last shift of the day: inherits its balance and locks the site down.
pub struct NightShift<C: Console> {
    console: C,
    carried_balance: f64,
}

impl<C: Console> NightShift<C> {
    pub fn new(console: C, carried_balance: f64) -> Self {
        Self {
            console,
            carried_balance,
        }
    }
}

impl<C: Console> ShiftRoutine for NightShift<C> {
    fn shift_name(&self) -> &str {
        "NIGHT"
    }

    fn set_opening_float(&self) -> Result<()> {
        self.console.line(&format!(
            "Carrying over balance from the previous shift: ${:.2}",
            self.carried_balance
        ))
    }

    fn opening_checks(&self) -> Result<()> {
        self.console.line("Arming the night security protocol")?;
        self.console.line("Checking the alarm systems")
    }

    fn reconcile_takings(&self) -> Result<()> {
        self.console.line("Strict reconciliation, triple count")?;
        self.console.line("Additional security check")?;
        self.console.line("Building the consolidated daily report")
    }

    fn closing_procedures(&self) -> Result<()> {
        self.console.line("Locking takings in the safe")?;
        self.console.line("Sealing the till")?;
        self.console.line("Arming the alarms")
    }
}
