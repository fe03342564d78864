use crate::domain::model::{Sale, SaleOutcome, ShiftSelection};
use crate::utils::error::Result;

/// Sink for simulated register output. A failed write is fatal; there is no
/// retry path.
pub trait Console: Send + Sync {
    fn line(&self, text: &str) -> Result<()>;

    fn blank(&self) -> Result<()> {
        self.line("")
    }
}

/// Capability set a shift variant supplies to the register engine. The
/// engine alone owns phase ordering; implementations only fill in the
/// delegated steps.
pub trait ShiftRoutine: Send + Sync {
    fn shift_name(&self) -> &str;
    fn set_opening_float(&self) -> Result<()>;
    fn opening_checks(&self) -> Result<()>;
    fn reconcile_takings(&self) -> Result<()>;
    fn closing_procedures(&self) -> Result<()>;
}

/// Hooks a sale desk plugs into the fixed sale sequence. `discount`,
/// `tax_rate` and `finalize` have defaults matching a plain counter sale.
pub trait SaleDesk: Send + Sync {
    fn desk_name(&self) -> &str;

    fn validate(&self, sale: &Sale) -> Result<()>;

    fn update_stock(&self, sale: &Sale) -> Result<()>;

    fn discount(&self, _sale: &Sale, _gross: f64) -> f64 {
        0.0
    }

    fn tax_rate(&self) -> f64 {
        0.05
    }

    fn finalize(&self, _outcome: &SaleOutcome) -> Result<()> {
        Ok(())
    }
}

pub trait TillConfig: Send + Sync {
    fn station(&self) -> &str;
    fn opening_float(&self) -> f64;
    fn carried_balance(&self) -> f64;
    fn shifts(&self) -> ShiftSelection;
}
