pub mod desks;
pub mod register;
pub mod sale;
pub mod scenario;
pub mod shifts;

pub use crate::domain::model::{
    Payment, PaymentMethod, Phase, Receipt, RunSummary, Sale, SaleItem, SaleOutcome,
    ShiftSelection, ShiftSummary,
};
pub use crate::domain::ports::{Console, SaleDesk, ShiftRoutine, TillConfig};
pub use crate::utils::error::Result;
