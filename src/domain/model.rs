use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// The three stages every till run walks through, in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Opening,
    Movements,
    Closing,
}

impl Phase {
    pub fn banner(&self) -> &'static str {
        match self {
            Phase::Opening => "=== TILL OPENING ===",
            Phase::Movements => "=== SHIFT MOVEMENTS ===",
            Phase::Closing => "=== TILL CLOSING ===",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ShiftSelection {
    Morning,
    Night,
    All,
}

impl ShiftSelection {
    pub fn includes_morning(&self) -> bool {
        matches!(self, ShiftSelection::Morning | ShiftSelection::All)
    }

    pub fn includes_night(&self) -> bool {
        matches!(self, ShiftSelection::Night | ShiftSelection::All)
    }
}

/// Record of a single shift run: which shift, and the phases in the order
/// they completed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftSummary {
    pub shift: String,
    pub phases: Vec<Phase>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub run_id: String,
    pub station: String,
    pub started_at: DateTime<Local>,
    pub shifts: Vec<ShiftSummary>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Cash,
    Debit,
    Credit,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMethod::Cash => write!(f, "CASH"),
            PaymentMethod::Debit => write!(f, "DEBIT"),
            PaymentMethod::Credit => write!(f, "CREDIT"),
        }
    }
}

/// One line of a sale. Fuel items carry pump/tank/litres, store items carry
/// a product id; the desk handling the sale decides which fields it needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleItem {
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub pump_id: Option<String>,
    pub tank_id: Option<String>,
    pub litres: Option<f64>,
    pub product_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sale {
    pub station_id: String,
    pub items: Vec<SaleItem>,
    pub customer_tax_id: Option<String>,
    pub payment_method: PaymentMethod,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    pub number: String,
    pub issued_at: DateTime<Local>,
    pub station_id: String,
    pub total: f64,
    pub taxes: f64,
    pub customer_tax_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub method: PaymentMethod,
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleOutcome {
    pub sale_id: String,
    pub gross: f64,
    pub discount: f64,
    pub taxes: f64,
    pub net: f64,
    pub receipt: Receipt,
    pub payment: Payment,
}
