use thiserror::Error;

#[derive(Error, Debug)]
pub enum TillError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Sale rejected: {message}")]
    SaleValidation { message: String },

    #[error("Insufficient stock for product {product}")]
    OutOfStock { product: String },
}

pub type Result<T> = std::result::Result<T, TillError>;
