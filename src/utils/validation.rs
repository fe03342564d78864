use crate::utils::error::{Result, TillError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TillError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_negative_amount(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(TillError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Amount must be a non-negative number".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("station", "Highway 101").is_ok());
        assert!(validate_non_empty_string("station", "").is_err());
        assert!(validate_non_empty_string("station", "   ").is_err());
    }

    #[test]
    fn test_validate_non_negative_amount() {
        assert!(validate_non_negative_amount("opening_float", 200.0).is_ok());
        assert!(validate_non_negative_amount("opening_float", 0.0).is_ok());
        assert!(validate_non_negative_amount("opening_float", -5.0).is_err());
        assert!(validate_non_negative_amount("opening_float", f64::NAN).is_err());
        assert!(validate_non_negative_amount("opening_float", f64::INFINITY).is_err());
    }
}
