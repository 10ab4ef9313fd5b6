//! Configuration errors
//!
//! The simulation itself never fails; only construction does.

/// Rejected configuration
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// A size, speed or similar quantity that must be finite and strictly positive
    #[error("{what} must be positive, got {value}")]
    NonPositive { what: &'static str, value: f64 },

    /// Pool capacity of zero
    #[error("obstacle pool capacity must be at least 1")]
    ZeroCapacity,

    /// Row generation parameters that cannot produce a row
    #[error("invalid row layout: {0}")]
    RowLayout(&'static str),

    /// Tuning file could not be parsed
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ConfigError {
    /// Fail unless `value` is finite and `> 0`
    pub(crate) fn require_positive(what: &'static str, value: f64) -> Result<(), Self> {
        if value > 0.0 && value.is_finite() {
            Ok(())
        } else {
            Err(Self::NonPositive { what, value })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_positive() {
        assert!(ConfigError::require_positive("width", 1.0).is_ok());
        assert!(ConfigError::require_positive("width", 0.0).is_err());
        assert!(ConfigError::require_positive("width", -3.0).is_err());
        assert!(ConfigError::require_positive("width", f64::NAN).is_err());
        assert!(ConfigError::require_positive("width", f64::INFINITY).is_err());
    }

    #[test]
    fn test_error_message() {
        let err = ConfigError::require_positive("brick size", -1.0).unwrap_err();
        assert_eq!(err.to_string(), "brick size must be positive, got -1");
    }
}
