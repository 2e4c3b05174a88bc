//! Error types for kinematics evaluation.

use thiserror::Error;

/// Error type for kinematic and arclength operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KinematicsError {
    /// A caller-supplied argument or configuration value is out of range.
    #[error("Invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },
}

/// Result type alias for kinematic operations.
pub type Result<T> = std::result::Result<T, KinematicsError>;

impl KinematicsError {
    /// Create an invalid argument error.
    #[must_use]
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// Error for a count that must be strictly positive.
    #[must_use]
    pub fn non_positive_count(name: &'static str, value: usize) -> Self {
        Self::invalid_argument(name, format!("must be greater than zero, got {value}"))
    }

    /// Error for a length or coefficient that must be finite and strictly positive.
    #[must_use]
    pub fn non_positive_value(name: &'static str, value: f64) -> Self {
        Self::invalid_argument(name, format!("must be finite and positive, got {value}"))
    }

    /// Error for a value that must be finite.
    #[must_use]
    pub fn non_finite(name: &'static str, value: f64) -> Self {
        Self::invalid_argument(name, format!("must be finite, got {value}"))
    }
}

/// Reject `value` unless it is finite and strictly positive.
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(KinematicsError::non_positive_value(name, value))
    }
}

/// Reject `value` unless it is finite.
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(KinematicsError::non_finite(name, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = KinematicsError::non_positive_count("sample_count", 0);
        let message = err.to_string();
        assert!(message.contains("sample_count"));
        assert!(message.contains("greater than zero"));
    }

    #[test]
    fn test_ensure_positive() {
        assert_eq!(ensure_positive("length", 2.5), Ok(2.5));
        assert!(ensure_positive("length", 0.0).is_err());
        assert!(ensure_positive("length", -1.0).is_err());
        assert!(ensure_positive("length", f64::NAN).is_err());
        assert!(ensure_positive("length", f64::INFINITY).is_err());
    }

    #[test]
    fn test_ensure_finite() {
        assert_eq!(ensure_finite("time", -3.0), Ok(-3.0));
        assert!(ensure_finite("time", f64::NEG_INFINITY).is_err());
    }
}
