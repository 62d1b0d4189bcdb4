//! Errors returned by the validating constructors and scaling operations.
//!
//! The operator path never fails: it follows IEEE-754 and saturates when a
//! float becomes an integer nanometer count. The `try_*` entry points reject
//! those inputs up front instead.

use super::distance::DistanceUnit;

/// Errors raised when an input falls outside the domain of a value type
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DomainError {
    /// An input was NaN or infinite
    NonFinite {
        /// Name of the offending input (e.g. `"value"`, `"scale"`, `"x"`)
        name: &'static str,
        /// The rejected value
        value: f64,
    },
    /// The nanometer count of `value` in `unit` does not fit in an `i64`
    OutOfRange {
        /// The rejected value, expressed in `unit`
        value: f64,
        /// Unit the value was given in
        unit: DistanceUnit,
    },
    /// A divisor was zero
    ZeroDivisor,
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::NonFinite { name, value } => {
                write!(f, "'{name}' must be finite, got {value}")
            }
            DomainError::OutOfRange { value, unit } => {
                write!(f, "{value} {unit} is not representable in nanometers")
            }
            DomainError::ZeroDivisor => write!(f, "Division by zero"),
        }
    }
}

impl std::error::Error for DomainError {}

/// Reject NaN and infinities, naming the input in the error.
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<f64, DomainError> {
    if value.is_finite() {
        Ok(value)
    } else {
        tracing::debug!(name, value, "rejected non-finite input");
        Err(DomainError::NonFinite { name, value })
    }
}

/// Reject a zero divisor. Callers check finiteness first.
pub(crate) fn ensure_nonzero(divisor: f64) -> Result<f64, DomainError> {
    if divisor == 0.0 {
        tracing::debug!("rejected zero divisor");
        Err(DomainError::ZeroDivisor)
    } else {
        Ok(divisor)
    }
}
