//! Error types for the `bonemeal-yield` crate.
//!
//! The calculator itself never fails. Errors only arise when a
//! [`YieldConfig`](crate::YieldConfig) is validated before use.

use rust_decimal::Decimal;

/// Errors that can occur while validating yield configuration.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum YieldError {
    /// A multiplier was negative.
    #[error("yield factor {field} must not be negative (got {value})")]
    NegativeFactor {
        /// Name of the offending field.
        field: &'static str,
        /// The configured value.
        value: Decimal,
    },
}
