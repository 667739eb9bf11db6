// ============================================================================
// Currency Errors
// Error types for unit-checked currency arithmetic
// ============================================================================

use thiserror::Error;

/// Errors that can occur while constructing or combining currency values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurrencyError {
    /// Raw input to a unit constructor is negative, non-numeric, or non-finite.
    #[error("cannot construct {symbol} amount from {input:?}: {reason}")]
    Construction {
        /// Symbol of the unit being constructed
        symbol: String,
        /// The offending raw input, rendered for diagnostics
        input: String,
        /// Why the input was rejected
        reason: String,
    },

    /// Operand unit types are incompatible for the attempted operation.
    #[error("unable to {method} between {left} and {right}")]
    InvalidOperation {
        /// Canonical name of the attempted operation
        method: &'static str,
        /// Unit symbol of the left operand
        left: String,
        /// Unit symbol (or scalar value) of the right operand
        right: String,
    },

    /// Attempted division by a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// Resolver called with a raw amount and no unit reference.
    #[error("cannot resolve a raw amount without a unit reference")]
    MissingUnit,

    /// Resolver's unit key has no registered unit.
    #[error("no currency registered for symbol {0:?}")]
    UnknownCurrency(String),
}

/// Result type alias for currency operations
pub type CurrencyResult<T> = Result<T, CurrencyError>;
