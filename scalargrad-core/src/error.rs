use thiserror::Error;

/// Custom error type for the scalargrad engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    /// An operand that the operation cannot accept, e.g. a `Value` used as an exponent.
    #[error("Invalid operand for operation '{operation}': {reason}")]
    InvalidOperand { operation: String, reason: String },
}
