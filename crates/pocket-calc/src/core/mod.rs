//! Calculator core: tokens, arithmetic and the input state machine
//!
//! Everything in here is pure and headless. The terminal front-end and the
//! CLI only ever talk to [`Calculator`] or [`process_token`].

pub mod engine;
pub mod format;
mod operations;
pub mod token;

pub use engine::{process_token, Calculator, CalculatorState, Variant};
pub use format::format_number;
pub use operations::{calculate, Operation, UnaryFunction};
pub use token::Token;

use thiserror::Error;

/// Text shown on the display after any failed computation
pub const ERROR_DISPLAY: &str = "Error";

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
///
/// The engine never surfaces these through the display directly: every
/// variant collapses into [`ERROR_DISPLAY`] plus a full state reset. They
/// exist so callers (and tests) can tell *why* a computation failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("Division by zero")]
    DivisionByZero,

    /// Unary function applied outside its domain
    #[error("{function} is undefined for {value}")]
    Domain {
        /// The function that was applied
        function: UnaryFunction,
        /// The offending argument
        value: f64,
    },

    /// Result overflowed or is not a number
    #[error("Result is not finite: {0}")]
    NonFinite(f64),

    /// Display text could not be read back as a number
    #[error("Invalid operand: {0:?}")]
    InvalidOperand(String),

    /// Label does not name any calculator button
    #[error("Unknown token: {0:?}")]
    UnknownToken(String),

    /// Token exists but not on this calculator variant
    #[error("{token} is not available on the {variant} calculator")]
    Unsupported {
        /// The rejected token
        token: Token,
        /// The variant that rejected it
        variant: Variant,
    },
}
