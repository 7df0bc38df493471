//! Pocket Calc - basic and scientific calculator engine
//!
//! The engine is a small state machine: every button press is a [`Token`],
//! and each token moves a [`CalculatorState`] to the next one. Operators
//! chain left to right without precedence, exactly like a desk calculator.
//!
//! - [`core`]: tokens, arithmetic, display formatting, the state machine
//! - [`keypad`]: button layouts as plain data
//! - [`driver`]: one trait over every front-end, plus shared checks
//! - [`weather`]: JMA area and forecast documents, forecast icon classes
//! - `tui`: terminal front-end (feature `tui`, on by default)
//!
//! # Example
//!
//! ```rust
//! use pocket_calc::prelude::*;
//!
//! let mut calc = Calculator::new();
//! for label in ["2", "+", "3", "*", "4", "="] {
//!     calc.press_label(label).unwrap();
//! }
//! assert_eq!(calc.display(), "20");
//!
//! // Errors show on the display and reset the pending operation
//! let mut calc = Calculator::scientific();
//! calc.press(Token::Digit(4));
//! calc.press(Token::SignFlip);
//! assert_eq!(calc.press(Token::Function(UnaryFunction::Sqrt)), "Error");
//! ```
//!
//! [`Token`]: core::Token
//! [`CalculatorState`]: core::CalculatorState

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![warn(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;
pub mod keypad;
pub mod weather;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{
        calculate, format_number, process_token, CalcError, CalcResult, Calculator,
        CalculatorState, Operation, Token, UnaryFunction, Variant, ERROR_DISPLAY,
    };
    pub use crate::driver::CalculatorDriver;
    pub use crate::keypad::{ButtonCategory, ButtonDescriptor, ButtonStyle, Keypad, Swatch};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
}
