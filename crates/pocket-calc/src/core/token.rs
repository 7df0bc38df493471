//! Input tokens
//!
//! One token per button press. Labels are the exact text printed on the
//! keypad, so `Token::from_str(button.label)` always round-trips.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{CalcError, Operation, UnaryFunction};

/// A single discrete calculator input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    /// Digit 0-9
    Digit(u8),
    /// Decimal point
    Decimal,
    /// Binary operator
    Operator(Operation),
    /// Scientific unary function
    Function(UnaryFunction),
    /// Evaluate the pending operation
    Equals,
    /// All clear
    Clear,
    /// Negate the displayed value
    SignFlip,
    /// Divide the displayed value by 100
    Percent,
}

impl Token {
    /// Returns the button label for this token
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Function(func) => func.name().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "AC".to_string(),
            Self::SignFlip => "+/-".to_string(),
            Self::Percent => "%".to_string(),
        }
    }

    /// Returns the digit as a char, for digit and decimal-point tokens
    #[must_use]
    pub fn to_char(&self) -> Option<char> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(*d), 10),
            Self::Decimal => Some('.'),
            _ => None,
        }
    }

    /// True for tokens only present on the scientific keypad
    #[must_use]
    pub const fn is_scientific(&self) -> bool {
        match self {
            Self::Operator(op) => op.is_scientific(),
            Self::Function(_) => true,
            _ => false,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for Token {
    type Err = CalcError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let token = match label {
            "." => Self::Decimal,
            "=" => Self::Equals,
            "AC" => Self::Clear,
            "+/-" => Self::SignFlip,
            "%" => Self::Percent,
            _ => {
                if let Some(op) = Operation::from_symbol(label) {
                    Self::Operator(op)
                } else if let Some(func) = UnaryFunction::from_name(label) {
                    Self::Function(func)
                } else {
                    let mut chars = label.chars();
                    match (chars.next().and_then(|c| c.to_digit(10)), chars.next()) {
                        (Some(d), None) => Self::Digit(d as u8),
                        _ => return Err(CalcError::UnknownToken(label.to_string())),
                    }
                }
            }
        };
        Ok(token)
    }
}
