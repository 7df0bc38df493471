//! The calculator input state machine
//!
//! [`process_token`] is the whole engine: it takes the current
//! [`CalculatorState`] and one [`Token`] and returns the next state.
//! [`Calculator`] wraps it for callers that want to hold state in place.
//!
//! Operators chain left to right with no precedence: `2 + 3 * 4 =` is
//! `(2 + 3) * 4`. Every failure shows [`ERROR_DISPLAY`] and resets the
//! pending operation.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    calculate, format_number, CalcError, CalcResult, Operation, Token, UnaryFunction,
    ERROR_DISPLAY,
};

/// Which keypad the calculator exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Digits, four operators, AC, +/-, %
    #[default]
    Basic,
    /// Basic plus x^y and the six unary functions
    Scientific,
}

impl Variant {
    /// Returns true if `token` has a button on this variant
    #[must_use]
    pub const fn supports(self, token: Token) -> bool {
        match self {
            Self::Basic => !token.is_scientific(),
            Self::Scientific => true,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic => f.write_str("basic"),
            Self::Scientific => f.write_str("scientific"),
        }
    }
}

/// Everything the calculator remembers between key presses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Numeral being typed, last result, or [`ERROR_DISPLAY`]
    pub display: String,
    /// Left-hand side of the pending operation
    pub operand1: f64,
    /// Pending operation
    pub operator: Operation,
    /// Next digit starts a new numeral instead of extending the display
    pub awaiting_new_operand: bool,
    /// Right-hand side of the last `=`, kept only until the next token
    pub repeat_operand: Option<f64>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            operand1: 0.0,
            operator: Operation::Add,
            awaiting_new_operand: true,
            repeat_operand: None,
        }
    }
}

impl CalculatorState {
    /// Returns true if the display shows the error sentinel
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.display == ERROR_DISPLAY
    }

    /// Parses the display as a number
    pub fn value(&self) -> CalcResult<f64> {
        self.display
            .parse::<f64>()
            .map_err(|_| CalcError::InvalidOperand(self.display.clone()))
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    /// Shows the error sentinel and drops any pending operation
    fn fail(&mut self, err: &CalcError) {
        debug!(error = %err, "calculation failed, resetting");
        self.reset();
        self.display = ERROR_DISPLAY.to_string();
    }

    fn enter_digit(&mut self, token: Token) {
        let Some(ch) = token.to_char() else {
            return;
        };
        if ch == '.' && self.display.contains('.') && !self.awaiting_new_operand {
            return;
        }
        if self.display == "0" || self.awaiting_new_operand {
            self.display = if ch == '.' {
                "0.".to_string()
            } else {
                ch.to_string()
            };
            self.awaiting_new_operand = false;
        } else {
            self.display.push(ch);
        }
    }

    fn apply_operator(&mut self, op: Operation) {
        if !self.awaiting_new_operand {
            match self.evaluate(None) {
                Ok(result) => self.display = format_number(result),
                Err(err) => return self.fail(&err),
            }
        }
        match self.value() {
            Ok(value) => {
                self.operand1 = value;
                self.operator = op;
                self.awaiting_new_operand = true;
            }
            Err(err) => self.fail(&err),
        }
    }

    fn apply_equals(&mut self, repeat: Option<f64>) {
        let rhs = match repeat.map_or_else(|| self.value(), Ok) {
            Ok(rhs) => rhs,
            Err(err) => return self.fail(&err),
        };
        match self.evaluate(Some(rhs)) {
            Ok(result) => {
                self.display = format_number(result);
                self.operand1 = result;
                self.awaiting_new_operand = true;
                self.repeat_operand = Some(rhs);
            }
            Err(err) => self.fail(&err),
        }
    }

    fn apply_function(&mut self, func: UnaryFunction) {
        match self.value().and_then(|value| func.apply(value)) {
            Ok(result) => {
                self.display = format_number(result);
                self.awaiting_new_operand = true;
            }
            Err(err) => self.fail(&err),
        }
    }

    fn apply_percent(&mut self) {
        match self.value() {
            Ok(value) => {
                self.display = format_number(value / 100.0);
                self.awaiting_new_operand = true;
            }
            Err(err) => self.fail(&err),
        }
    }

    fn flip_sign(&mut self) {
        match self.value() {
            Ok(value) => {
                if value != 0.0 {
                    self.display = format_number(-value);
                }
                self.awaiting_new_operand = false;
            }
            Err(err) => self.fail(&err),
        }
    }

    /// `operand1 <operator> rhs`, with `rhs` defaulting to the display
    fn evaluate(&self, rhs: Option<f64>) -> CalcResult<f64> {
        let rhs = match rhs {
            Some(rhs) => rhs,
            None => self.value()?,
        };
        calculate(self.operand1, rhs, self.operator)
    }
}

/// Feeds one token through the state machine
///
/// Tokens the variant has no button for are ignored. Any token on an error
/// display clears it back to `0`; a digit then goes on to start a fresh
/// numeral, every other token stops there.
#[must_use]
pub fn process_token(mut state: CalculatorState, token: Token, variant: Variant) -> CalculatorState {
    if !variant.supports(token) {
        debug!(%token, %variant, "ignoring token not on this keypad");
        return state;
    }

    let repeat = state.repeat_operand.take();
    if state.is_error() {
        state.reset();
        // Only a digit carries on into a fresh numeral
        if !matches!(token, Token::Digit(_)) {
            debug!(%token, "cleared error display");
            return state;
        }
    }

    match token {
        Token::Clear => state.reset(),
        Token::Digit(_) | Token::Decimal => state.enter_digit(token),
        Token::Operator(op) => state.apply_operator(op),
        Token::Function(func) => state.apply_function(func),
        Token::Equals => state.apply_equals(repeat),
        Token::Percent => state.apply_percent(),
        Token::SignFlip => state.flip_sign(),
    }

    debug!(
        %token,
        display = %state.display,
        operand1 = state.operand1,
        operator = %state.operator,
        awaiting = state.awaiting_new_operand,
        "processed token"
    );
    state
}

/// Stateful calculator: one variant, one [`CalculatorState`]
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    variant: Variant,
    state: CalculatorState,
}

impl Calculator {
    /// Creates a basic calculator showing `0`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator for the given variant
    #[must_use]
    pub fn with_variant(variant: Variant) -> Self {
        Self {
            variant,
            state: CalculatorState::default(),
        }
    }

    /// Creates a scientific calculator
    #[must_use]
    pub fn scientific() -> Self {
        Self::with_variant(Variant::Scientific)
    }

    /// Returns the variant
    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Returns the current state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Returns the current display text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.state.display
    }

    /// Processes one token and returns the new display
    pub fn press(&mut self, token: Token) -> &str {
        let state = std::mem::take(&mut self.state);
        self.state = process_token(state, token, self.variant);
        &self.state.display
    }

    /// Parses a button label and processes it
    ///
    /// Unlike [`press`](Self::press), labels for buttons this variant does
    /// not have are rejected instead of ignored.
    pub fn press_label(&mut self, label: &str) -> CalcResult<&str> {
        let token: Token = label.parse()?;
        if !self.variant.supports(token) {
            return Err(CalcError::Unsupported {
                token,
                variant: self.variant,
            });
        }
        Ok(self.press(token))
    }

    /// Same as pressing AC
    pub fn clear(&mut self) {
        self.state = CalculatorState::default();
    }
}
