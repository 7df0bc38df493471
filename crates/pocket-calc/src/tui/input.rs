//! Keyboard input handling
//!
//! Maps crossterm key events to [`KeyAction`]s. Every calculator button has
//! a direct key; the arrow keys and Space drive the on-screen keypad.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::{Operation, Token, UnaryFunction};

/// Focus movement on the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Previous row
    Up,
    /// Next row
    Down,
    /// Previous column
    Left,
    /// Next column
    Right,
}

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Send a token to the calculator
    Press(Token),
    /// Move keypad focus
    Move(Direction),
    /// Press the focused keypad button
    PressSelected,
    /// Show or hide the help panel
    ToggleHelp,
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        // Windows reports releases too
        if kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(c) => Self::char_action(c),
            KeyCode::Enter => KeyAction::Press(Token::Equals),
            KeyCode::Esc | KeyCode::Delete => KeyAction::Press(Token::Clear),
            KeyCode::Up => KeyAction::Move(Direction::Up),
            KeyCode::Down => KeyAction::Move(Direction::Down),
            KeyCode::Left => KeyAction::Move(Direction::Left),
            KeyCode::Right => KeyAction::Move(Direction::Right),
            _ => KeyAction::None,
        }
    }

    fn char_action(c: char) -> KeyAction {
        if let Some(d) = c.to_digit(10) {
            return KeyAction::Press(Token::Digit(d as u8));
        }
        let token = match c {
            '.' | ',' => Token::Decimal,
            '+' => Token::Operator(Operation::Add),
            '-' => Token::Operator(Operation::Subtract),
            '*' | 'x' => Token::Operator(Operation::Multiply),
            '/' => Token::Operator(Operation::Divide),
            '^' => Token::Operator(Operation::Power),
            '=' => Token::Equals,
            '%' => Token::Percent,
            'n' => Token::SignFlip,
            'a' => Token::Clear,
            's' => Token::Function(UnaryFunction::Sin),
            'c' => Token::Function(UnaryFunction::Cos),
            't' => Token::Function(UnaryFunction::Tan),
            'l' => Token::Function(UnaryFunction::Ln),
            'g' => Token::Function(UnaryFunction::Log10),
            'r' => Token::Function(UnaryFunction::Sqrt),
            ' ' => return KeyAction::PressSelected,
            '?' => return KeyAction::ToggleHelp,
            'q' => return KeyAction::Quit,
            _ => return KeyAction::None,
        };
        KeyAction::Press(token)
    }
}
