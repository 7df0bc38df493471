//! TUI Application State
//!
//! Wraps a [`Calculator`] with the keypad focus and the bits of UI state the
//! renderer needs.

use crate::core::{format_number, Calculator, CalculatorState, Operation, Token, Variant};
use crate::keypad::Keypad;

use super::input::{Direction, KeyAction};

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    /// The engine
    calculator: Calculator,
    /// Button layout for the engine's variant
    keypad: Keypad,
    /// Focused button as (row, col)
    selected: (usize, usize),
    /// Most recent token, highlighted on the keypad
    last_pressed: Option<Token>,
    /// Operator waiting for its right-hand operand
    pending: Option<Operation>,
    /// Whether the help panel is visible
    show_help: bool,
    /// Whether the app should quit
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new(Variant::Basic)
    }
}

impl CalculatorApp {
    /// Creates an app for the given variant
    #[must_use]
    pub fn new(variant: Variant) -> Self {
        let keypad = Keypad::for_variant(variant);
        let selected = keypad.position_of_token(Token::Equals).unwrap_or((0, 0));
        Self {
            calculator: Calculator::with_variant(variant),
            keypad,
            selected,
            last_pressed: None,
            pending: None,
            show_help: true,
            should_quit: false,
        }
    }

    /// Returns the calculator variant
    #[must_use]
    pub fn variant(&self) -> Variant {
        self.calculator.variant()
    }

    /// Returns the display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.calculator.display()
    }

    /// Returns the engine state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        self.calculator.state()
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the focused button position
    #[must_use]
    pub fn selected(&self) -> (usize, usize) {
        self.selected
    }

    /// Returns the most recently pressed token
    #[must_use]
    pub fn last_pressed(&self) -> Option<Token> {
        self.last_pressed
    }

    /// Returns whether the help panel is visible
    #[must_use]
    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Shows or hides the help panel
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Focuses a button, clamping to the keypad
    pub fn select(&mut self, row: usize, col: usize) {
        let row = row.min(self.keypad.row_count().saturating_sub(1));
        let col = col.min(self.keypad.row_len(row).saturating_sub(1));
        self.selected = (row, col);
    }

    /// Moves focus one button in `direction`, stopping at the edges
    pub fn move_selection(&mut self, direction: Direction) {
        let (row, col) = self.selected;
        match direction {
            Direction::Up => self.select(row.saturating_sub(1), col),
            Direction::Down => self.select(row + 1, col),
            Direction::Left => self.select(row, col.saturating_sub(1)),
            Direction::Right => self.select(row, col + 1),
        }
    }

    /// Sends a token to the engine and focuses its button
    pub fn press(&mut self, token: Token) {
        if let Some((row, col)) = self.keypad.position_of_token(token) {
            self.selected = (row, col);
        }
        self.calculator.press(token);
        self.last_pressed = Some(token);
        self.pending = match token {
            _ if self.calculator.state().is_error() => None,
            Token::Operator(op) => Some(op),
            Token::Digit(_) | Token::Decimal | Token::SignFlip => self.pending,
            Token::Equals | Token::Clear | Token::Function(_) | Token::Percent => None,
        };
    }

    /// Returns the operator waiting for its right-hand operand
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operation> {
        self.pending
    }

    /// Presses the focused button
    pub fn press_selected(&mut self) {
        let (row, col) = self.selected;
        if let Some(token) = self.keypad.button_at(row, col).map(|b| b.token) {
            self.press(token);
        }
    }

    /// Same as pressing AC
    pub fn clear(&mut self) {
        self.press(Token::Clear);
    }

    /// Applies a key action; returns true if the app should quit
    pub fn handle(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::Press(token) => self.press(token),
            KeyAction::Move(direction) => self.move_selection(direction),
            KeyAction::PressSelected => self.press_selected(),
            KeyAction::ToggleHelp => self.toggle_help(),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
        self.should_quit
    }

    /// One-line summary of the pending operation
    #[must_use]
    pub fn status_line(&self) -> String {
        let state = self.calculator.state();
        if state.is_error() {
            return format!("{} | press any key to start over", self.variant());
        }
        match self.pending {
            Some(op) => format!(
                "{} | {} {}",
                self.variant(),
                format_number(state.operand1),
                op
            ),
            None => format!("{} | ready", self.variant()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Operation, UnaryFunction, ERROR_DISPLAY};

    // ===== Constructor tests =====

    #[test]
    fn test_app_new() {
        let app = CalculatorApp::new(Variant::Basic);
        assert_eq!(app.display(), "0");
        assert_eq!(app.variant(), Variant::Basic);
        assert!(app.last_pressed().is_none());
        assert!(app.show_help());
        assert!(!app.should_quit());
    }

    #[test]
    fn test_app_starts_focused_on_equals() {
        let app = CalculatorApp::default();
        let (row, col) = app.selected();
        assert_eq!(app.keypad().button_at(row, col).unwrap().token, Token::Equals);
    }

    #[test]
    fn test_scientific_app_has_function_row() {
        let app = CalculatorApp::new(Variant::Scientific);
        assert_eq!(app.keypad().row_count(), 6);
    }

    // ===== Pressing =====

    #[test]
    fn test_press_updates_display_and_focus() {
        let mut app = CalculatorApp::default();
        app.press(Token::Digit(8));
        assert_eq!(app.display(), "8");
        assert_eq!(app.last_pressed(), Some(Token::Digit(8)));
        assert_eq!(app.keypad().position_of_label("8"), Some(app.selected()));
    }

    #[test]
    fn test_press_selected() {
        let mut app = CalculatorApp::default();
        let (row, col) = app.keypad().position_of_label("4").unwrap();
        app.select(row, col);
        app.press_selected();
        assert_eq!(app.display(), "4");
    }

    #[test]
    fn test_scientific_token_ignored_on_basic() {
        let mut app = CalculatorApp::default();
        app.press(Token::Digit(9));
        app.press(Token::Function(UnaryFunction::Sqrt));
        assert_eq!(app.display(), "9");
    }

    #[test]
    fn test_clear() {
        let mut app = CalculatorApp::default();
        app.press(Token::Digit(9));
        app.clear();
        assert_eq!(app.display(), "0");
        assert_eq!(app.last_pressed(), Some(Token::Clear));
    }

    // ===== Selection =====

    #[test]
    fn test_select_clamps_to_keypad() {
        let mut app = CalculatorApp::default();
        app.select(99, 99);
        // Bottom row is [0] [.] [=]
        assert_eq!(app.selected(), (4, 2));
    }

    #[test]
    fn test_move_selection_stops_at_edges() {
        let mut app = CalculatorApp::default();
        app.select(0, 0);
        app.move_selection(Direction::Up);
        app.move_selection(Direction::Left);
        assert_eq!(app.selected(), (0, 0));
        app.move_selection(Direction::Right);
        app.move_selection(Direction::Down);
        assert_eq!(app.selected(), (1, 1));
    }

    #[test]
    fn test_move_down_into_short_row_clamps_column() {
        let mut app = CalculatorApp::default();
        app.select(3, 3);
        app.move_selection(Direction::Down);
        assert_eq!(app.selected(), (4, 2));
    }

    #[test]
    fn test_move_from_wide_scientific_row() {
        let mut app = CalculatorApp::new(Variant::Scientific);
        app.select(0, 6);
        app.move_selection(Direction::Down);
        assert_eq!(app.selected(), (1, 3));
    }

    // ===== Actions =====

    #[test]
    fn test_handle_actions() {
        let mut app = CalculatorApp::default();
        assert!(!app.handle(KeyAction::Press(Token::Digit(3))));
        assert!(!app.handle(KeyAction::Press(Token::Operator(Operation::Multiply))));
        assert!(!app.handle(KeyAction::Press(Token::Digit(3))));
        assert!(!app.handle(KeyAction::Press(Token::Equals)));
        assert_eq!(app.display(), "9");

        assert!(!app.handle(KeyAction::ToggleHelp));
        assert!(!app.show_help());
        assert!(!app.handle(KeyAction::None));
        assert!(app.handle(KeyAction::Quit));
    }

    #[test]
    fn test_handle_move_and_press_selected() {
        let mut app = CalculatorApp::default();
        app.select(1, 0); // 7
        app.handle(KeyAction::Move(Direction::Right)); // 8
        app.handle(KeyAction::PressSelected);
        assert_eq!(app.display(), "8");
    }

    // ===== Status =====

    #[test]
    fn test_status_line_ready() {
        let app = CalculatorApp::default();
        assert_eq!(app.status_line(), "basic | ready");
    }

    #[test]
    fn test_status_line_pending_operator() {
        let mut app = CalculatorApp::new(Variant::Scientific);
        app.press(Token::Digit(5));
        app.press(Token::Operator(Operation::Power));
        assert_eq!(app.status_line(), "scientific | 5 x^y");
    }

    #[test]
    fn test_status_line_pending_on_zero() {
        let mut app = CalculatorApp::default();
        app.press(Token::Digit(0));
        app.press(Token::Operator(Operation::Add));
        assert_eq!(app.status_line(), "basic | 0 +");
    }

    #[test]
    fn test_status_line_keeps_operator_while_typing() {
        let mut app = CalculatorApp::default();
        for token in [
            Token::Digit(1),
            Token::Digit(2),
            Token::Operator(Operation::Subtract),
            Token::Digit(4),
            Token::Decimal,
        ] {
            app.press(token);
        }
        assert_eq!(app.pending_operator(), Some(Operation::Subtract));
        assert_eq!(app.status_line(), "basic | 12 -");

        app.press(Token::Equals);
        assert_eq!(app.pending_operator(), None);
        assert_eq!(app.status_line(), "basic | ready");
    }

    #[test]
    fn test_status_line_error() {
        let mut app = CalculatorApp::default();
        for token in [
            Token::Digit(1),
            Token::Operator(Operation::Divide),
            Token::Digit(0),
            Token::Equals,
        ] {
            app.press(token);
        }
        assert_eq!(app.display(), ERROR_DISPLAY);
        assert!(app.status_line().contains("start over"));
    }
}
