//! Keypad layout as plain data
//!
//! Every button is a [`ButtonDescriptor`]: a label, the token it sends, a
//! category, and a style derived from that category. Front-ends render the
//! rows generically; nothing here knows about terminals.

use serde::{Deserialize, Serialize};

use crate::core::{Operation, Token, UnaryFunction, Variant};

/// Button group, which also decides its colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonCategory {
    /// 0-9 and the decimal point
    Digit,
    /// Binary operators and equals
    Operator,
    /// AC, +/-, % and the scientific functions
    Extra,
}

impl ButtonCategory {
    /// Returns the colors buttons of this category are drawn with
    #[must_use]
    pub const fn style(self) -> ButtonStyle {
        match self {
            Self::Digit => ButtonStyle {
                background: Swatch::Charcoal,
                foreground: Swatch::White,
            },
            Self::Operator => ButtonStyle {
                background: Swatch::Orange,
                foreground: Swatch::White,
            },
            Self::Extra => ButtonStyle {
                background: Swatch::BlueGrey,
                foreground: Swatch::Black,
            },
        }
    }
}

/// Named colors, mapped to concrete colors by each front-end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Swatch {
    /// Translucent white over black
    Charcoal,
    /// Operator orange
    Orange,
    /// Light blue-grey
    BlueGrey,
    /// White
    White,
    /// Black
    Black,
}

/// Foreground and background of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ButtonStyle {
    /// Fill color
    pub background: Swatch,
    /// Label color
    pub foreground: Swatch,
}

/// One keypad button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonDescriptor {
    /// Text printed on the button
    pub label: String,
    /// Token sent when pressed
    pub token: Token,
    /// Button group
    pub category: ButtonCategory,
    /// Colors
    pub style: ButtonStyle,
    /// Relative width within its row
    pub span: u16,
}

impl ButtonDescriptor {
    /// Creates a descriptor, deriving the label and style
    #[must_use]
    pub fn new(token: Token, category: ButtonCategory) -> Self {
        Self {
            label: token.label(),
            token,
            category,
            style: category.style(),
            span: 1,
        }
    }

    /// Digit or decimal-point button
    #[must_use]
    pub fn digit(token: Token) -> Self {
        Self::new(token, ButtonCategory::Digit)
    }

    /// Operator button
    #[must_use]
    pub fn operator(op: Operation) -> Self {
        Self::new(Token::Operator(op), ButtonCategory::Operator)
    }

    /// AC, +/-, %, and scientific buttons
    #[must_use]
    pub fn extra(token: Token) -> Self {
        Self::new(token, ButtonCategory::Extra)
    }

    /// Sets the relative width
    #[must_use]
    pub fn with_span(mut self, span: u16) -> Self {
        self.span = span.max(1);
        self
    }
}

/// Rows of buttons for one calculator variant
///
/// ```text
/// scientific only: [sin][cos][tan][ln][log10][sqrt][x^y]
///                  [AC ][+/-][ % ][ / ]
///                  [ 7 ][ 8 ][ 9 ][ * ]
///                  [ 4 ][ 5 ][ 6 ][ - ]
///                  [ 1 ][ 2 ][ 3 ][ + ]
///                  [   0    ][ . ][ = ]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keypad {
    variant: Variant,
    rows: Vec<Vec<ButtonDescriptor>>,
}

impl Keypad {
    /// Creates the keypad for a variant
    #[must_use]
    pub fn for_variant(variant: Variant) -> Self {
        let mut rows = Vec::with_capacity(6);
        if variant == Variant::Scientific {
            let mut functions: Vec<_> = UnaryFunction::ALL
                .into_iter()
                .map(|func| ButtonDescriptor::extra(Token::Function(func)))
                .collect();
            functions.push(ButtonDescriptor::extra(Token::Operator(Operation::Power)));
            rows.push(functions);
        }

        let digit = |d| ButtonDescriptor::digit(Token::Digit(d));
        rows.push(vec![
            ButtonDescriptor::extra(Token::Clear),
            ButtonDescriptor::extra(Token::SignFlip),
            ButtonDescriptor::extra(Token::Percent),
            ButtonDescriptor::operator(Operation::Divide),
        ]);
        rows.push(vec![
            digit(7),
            digit(8),
            digit(9),
            ButtonDescriptor::operator(Operation::Multiply),
        ]);
        rows.push(vec![
            digit(4),
            digit(5),
            digit(6),
            ButtonDescriptor::operator(Operation::Subtract),
        ]);
        rows.push(vec![
            digit(1),
            digit(2),
            digit(3),
            ButtonDescriptor::operator(Operation::Add),
        ]);
        rows.push(vec![
            digit(0).with_span(2),
            ButtonDescriptor::digit(Token::Decimal),
            ButtonDescriptor::new(Token::Equals, ButtonCategory::Operator),
        ]);

        Self { variant, rows }
    }

    /// Basic keypad
    #[must_use]
    pub fn basic() -> Self {
        Self::for_variant(Variant::Basic)
    }

    /// Scientific keypad
    #[must_use]
    pub fn scientific() -> Self {
        Self::for_variant(Variant::Scientific)
    }

    /// Returns the variant this keypad belongs to
    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Returns the rows, top to bottom
    #[must_use]
    pub fn rows(&self) -> &[Vec<ButtonDescriptor>] {
        &self.rows
    }

    /// Returns the number of rows
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of buttons in a row (0 if out of range)
    #[must_use]
    pub fn row_len(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, Vec::len)
    }

    /// Iterates all buttons in reading order
    pub fn buttons(&self) -> impl Iterator<Item = &ButtonDescriptor> {
        self.rows.iter().flatten()
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons().count()
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn button_at(&self, row: usize, col: usize) -> Option<&ButtonDescriptor> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Finds a button's `(row, col)` by label
    #[must_use]
    pub fn position_of_label(&self, label: &str) -> Option<(usize, usize)> {
        self.position(|b| b.label == label)
    }

    /// Finds a button's `(row, col)` by token
    #[must_use]
    pub fn position_of_token(&self, token: Token) -> Option<(usize, usize)> {
        self.position(|b| b.token == token)
    }

    fn position(&self, pred: impl Fn(&ButtonDescriptor) -> bool) -> Option<(usize, usize)> {
        self.rows.iter().enumerate().find_map(|(r, row)| {
            row.iter().position(&pred).map(|c| (r, c))
        })
    }
}

impl Default for Keypad {
    fn default() -> Self {
        Self::basic()
    }
}
