//! Keypad widget
//!
//! Draws any [`Keypad`] from its descriptors: one row of cells per keypad
//! row, cell widths proportional to each button's span, colors from the
//! button's style.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::core::Token;
use crate::keypad::{ButtonDescriptor, Keypad, Swatch};

/// Maps a keypad swatch to a terminal color
#[must_use]
pub fn swatch_color(swatch: Swatch) -> Color {
    match swatch {
        Swatch::Charcoal => Color::Rgb(60, 60, 60),
        Swatch::Orange => Color::Rgb(255, 149, 0),
        Swatch::BlueGrey => Color::Rgb(207, 216, 220),
        Swatch::White => Color::White,
        Swatch::Black => Color::Black,
    }
}

/// Widget rendering a keypad with focus and last-press highlighting
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
    selected: Option<(usize, usize)>,
    last_pressed: Option<Token>,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a widget for the keypad
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self {
            keypad,
            selected: None,
            last_pressed: None,
        }
    }

    /// Marks the focused button
    #[must_use]
    pub fn selected(mut self, position: (usize, usize)) -> Self {
        self.selected = Some(position);
        self
    }

    /// Marks the most recently pressed token
    #[must_use]
    pub fn last_pressed(mut self, token: Option<Token>) -> Self {
        self.last_pressed = token;
        self
    }

    fn button_style(&self, button: &ButtonDescriptor, focused: bool) -> Style {
        let mut style = Style::default()
            .bg(swatch_color(button.style.background))
            .fg(swatch_color(button.style.foreground));
        if focused {
            style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
        } else if self.last_pressed == Some(button.token) {
            style = style.add_modifier(Modifier::BOLD);
        }
        style
    }

    fn render_button(&self, button: &ButtonDescriptor, focused: bool, area: Rect, buf: &mut Buffer) {
        let style = self.button_style(button, focused);
        let border = if focused {
            BorderType::Thick
        } else {
            BorderType::Rounded
        };
        // Vertically center single-line labels in tall cells
        let pad = area.height.saturating_sub(3) / 2;
        let label = format!("{}{}", "\n".repeat(pad as usize), button.label);
        Paragraph::new(label)
            .alignment(Alignment::Center)
            .style(style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(border)
                    .border_style(style),
            )
            .render(area, buf);
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let row_count = self.keypad.row_count() as u32;
        if row_count == 0 {
            return;
        }
        let row_areas =
            Layout::vertical((0..row_count).map(|_| Constraint::Ratio(1, row_count))).split(area);

        for (r, (row, row_area)) in self.keypad.rows().iter().zip(row_areas.iter()).enumerate() {
            let total_span: u32 = row.iter().map(|b| u32::from(b.span)).sum();
            let cells = Layout::horizontal(
                row.iter()
                    .map(|b| Constraint::Ratio(u32::from(b.span), total_span.max(1))),
            )
            .split(*row_area);

            for (c, (button, cell)) in row.iter().zip(cells.iter()).enumerate() {
                let focused = self.selected == Some((r, c));
                self.render_button(button, focused, *cell, buf);
            }
        }
    }
}
