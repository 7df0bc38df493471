//! TUI rendering

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;
use crate::core::Variant;

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    /// Splits the inner area into calculator and optional help sidebar
    fn create_horizontal_layout(&self, area: Rect) -> Vec<Rect> {
        let constraints = if self.app.show_help() {
            vec![Constraint::Min(30), Constraint::Length(24)]
        } else {
            vec![Constraint::Min(30)]
        };
        Layout::horizontal(constraints).margin(1).split(area).to_vec()
    }

    /// Display, status line, keypad
    fn create_layout(&self, area: Rect) -> Vec<Rect> {
        Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(5),
        ])
        .split(area)
        .to_vec()
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let state = self.app.state();
        let style = if state.is_error() {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        };

        Paragraph::new(Span::styled(self.app.display(), style))
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }

    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(
            self.app.status_line(),
            Style::default().fg(Color::Gray),
        ))
        .alignment(Alignment::Right)
        .render(area, buf);
    }

    fn render_keypad(&self, area: Rect, buf: &mut Buffer) {
        KeypadWidget::new(self.app.keypad())
            .selected(self.app.selected())
            .last_pressed(self.app.last_pressed())
            .render(area, buf);
    }

    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        let mut shortcuts = HELP_SHORTCUTS.to_vec();
        if self.app.variant() == Variant::Scientific {
            shortcuts.extend_from_slice(HELP_SCIENTIFIC);
        }

        let items: Vec<ListItem> = shortcuts
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{key:>7}"), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        List::new(items)
            .block(
                Block::default()
                    .title(" Keys ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = match self.app.variant() {
            Variant::Basic => BASIC_TITLE,
            Variant::Scientific => SCIENTIFIC_TITLE,
        };
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let h_chunks = self.create_horizontal_layout(area);
        let Some(main_area) = h_chunks.first() else {
            return;
        };

        let chunks = self.create_layout(*main_area);
        if chunks.len() >= 3 {
            self.render_display(chunks[0], buf);
            self.render_status(chunks[1], buf);
            self.render_keypad(chunks[2], buf);
        }

        if let Some(help_area) = h_chunks.get(1) {
            self.render_help(*help_area, buf);
        }
    }
}

/// Window title, basic variant
pub const BASIC_TITLE: &str = " Simple Calculator ";

/// Window title, scientific variant
pub const SCIENTIFIC_TITLE: &str = " Scientific Calculator ";

/// Key bindings shown in the sidebar
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("0-9 .", "Digits"),
    ("+-*/", "Operators"),
    ("Enter", "Equals"),
    ("Esc/a", "All clear"),
    ("n", "Sign flip"),
    ("%", "Percent"),
    ("Arrows", "Move focus"),
    ("Space", "Press focus"),
    ("?", "Toggle help"),
    ("q", "Quit"),
];

/// Extra bindings for the scientific keypad
pub const HELP_SCIENTIFIC: &[(&str, &str)] = &[
    ("^", "x^y"),
    ("s c t", "sin cos tan"),
    ("l g", "ln log10"),
    ("r", "sqrt"),
];
