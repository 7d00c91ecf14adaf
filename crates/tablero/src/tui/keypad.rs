//! Clickable calculator keypad.
//!
//! A fixed 5x4 grid in which every button carries the [`CalcInput`] it
//! produces, so mouse hits and rendering share one layout:
//!
//! ```text
//! [7] [8] [9] [/]
//! [4] [5] [6] [*]
//! [1] [2] [3] [-]
//! [0] [.] [=] [+]
//! [C] [R] [⌫]
//! ```
//!
//! `C` clears the entry, `R` resets everything including the tape.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::calculator::{CalcInput, Operator};

/// A single keypad button at a fixed grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    /// Text on the button
    pub label: &'static str,
    /// Keypad press this button produces
    pub input: CalcInput,
    /// Grid row, 0-based from the top
    pub row: u16,
    /// Grid column, 0-based from the left
    pub col: u16,
}

const fn button(label: &'static str, input: CalcInput, row: u16, col: u16) -> KeypadButton {
    KeypadButton {
        label,
        input,
        row,
        col,
    }
}

/// The keypad layout
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    rows: u16,
    cols: u16,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard calculator keypad
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            button("7", CalcInput::Digit(7), 0, 0),
            button("8", CalcInput::Digit(8), 0, 1),
            button("9", CalcInput::Digit(9), 0, 2),
            button("/", CalcInput::Operator(Operator::Divide), 0, 3),
            button("4", CalcInput::Digit(4), 1, 0),
            button("5", CalcInput::Digit(5), 1, 1),
            button("6", CalcInput::Digit(6), 1, 2),
            button("*", CalcInput::Operator(Operator::Multiply), 1, 3),
            button("1", CalcInput::Digit(1), 2, 0),
            button("2", CalcInput::Digit(2), 2, 1),
            button("3", CalcInput::Digit(3), 2, 2),
            button("-", CalcInput::Operator(Operator::Subtract), 2, 3),
            button("0", CalcInput::Digit(0), 3, 0),
            button(".", CalcInput::Decimal, 3, 1),
            button("=", CalcInput::Equals, 3, 2),
            button("+", CalcInput::Operator(Operator::Add), 3, 3),
            button("C", CalcInput::Clear, 4, 0),
            button("R", CalcInput::Reset, 4, 1),
            button("⌫", CalcInput::Backspace, 4, 2),
        ];

        Self {
            buttons,
            rows: 5,
            cols: 4,
        }
    }

    /// Number of buttons on the keypad
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Grid dimensions as (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (u16, u16) {
        (self.rows, self.cols)
    }

    /// The button at a grid cell; the bottom-right cell is empty
    #[must_use]
    pub fn button_at(&self, row: u16, col: u16) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.row == row && b.col == col)
    }

    /// The button that produces the given input
    #[must_use]
    pub fn button_for(&self, input: CalcInput) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.input == input)
    }

    /// Iterates over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Converts a click inside the rendered keypad to the press it lands on;
    /// the border and the empty cell swallow clicks
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<CalcInput> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // Account for border (1 char on each side)
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let inner_x = rel_x - 1;
        let inner_y = rel_y - 1;

        let btn_width = (area.width - 2) / self.cols;
        let btn_height = (area.height - 2) / self.rows;

        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = inner_x / btn_width;
        let row = inner_y / btn_height;

        self.button_at(row, col).map(|b| b.input)
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        if inner.width < self.keypad.cols || inner.height < self.keypad.rows {
            return; // Too small to render
        }

        let btn_width = inner.width / self.keypad.cols;
        let btn_height = inner.height / self.keypad.rows;

        for btn in self.keypad.buttons() {
            let cell_x = inner.x + btn.col * btn_width;
            let cell_y = inner.y + btn.row * btn_height;

            let label = format!("[{}]", btn.label);
            let label_width = label.chars().count() as u16;
            let label_x = cell_x + btn_width.saturating_sub(label_width) / 2;
            let label_y = cell_y + btn_height / 2;

            if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                buf.set_span(
                    label_x,
                    label_y,
                    &Span::styled(label, style_for(btn.input)),
                    btn_width,
                );
            }
        }
    }
}

fn style_for(input: CalcInput) -> Style {
    match input {
        CalcInput::Digit(_) => Style::default().fg(Color::White),
        CalcInput::Operator(_) => Style::default().fg(Color::Yellow),
        CalcInput::Equals => Style::default().fg(Color::Green),
        CalcInput::Clear | CalcInput::Reset => Style::default().fg(Color::Red),
        CalcInput::Decimal | CalcInput::Backspace => Style::default().fg(Color::Cyan),
    }
}
