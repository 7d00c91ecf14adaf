//! Keyboard handling.
//!
//! Key events become [`AppAction`]s; which mapping applies depends on the
//! active [`Screen`]. On the form screen plain characters are text, so `q`
//! types rather than quits there; Esc and Ctrl+C always quit.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::Screen;
use crate::calculator::{CalcInput, Operator};

/// Actions the showcase responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Quit the application
    Quit,
    /// Switch to the next screen
    NextScreen,
    /// Switch to the previous screen
    PrevScreen,

    /// Table: go to the next page
    NextPage,
    /// Table: go to the previous page
    PrevPage,
    /// Table: jump to the first page
    FirstPage,
    /// Table: jump to the last page
    LastPage,
    /// Table: cycle the page size (5, 10, 20)
    CyclePageSize,

    /// Calculator: one keypad press
    Calc(CalcInput),

    /// Form: move the cursor up one field
    FormCursorUp,
    /// Form: move the cursor down one field
    FormCursorDown,
    /// Form: type a character into the current field
    FormInsert(char),
    /// Form: delete the last character of the current field
    FormBackspace,
    /// Form: append a new field
    FormAddField,
    /// Form: remove the current field
    FormRemoveField,
    /// Form: validate and submit
    FormSubmit,
    /// Form: back to a single empty field
    FormReset,

    /// Upload: move the shelf cursor up
    ShelfUp,
    /// Upload: move the shelf cursor down
    ShelfDown,
    /// Upload: validate and select the file under the cursor
    PickFile,
    /// Upload: upload the current selection
    Upload,
    /// Upload: drop the current selection
    ClearSelection,

    /// No action (ignored input)
    None,
}

/// Maps key events to actions for the active screen
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
    pub fn handle_key(&self, screen: Screen, event: KeyEvent) -> AppAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c') => AppAction::Quit,
                KeyCode::Char('r') if screen == Screen::Form => AppAction::FormReset,
                _ => AppAction::None,
            };
        }

        // Screen-independent keys
        match code {
            KeyCode::Tab => return AppAction::NextScreen,
            KeyCode::BackTab => return AppAction::PrevScreen,
            KeyCode::Esc => return AppAction::Quit,
            _ => {}
        }

        match screen {
            Screen::Table => Self::table_key(code),
            Screen::Calculator => Self::calculator_key(code),
            Screen::Form => Self::form_key(code),
            Screen::Upload => Self::upload_key(code),
        }
    }

    fn table_key(code: KeyCode) -> AppAction {
        match code {
            KeyCode::Char('q') => AppAction::Quit,
            KeyCode::Left => AppAction::PrevPage,
            KeyCode::Right => AppAction::NextPage,
            KeyCode::Home => AppAction::FirstPage,
            KeyCode::End => AppAction::LastPage,
            KeyCode::Char('s') => AppAction::CyclePageSize,
            _ => AppAction::None,
        }
    }

    fn calculator_key(code: KeyCode) -> AppAction {
        match code {
            KeyCode::Char('q') => AppAction::Quit,
            KeyCode::Char(c @ '0'..='9') => AppAction::Calc(CalcInput::Digit(c as u8 - b'0')),
            KeyCode::Char('.') => AppAction::Calc(CalcInput::Decimal),
            KeyCode::Char('+') => AppAction::Calc(CalcInput::Operator(Operator::Add)),
            KeyCode::Char('-') => AppAction::Calc(CalcInput::Operator(Operator::Subtract)),
            KeyCode::Char('*') => AppAction::Calc(CalcInput::Operator(Operator::Multiply)),
            KeyCode::Char('/') => AppAction::Calc(CalcInput::Operator(Operator::Divide)),
            KeyCode::Char('=') | KeyCode::Enter => AppAction::Calc(CalcInput::Equals),
            KeyCode::Char('c') => AppAction::Calc(CalcInput::Clear),
            KeyCode::Backspace => AppAction::Calc(CalcInput::Backspace),
            KeyCode::Delete => AppAction::Calc(CalcInput::Reset),
            _ => AppAction::None,
        }
    }

    fn form_key(code: KeyCode) -> AppAction {
        match code {
            KeyCode::Up => AppAction::FormCursorUp,
            KeyCode::Down => AppAction::FormCursorDown,
            KeyCode::Enter => AppAction::FormSubmit,
            KeyCode::Backspace => AppAction::FormBackspace,
            KeyCode::Insert => AppAction::FormAddField,
            KeyCode::Delete => AppAction::FormRemoveField,
            KeyCode::Char(c) => AppAction::FormInsert(c),
            _ => AppAction::None,
        }
    }

    fn upload_key(code: KeyCode) -> AppAction {
        match code {
            KeyCode::Char('q') => AppAction::Quit,
            KeyCode::Up => AppAction::ShelfUp,
            KeyCode::Down => AppAction::ShelfDown,
            KeyCode::Enter => AppAction::PickFile,
            KeyCode::Char('u') => AppAction::Upload,
            KeyCode::Char('c') => AppAction::ClearSelection,
            _ => AppAction::None,
        }
    }
}
