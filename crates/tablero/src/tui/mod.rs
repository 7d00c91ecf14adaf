//! Terminal front end for the widget engines.
//!
//! Four screens (table, calculator, form, upload), one engine each; Tab
//! cycles between them. See the `showcase_tui` example for the event loop.

mod app;
mod input;
mod keypad;
mod ui;

pub use app::{
    demo_rows, sample_files, Screen, ShowcaseApp, StaffRow, StatusKind, StatusLine, DEMO_ROW_COUNT,
};
pub use input::{AppAction, InputHandler};
pub use keypad::{Keypad, KeypadButton, KeypadWidget};
pub use ui::{key_hints, keypad_area, render, ShowcaseUI, APP_TITLE};
