//! Tablero - headless UI widget engines with a terminal showcase
//!
//! Four small state machines, each usable on its own and free of any
//! rendering dependency:
//!
//! - [`pagination`]: page navigation over an item count, with the windowed
//!   page list (first, last, neighbors, ellipses) pagers render
//! - [`calculator`]: a keypad-driven calculator that chains operations
//!   left to right and keeps a bounded tape of results
//! - [`form`]: a dynamic form builder with positional renumbering and
//!   non-empty validation
//! - [`upload`]: policy-checked file selection and human-readable sizes
//!
//! The optional `tui` feature (on by default) adds a ratatui front end that
//! drives all four engines from one terminal app; see the `showcase_tui`
//! example.
//!
//! # Example
//!
//! ```rust
//! use tablero::prelude::*;
//!
//! // Page through 57 rows, five per page
//! let mut pager = Paginator::new(57);
//! assert_eq!(pager.total_pages(), 12);
//! pager.apply(PageAction::Next);
//! assert_eq!(
//!     pager.footer_summary().to_string(),
//!     "Showing 6 to 10 of 57 entries"
//! );
//!
//! // Drive the calculator one keypress at a time
//! let mut calc = Calculator::new();
//! calc.press(CalcInput::Digit(3)).unwrap();
//! calc.press(CalcInput::Operator(Operator::Add)).unwrap();
//! calc.press(CalcInput::Digit(4)).unwrap();
//! calc.press(CalcInput::Equals).unwrap();
//! assert_eq!(calc.display(), "7");
//! assert_eq!(calc.tape().last().unwrap().display(), "3 + 4 = 7");
//! ```

// Allow common test patterns throughout the crate
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod calculator;
pub mod form;
pub mod pagination;
pub mod upload;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::calculator::{
        format_value, CalcError, CalcInput, CalcResult, CalculationRecord, Calculator, Operator,
        Tape,
    };
    pub use crate::form::{FormBuilder, FormError, FormField, FormSubmission};
    pub use crate::pagination::{
        build_page_list, FooterSummary, PageAction, PageEntry, Paginator, DEFAULT_PAGE_SIZE,
    };
    pub use crate::upload::{
        format_size, FileMeta, UploadError, UploadPolicy, UploadReceipt, Uploader,
    };

    #[cfg(feature = "tui")]
    pub use crate::tui::{AppAction, Screen, ShowcaseApp};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let mut pager = Paginator::new(57);
        pager.apply(PageAction::GoTo(12));
        assert_eq!(
            pager.footer_summary().to_string(),
            "Showing 56 to 57 of 57 entries"
        );
    }

    #[test]
    fn test_calculator_direct() {
        let mut calc = Calculator::new();
        calc.press(CalcInput::Digit(6)).unwrap();
        calc.press(CalcInput::Operator(Operator::Multiply)).unwrap();
        calc.press(CalcInput::Digit(7)).unwrap();
        calc.press(CalcInput::Equals).unwrap();
        assert_eq!(calc.display(), "42");
    }

    #[test]
    fn test_page_list_windowing() {
        let entries = build_page_list(6, 12);
        assert_eq!(entries.len(), 7);
        assert_eq!(entries[0], PageEntry::Page(1));
        assert_eq!(entries[6], PageEntry::Page(12));
        assert!(entries.iter().any(PageEntry::is_ellipsis));
    }

    #[test]
    fn test_form_round_trip() {
        let mut form = FormBuilder::new();
        let id = form.fields()[0].id();
        form.set_value(id, "hello").unwrap();
        let submission = form.submit().unwrap();
        assert_eq!(submission.entries[0].1, "hello");
        assert!(form.fields()[0].is_blank());
    }

    #[test]
    fn test_upload_flow() {
        let mut uploader = Uploader::new();
        uploader
            .select(FileMeta::new("cat.gif", 2048, "image/gif"))
            .unwrap();
        let receipt = uploader.upload().unwrap();
        assert_eq!(receipt.file_name, "cat.gif");
        assert_eq!(format_size(receipt.size), "2 KB");
    }

    #[test]
    fn test_errors_are_reportable() {
        let mut calc = Calculator::new();
        calc.press(CalcInput::Digit(5)).unwrap();
        calc.press(CalcInput::Operator(Operator::Divide)).unwrap();
        calc.press(CalcInput::Digit(0)).unwrap();
        assert_eq!(calc.press(CalcInput::Equals), Err(CalcError::DivisionByZero));
        assert_eq!(calc.display(), "5");
        assert!(calc.tape().is_empty());
    }
}
