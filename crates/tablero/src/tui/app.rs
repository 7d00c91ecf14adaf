//! Showcase application state.
//!
//! One struct owns all four widget engines; the active [`Screen`] decides
//! which one the keyboard drives. Everything here is renderer-free so the
//! whole app can be tested without a terminal.

use crate::calculator::{CalcInput, Calculator};
use crate::form::{FormBuilder, FormField};
use crate::pagination::{PageAction, Paginator};
use crate::upload::{format_size, FileMeta, Uploader};

use super::input::AppAction;

/// Number of rows in the demo staff table
pub const DEMO_ROW_COUNT: usize = 57;

/// The screens the showcase cycles through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Paginated staff table
    Table,
    /// Keypad calculator
    Calculator,
    /// Dynamic form builder
    Form,
    /// Upload previewer
    Upload,
}

impl Screen {
    /// All screens in tab order
    pub const ALL: [Self; 4] = [Self::Table, Self::Calculator, Self::Form, Self::Upload];

    /// Tab title
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Table => "Table",
            Self::Calculator => "Calculator",
            Self::Form => "Form",
            Self::Upload => "Upload",
        }
    }

    /// Position in [`Self::ALL`]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Table => 0,
            Self::Calculator => 1,
            Self::Form => 2,
            Self::Upload => 3,
        }
    }

    /// The screen to the right, wrapping
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Table => Self::Calculator,
            Self::Calculator => Self::Form,
            Self::Form => Self::Upload,
            Self::Upload => Self::Table,
        }
    }

    /// The screen to the left, wrapping
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Table => Self::Upload,
            Self::Calculator => Self::Table,
            Self::Form => Self::Calculator,
            Self::Upload => Self::Form,
        }
    }
}

/// Severity of the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Neutral feedback
    Info,
    /// Something worked
    Success,
    /// Rejected input, recoverable
    Warning,
    /// An operation failed
    Error,
}

/// The one-line feedback bar; each user event overwrites it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    /// Severity, drives the color
    pub kind: StatusKind,
    /// Message text
    pub text: String,
}

impl StatusLine {
    /// Neutral status
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    /// Success status
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    /// Warning status
    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Warning,
            text: text.into(),
        }
    }

    /// Error status
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

/// One row of the demo staff table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffRow {
    /// Row id, 1-based
    pub id: usize,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Role label
    pub role: &'static str,
}

/// Generates the demo staff table
#[must_use]
pub fn demo_rows() -> Vec<StaffRow> {
    (1..=DEMO_ROW_COUNT)
        .map(|id| StaffRow {
            id,
            name: format!("User {id}"),
            email: format!("user{id}@example.com"),
            role: if id % 3 == 0 {
                "Admin"
            } else if id % 2 == 0 {
                "Editor"
            } else {
                "Viewer"
            },
        })
        .collect()
}

/// Candidate files offered on the upload screen, mixing ones the default
/// policy accepts with ones it rejects
#[must_use]
pub fn sample_files() -> Vec<FileMeta> {
    vec![
        FileMeta::new("portrait.jpg", 2_621_440, "image/jpeg"),
        FileMeta::new("diagram.png", 524_288, "image/png"),
        FileMeta::new("animation.gif", 5_033_165, "image/gif"),
        FileMeta::new("banner.webp", 307_200, "image/webp"),
        FileMeta::new("holiday_album.jpg", 8_388_608, "image/jpeg"),
        FileMeta::new("sources.zip", 1_048_576, "application/zip"),
    ]
}

/// Showcase application state
#[derive(Debug, Clone, PartialEq)]
pub struct ShowcaseApp {
    screen: Screen,
    rows: Vec<StaffRow>,
    pager: Paginator,
    calc: Calculator,
    form: FormBuilder,
    form_cursor: usize,
    uploader: Uploader,
    shelf: Vec<FileMeta>,
    shelf_cursor: usize,
    status: StatusLine,
    should_quit: bool,
}

impl Default for ShowcaseApp {
    fn default() -> Self {
        Self::new()
    }
}

impl ShowcaseApp {
    /// Creates the showcase with demo data loaded
    #[must_use]
    pub fn new() -> Self {
        let rows = demo_rows();
        let pager = Paginator::new(rows.len());
        Self {
            screen: Screen::Table,
            rows,
            pager,
            calc: Calculator::new(),
            form: FormBuilder::new(),
            form_cursor: 0,
            uploader: Uploader::new(),
            shelf: sample_files(),
            shelf_cursor: 0,
            status: StatusLine::info("Tab switches screens, q quits"),
            should_quit: false,
        }
    }

    /// The active screen
    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// The staff table rows
    #[must_use]
    pub fn rows(&self) -> &[StaffRow] {
        &self.rows
    }

    /// The table's paginator
    #[must_use]
    pub fn pager(&self) -> &Paginator {
        &self.pager
    }

    /// The calculator engine
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calc
    }

    /// The form builder
    #[must_use]
    pub fn form(&self) -> &FormBuilder {
        &self.form
    }

    /// Index of the form field the cursor is on
    #[must_use]
    pub fn form_cursor(&self) -> usize {
        self.form_cursor
    }

    /// The uploader
    #[must_use]
    pub fn uploader(&self) -> &Uploader {
        &self.uploader
    }

    /// Candidate files on the upload screen
    #[must_use]
    pub fn shelf(&self) -> &[FileMeta] {
        &self.shelf
    }

    /// Index of the shelf entry the cursor is on
    #[must_use]
    pub fn shelf_cursor(&self) -> usize {
        self.shelf_cursor
    }

    /// Current status line
    #[must_use]
    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    /// Whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Applies one user action to whichever engine it addresses
    pub fn apply(&mut self, action: AppAction) {
        match action {
            AppAction::Quit => self.quit(),
            AppAction::NextScreen => self.screen = self.screen.next(),
            AppAction::PrevScreen => self.screen = self.screen.prev(),

            AppAction::NextPage => self.page(PageAction::Next),
            AppAction::PrevPage => self.page(PageAction::Prev),
            AppAction::FirstPage => self.page(PageAction::GoTo(1)),
            AppAction::LastPage => self.page(PageAction::GoTo(self.pager.total_pages())),
            AppAction::CyclePageSize => self.cycle_page_size(),

            AppAction::Calc(input) => self.press_key(input),

            AppAction::FormCursorUp => {
                self.form_cursor = self.form_cursor.saturating_sub(1);
            }
            AppAction::FormCursorDown => {
                self.form_cursor = (self.form_cursor + 1).min(self.form.field_count() - 1);
            }
            AppAction::FormInsert(c) => self.form_insert(c),
            AppAction::FormBackspace => self.form_backspace(),
            AppAction::FormAddField => self.form_add_field(),
            AppAction::FormRemoveField => self.form_remove_field(),
            AppAction::FormSubmit => self.form_submit(),
            AppAction::FormReset => {
                self.form.reset();
                self.form_cursor = 0;
                self.status = StatusLine::info("form reset");
            }

            AppAction::ShelfUp => {
                self.shelf_cursor = self.shelf_cursor.saturating_sub(1);
            }
            AppAction::ShelfDown => {
                if !self.shelf.is_empty() {
                    self.shelf_cursor = (self.shelf_cursor + 1).min(self.shelf.len() - 1);
                }
            }
            AppAction::PickFile => self.pick_file(),
            AppAction::Upload => self.upload(),
            AppAction::ClearSelection => {
                self.uploader.clear();
                self.status = StatusLine::info("selection cleared");
            }

            AppAction::None => {}
        }
    }

    fn page(&mut self, action: PageAction) {
        self.pager.apply(action);
        self.status = StatusLine::info(format!(
            "Page {} of {}",
            self.pager.current_page(),
            self.pager.total_pages()
        ));
    }

    fn cycle_page_size(&mut self) {
        let next = match self.pager.page_size() {
            5 => 10,
            10 => 20,
            _ => 5,
        };
        self.pager.apply(PageAction::SetPageSize(next));
        self.status = StatusLine::info(format!("Page size {next}"));
    }

    fn press_key(&mut self, input: CalcInput) {
        let is_equals = matches!(input, CalcInput::Equals);
        match self.calc.press(input) {
            Ok(()) if is_equals => {
                self.status = StatusLine::success(format!("= {}", self.calc.display()));
            }
            Ok(()) => {}
            Err(e) => self.status = StatusLine::error(e.to_string()),
        }
    }

    fn form_field_id(&self) -> Option<u64> {
        self.form.fields().get(self.form_cursor).map(FormField::id)
    }

    fn form_insert(&mut self, c: char) {
        if let Some(id) = self.form_field_id() {
            if let Err(e) = self.form.push_char(id, c) {
                self.status = StatusLine::warning(e.to_string());
            }
        }
    }

    fn form_backspace(&mut self) {
        if let Some(id) = self.form_field_id() {
            if let Err(e) = self.form.pop_char(id) {
                self.status = StatusLine::warning(e.to_string());
            }
        }
    }

    fn form_add_field(&mut self) {
        match self.form.add_field() {
            Ok(_) => {
                // jump to the new field
                self.form_cursor = self.form.field_count() - 1;
                self.status =
                    StatusLine::success(format!("field added ({} total)", self.form.field_count()));
            }
            Err(e) => self.status = StatusLine::warning(e.to_string()),
        }
    }

    fn form_remove_field(&mut self) {
        let Some(id) = self.form_field_id() else {
            return;
        };
        match self.form.remove_field(id) {
            Ok(()) => {
                self.form_cursor = self.form_cursor.min(self.form.field_count() - 1);
                self.status = StatusLine::success(format!(
                    "field removed ({} total)",
                    self.form.field_count()
                ));
            }
            Err(e) => self.status = StatusLine::warning(e.to_string()),
        }
    }

    fn form_submit(&mut self) {
        match self.form.submit() {
            Ok(submission) => {
                self.status = StatusLine::success(format!(
                    "submitted {} field(s)",
                    submission.entries.len()
                ));
            }
            Err(e) => self.status = StatusLine::warning(e.to_string()),
        }
    }

    fn pick_file(&mut self) {
        let Some(meta) = self.shelf.get(self.shelf_cursor).cloned() else {
            return;
        };
        match self.uploader.select(meta) {
            Ok(accepted) => {
                self.status = StatusLine::success(format!(
                    "selected {} ({})",
                    accepted.name,
                    format_size(accepted.size)
                ));
            }
            Err(e) => self.status = StatusLine::error(e.to_string()),
        }
    }

    fn upload(&mut self) {
        match self.uploader.upload() {
            Ok(receipt) => {
                self.status = StatusLine::success(format!("uploaded {}", receipt.file_name));
            }
            Err(e) => self.status = StatusLine::warning(e.to_string()),
        }
    }
}
