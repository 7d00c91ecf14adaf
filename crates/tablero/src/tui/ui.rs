//! Rendering for the showcase.
//!
//! One tab row, the active screen's panel, a status bar and a key-hint line.
//! Everything draws from [`ShowcaseApp`] state; nothing here mutates.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row, Table, Tabs, Widget},
    Frame,
};

use super::app::{Screen, ShowcaseApp, StatusKind};
use super::keypad::{Keypad, KeypadWidget};
use crate::pagination::{PageEntry, Paginator};
use crate::upload::format_size;

/// Title on the outer tab bar
pub const APP_TITLE: &str = " Tablero Widget Showcase ";

/// Renders the showcase to the frame
pub fn render(app: &ShowcaseApp, frame: &mut Frame) {
    let area = frame.area();
    let ui = ShowcaseUI::new(app);
    frame.render_widget(ui, area);
}

/// Showcase UI widget
#[derive(Debug)]
pub struct ShowcaseUI<'a> {
    app: &'a ShowcaseApp,
    keypad: Keypad,
}

impl<'a> ShowcaseUI<'a> {
    /// Creates the UI widget for one frame
    #[must_use]
    pub fn new(app: &'a ShowcaseApp) -> Self {
        Self {
            app,
            keypad: Keypad::new(),
        }
    }

    fn render_tabs(&self, area: Rect, buf: &mut Buffer) {
        let titles: Vec<Line> = Screen::ALL.iter().map(|s| Line::from(s.title())).collect();
        Tabs::new(titles)
            .select(self.app.screen().index())
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::default()
                    .title(APP_TITLE)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::White)),
            )
            .render(area, buf);
    }

    // ----- Table screen -----

    fn render_table(&self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(3)])
            .split(area);

        let pager = self.app.pager();
        let rows: Vec<Row> = pager
            .page_slice(self.app.rows())
            .iter()
            .map(|r| {
                Row::new(vec![
                    Cell::from(r.id.to_string()),
                    Cell::from(r.name.as_str()),
                    Cell::from(r.email.as_str()),
                    Cell::from(r.role),
                ])
            })
            .collect();

        let widths = [
            Constraint::Length(5),
            Constraint::Length(12),
            Constraint::Min(24),
            Constraint::Length(8),
        ];
        Table::new(rows, widths)
            .header(
                Row::new(vec!["ID", "Name", "Email", "Role"])
                    .style(Style::default().add_modifier(Modifier::BOLD)),
            )
            .block(
                Block::default()
                    .title(" Staff Directory ")
                    .title_bottom(Line::from(format!(" {} ", pager.footer_summary())))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .render(chunks[0], buf);

        Paragraph::new(pager_line(pager))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(chunks[1], buf);
    }

    // ----- Calculator screen -----

    fn render_calculator(&self, area: Rect, buf: &mut Buffer) {
        let columns = calculator_columns(area);

        let main = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // running expression
                Constraint::Length(3), // display
                Constraint::Min(3),    // key reference
            ])
            .split(columns[0]);

        let calc = self.app.calculator();

        Paragraph::new(calc.expression())
            .style(Style::default().fg(Color::Gray))
            .block(
                Block::default()
                    .title(" Expression ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .render(main[0], buf);

        Paragraph::new(calc.display())
            .alignment(Alignment::Right)
            .style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::default()
                    .title(" Display ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .render(main[1], buf);

        let keys: Vec<ListItem> = CALC_KEYS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{key:>6}"), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();
        List::new(keys)
            .block(
                Block::default()
                    .title(" Keys ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(main[2], buf);

        KeypadWidget::new(&self.keypad).render(columns[1], buf);

        let entries: Vec<ListItem> = calc
            .tape()
            .iter_rev()
            .map(|record| {
                ListItem::new(Span::styled(
                    record.display(),
                    Style::default().fg(Color::Cyan),
                ))
            })
            .collect();
        List::new(entries)
            .block(
                Block::default()
                    .title(" Tape (newest first) ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .render(columns[2], buf);
    }

    // ----- Form screen -----

    fn render_form(&self, area: Rect, buf: &mut Buffer) {
        let form = self.app.form();
        let cursor = self.app.form_cursor();

        let items: Vec<ListItem> = form
            .fields()
            .iter()
            .enumerate()
            .map(|(i, field)| {
                let selected = i == cursor;
                let marker = if selected { "› " } else { "  " };
                let label_style = if selected {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };

                let mut spans = vec![Span::styled(
                    format!("{marker}Field {}: ", i + 1),
                    label_style,
                )];
                if field.is_blank() {
                    spans.push(Span::styled(
                        "(empty)",
                        Style::default()
                            .fg(Color::DarkGray)
                            .add_modifier(Modifier::ITALIC),
                    ));
                } else {
                    spans.push(Span::raw(field.value()));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let readiness = if form.is_valid() {
            Line::from(Span::styled(
                " ready to submit ",
                Style::default().fg(Color::Green),
            ))
        } else {
            Line::from(Span::styled(
                format!(" {} field(s) still empty ", form.empty_field_count()),
                Style::default().fg(Color::Yellow),
            ))
        };

        List::new(items)
            .block(
                Block::default()
                    .title(format!(
                        " Form Builder ({} of {} fields) ",
                        form.field_count(),
                        crate::form::FormBuilder::MAX_FIELDS
                    ))
                    .title_bottom(readiness)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Magenta)),
            )
            .render(area, buf);
    }

    // ----- Upload screen -----

    fn render_upload(&self, area: Rect, buf: &mut Buffer) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(36), Constraint::Min(30)])
            .split(area);

        let selected_name = self.app.uploader().selection().map(|f| f.name.as_str());
        let items: Vec<ListItem> = self
            .app
            .shelf()
            .iter()
            .enumerate()
            .map(|(i, file)| {
                let cursor = if i == self.app.shelf_cursor() {
                    "› "
                } else {
                    "  "
                };
                let picked = if selected_name == Some(file.name.as_str()) {
                    "● "
                } else {
                    "  "
                };
                ListItem::new(Line::from(vec![
                    Span::styled(cursor, Style::default().fg(Color::Yellow)),
                    Span::styled(picked, Style::default().fg(Color::Green)),
                    Span::raw(format!(
                        "{:<20} {:>10}  {}",
                        file.name,
                        format_size(file.size),
                        file.mime
                    )),
                ]))
            })
            .collect();
        List::new(items)
            .block(
                Block::default()
                    .title(" Files ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .render(columns[0], buf);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(6), Constraint::Min(4)])
            .split(columns[1]);

        let selection_lines: Vec<Line> = match self.app.uploader().selection() {
            Some(file) => vec![
                Line::from(vec![
                    Span::styled("Name: ", Style::default().fg(Color::Gray)),
                    Span::raw(file.name.as_str()),
                ]),
                Line::from(vec![
                    Span::styled("Type: ", Style::default().fg(Color::Gray)),
                    Span::raw(file.mime.as_str()),
                ]),
                Line::from(vec![
                    Span::styled("Size: ", Style::default().fg(Color::Gray)),
                    Span::raw(format_size(file.size)),
                ]),
            ],
            None => vec![Line::from(Span::styled(
                "(nothing selected)",
                Style::default().fg(Color::DarkGray),
            ))],
        };
        Paragraph::new(selection_lines)
            .block(
                Block::default()
                    .title(" Selection ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Green)),
            )
            .render(right[0], buf);

        let policy = self.app.uploader().policy();
        let policy_lines = vec![
            Line::from(format!("Max size: {}", format_size(policy.max_bytes))),
            Line::from(format!("Types: {}", policy.allowed_types.join(", "))),
            Line::from(format!("Accepts: {}", policy.accept_list())),
        ];
        Paragraph::new(policy_lines)
            .style(Style::default().fg(Color::Gray))
            .block(
                Block::default()
                    .title(" Policy ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(right[1], buf);
    }

    // ----- Status and hints -----

    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let status = self.app.status();
        let style = match status.kind {
            StatusKind::Info => Style::default().fg(Color::White),
            StatusKind::Success => Style::default().fg(Color::Green),
            StatusKind::Warning => Style::default().fg(Color::Yellow),
            StatusKind::Error => Style::default().fg(Color::Red),
        };
        Paragraph::new(Span::styled(status.text.as_str(), style))
            .block(
                Block::default()
                    .title(" Status ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }

    fn render_hints(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(key_hints(self.app.screen()))
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

impl Widget for ShowcaseUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = screen_chunks(area);
        if chunks.len() < 4 {
            return;
        }

        self.render_tabs(chunks[0], buf);
        match self.app.screen() {
            Screen::Table => self.render_table(chunks[1], buf),
            Screen::Calculator => self.render_calculator(chunks[1], buf),
            Screen::Form => self.render_form(chunks[1], buf),
            Screen::Upload => self.render_upload(chunks[1], buf),
        }
        self.render_status(chunks[2], buf);
        self.render_hints(chunks[3], buf);
    }
}

fn screen_chunks(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // tabs
            Constraint::Min(10),   // active screen
            Constraint::Length(3), // status
            Constraint::Length(1), // key hints
        ])
        .split(area)
        .to_vec()
}

fn calculator_columns(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(28),    // expression + display + keys
            Constraint::Length(22), // keypad
            Constraint::Length(30), // tape
        ])
        .split(area)
        .to_vec()
}

/// Where the keypad lands inside a frame of the given size, for translating
/// mouse clicks on the calculator screen
#[must_use]
pub fn keypad_area(frame: Rect) -> Rect {
    calculator_columns(screen_chunks(frame)[1])[1]
}

/// Builds the prev / page numbers / next strip under the table
fn pager_line(pager: &Paginator) -> Line<'static> {
    let mut spans = Vec::new();

    let prev_style = if pager.prev_enabled() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    spans.push(Span::styled("‹ Prev ", prev_style));

    for entry in pager.page_list() {
        match entry {
            PageEntry::Page(p) if p == pager.current_page() => {
                spans.push(Span::styled(
                    format!(" {p} "),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ));
            }
            PageEntry::Page(p) => {
                spans.push(Span::styled(
                    format!(" {p} "),
                    Style::default().fg(Color::White),
                ));
            }
            PageEntry::Ellipsis => {
                spans.push(Span::styled(" … ", Style::default().fg(Color::DarkGray)));
            }
        }
    }

    let next_style = if pager.next_enabled() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    spans.push(Span::styled(" Next ›", next_style));

    Line::from(spans)
}

/// One-line key reference for the hint bar
#[must_use]
pub const fn key_hints(screen: Screen) -> &'static str {
    match screen {
        Screen::Table => "←/→ page  Home/End first/last  s page size  Tab screen  q quit",
        Screen::Calculator => "0-9 . digits  + - * / ops  Enter =  Bksp ⌫  c clear  Del reset  q quit",
        Screen::Form => "type to edit  ↑/↓ field  Ins add  Del remove  Enter submit  Ctrl+R reset  Esc quit",
        Screen::Upload => "↑/↓ choose  Enter select  u upload  c clear selection  q quit",
    }
}

/// Key reference shown on the calculator screen
const CALC_KEYS: &[(&str, &str)] = &[
    ("0-9", "digits"),
    (".", "decimal point"),
    ("+-*/", "operators"),
    ("Enter", "equals"),
    ("Bksp", "delete digit"),
    ("c", "clear entry"),
    ("Del", "reset all"),
];
