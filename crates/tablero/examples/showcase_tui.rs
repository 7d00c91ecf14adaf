//! Widget showcase TUI.
//!
//! Tab cycles through the table, calculator, form and upload screens; the
//! calculator keypad also responds to mouse clicks. Set `RUST_LOG=tablero` to
//! see engine events on stderr.
//!
//! Run with: cargo run --example showcase_tui

use std::io;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tablero::tui::{keypad_area, render, AppAction, InputHandler, Keypad, Screen, ShowcaseApp};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = ShowcaseApp::new();
    let input = InputHandler::new();
    let keypad = Keypad::new();

    loop {
        terminal.draw(|f| render(&app, f))?;

        match event::read()? {
            Event::Key(key) => app.apply(input.handle_key(app.screen(), key)),
            Event::Mouse(mouse) => {
                if app.screen() == Screen::Calculator
                    && mouse.kind == MouseEventKind::Down(MouseButton::Left)
                {
                    let size = terminal.size()?;
                    let frame = Rect::new(0, 0, size.width, size.height);
                    if let Some(press) =
                        keypad.hit_test(keypad_area(frame), mouse.column, mouse.row)
                    {
                        app.apply(AppAction::Calc(press));
                    }
                }
            }
            _ => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
