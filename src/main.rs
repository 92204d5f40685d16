//! triptych - a three-pane terminal directory browser
//!
//! Left pane: the parent directory's listing. Center pane: the current
//! directory with the cursor. Right pane: a preview of the selected
//! subdirectory. Read-only; never touches the filesystem beyond
//! directory listings.

use std::io::{self, stdout};
use std::panic;
use std::process::ExitCode;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    tty::IsTty,
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
};

mod config;
mod errors;
mod fs;
mod input;
mod state;
mod ui;

use config::Options;
use fs::DotFilter;
use input::Keymap;
use state::{App, State};
use ui::{ErrorScreen, LevelPane, Theme};

/// Set up panic hook to restore terminal on panic
fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

/// Initialize the terminal for TUI mode
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

/// Restore terminal to normal mode
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Draw one frame: the three panes, or the fatal error screen.
fn draw(frame: &mut Frame, app: &App, theme: &Theme) {
    let size = frame.area();

    match &app.state {
        State::Fatal(err) => {
            frame.render_widget(ErrorScreen::new(err, theme), size);
        }
        State::Browsing(window) => {
            // Side panes get a third of the width each, the center pane
            // takes the remainder.
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Ratio(1, 3),
                    Constraint::Fill(1),
                    Constraint::Ratio(1, 3),
                ])
                .split(size);

            frame.render_widget(LevelPane::new(window.parent.as_ref(), theme), chunks[0]);
            frame.render_widget(
                LevelPane::new(Some(&window.current), theme).with_cursor(window.selected),
                chunks[1],
            );
            frame.render_widget(LevelPane::new(window.child.as_ref(), theme), chunks[2]);
        }
    }
}

/// Main event loop: draw, poll, dispatch one action per key event.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    keymap: &Keymap,
    theme: &Theme,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| draw(frame, app, theme))?;

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            input::handle_key(app, keymap, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let options = match Options::from_env() {
        Ok(options) => options,
        Err(err) => {
            eprintln!("tri: {err}");
            eprintln!("usage: tri [-a|--all] [DIR]");
            return ExitCode::from(2);
        }
    };

    let filter = Box::new(DotFilter {
        include_hidden: options.show_hidden,
    });
    let mut app = App::new(&options.start_path, filter);

    // In non-interactive contexts a startup failure goes straight to
    // stderr instead of waiting for a key on the error screen.
    if app.is_fatal() && !io::stdin().is_tty() {
        if let State::Fatal(err) = &app.state {
            eprintln!("tri: {err}");
        }
        return ExitCode::FAILURE;
    }

    setup_panic_hook();
    let mut terminal = match setup_terminal() {
        Ok(terminal) => terminal,
        Err(err) => {
            eprintln!("tri: {err}");
            return ExitCode::FAILURE;
        }
    };

    let keymap = Keymap::default();
    let theme = Theme::default();
    let result = run(&mut terminal, &mut app, &keymap, &theme);
    let restored = restore_terminal();

    if let Err(err) = result.and(restored) {
        eprintln!("tri: {err}");
        return ExitCode::FAILURE;
    }

    // A fatal navigation error still exits non-zero after the error
    // screen was acknowledged.
    if let State::Fatal(err) = &app.state {
        eprintln!("tri: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
