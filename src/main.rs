//! Formdesk - Form and Record Widgets
//!
//! A vim-style TUI with a registration form, a student record table and
//! a contact list, each persisted to a local SQLite store.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info};

mod app;
mod input;
mod records;
mod storage;
mod tracing_setup;
mod ui;
mod widgets;

use app::{App, AppConfig};
use tracing_setup::{init_tracing, TracingConfig};

#[derive(Parser, Debug)]
#[command(name = "formdesk", version, about = "Registration, student and contact forms in the terminal")]
struct Cli {
    /// SQLite store file
    #[arg(long, value_name = "PATH")]
    store: Option<PathBuf>,

    /// Log file (the terminal is used by the UI)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

impl Cli {
    fn into_config(self) -> AppConfig {
        let mut config = AppConfig::default();
        if let Some(path) = self.store {
            config.store_path = path;
        }
        if let Some(path) = self.log_file {
            config.log_path = path;
        }
        config.debug = self.debug;
        config
    }
}

fn main() -> Result<()> {
    let config = Cli::parse().into_config();

    init_tracing(&TracingConfig {
        log_path: config.log_path.clone(),
        debug: config.debug,
    })?;

    let mut app = App::open(config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!("formdesk started");
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(ref err) = result {
        error!(error = %err, "formdesk exited with an error");
    } else {
        info!("formdesk stopped");
    }
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            app.render(frame);
        })?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if app.handle_key(key)? {
                    break;
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
