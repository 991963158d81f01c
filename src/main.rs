//! ABRACS TUI - membership applications from the terminal
//!
//! A Ratatui-based TUI for the two ABRACS application forms (síndicos and
//! companies). Submissions are relayed to the association by e-mail.

mod app;
mod clock;
mod config;
mod format;
mod platform;
mod relay;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::AppConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, OpenOptions};
use std::future::Future;
use std::io;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load()?;
    init_tracing(&config);

    if !AppConfig::exists() {
        if let Err(err) = AppConfig::template().save() {
            tracing::warn!(error = %err, "Could not write config template");
        }
    }

    let mut app = App::new(&config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Log to a file in the data dir; without one, stay silent so the TUI is not corrupted
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_filter()))
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER));

    let file = AppConfig::log_path().and_then(|path| {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).ok()?;
        }
        OpenOptions::new().create(true).append(true).open(path).ok()
    });

    match file {
        Some(file) => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init(),
        None => tracing_subscriber::registry().with(filter).init(),
    }
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        // A queued submission is sent after the frame showing "Enviando...";
        // Ctrl+C still quits while it is in flight
        if app.has_pending_submission() {
            if !unless_quit(app.process_pending_submission(), quit_pressed()).await? {
                return Ok(());
            }
            continue;
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                if is_quit_key(&key) {
                    return Ok(());
                }

                app.handle_key(key).await?;
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

/// Global quit: Ctrl+C
fn is_quit_key(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Resolve once Ctrl+C is pressed; any other input is dropped
async fn quit_pressed() -> Result<()> {
    loop {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && is_quit_key(&key) {
                    return Ok(());
                }
            }
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
}

/// Drive `work` unless `quit` resolves first. Returns whether `work` finished.
async fn unless_quit<W, Q>(work: W, quit: Q) -> Result<bool>
where
    W: Future<Output = ()>,
    Q: Future<Output = Result<()>>,
{
    tokio::select! {
        () = work => Ok(true),
        quit = quit => quit.map(|()| false),
    }
}
