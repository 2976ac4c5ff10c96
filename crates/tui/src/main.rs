//! Zayavki TUI - terminal interface for provisioning S3 tenants.
//!
//! Responsibilities:
//! - Orchestrate application startup and shutdown.
//! - Initialize terminal, logging, and async runtime.
//! - Run the main event loop.
//!
//! Does NOT handle:
//! - Wire formats of the backend (see `crates/client`).
//! - Configuration parsing (see `crates/config`).
//! - Async backend calls (see `runtime::side_effects`).
//!
//! Invariants:
//! - The TUI enters raw mode and alternate screen on startup.
//! - `load_dotenv()` is called at startup to support `.env` configuration.
//! - Configuration precedence: CLI args > env vars > `.env` > defaults.
//! - Mouse capture is enabled by default unless `--no-mouse` is specified.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures_util::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc::{channel, error::TrySendError};
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use zayavki_client::{ChannelClusterChooser, ClusterChoiceRequest};
use zayavki_config::constants::{DEFAULT_CHANNEL_CAPACITY, DEFAULT_UI_TICK_MS};

use zayavki_tui::action::{Action, RedactedAction};
use zayavki_tui::app::{App, ConnectionContext};
use zayavki_tui::cli::Cli;
use zayavki_tui::runtime::{
    client::create_client,
    config::load_config,
    side_effects::{SideEffectContext, TaskTracker, handle_side_effects},
    terminal::TerminalGuard,
};

/// At most one submission waits for a cluster choice at a time.
const CHOICE_CHANNEL_CAPACITY: usize = 4;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let no_mouse = cli.no_mouse;

    std::fs::create_dir_all(&cli.log_dir)?;
    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, "zayavki-tui.log");
    let (non_blocking, _guard) = non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(non_blocking))
        .init();
    // _guard must live for the whole of main() so logs are flushed

    let config = load_config(&cli)?;
    let client = Arc::new(create_client(&config)?);
    tracing::info!(base_url = %config.connection.base_url, "client ready");

    let connection_ctx = ConnectionContext {
        base_url: config.connection.base_url.clone(),
        export_dir: config.export_dir.clone(),
    };

    let task_tracker = TaskTracker::new();

    let mut terminal_guard = TerminalGuard::enter(!no_mouse)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;

    let (tx, mut rx) = channel::<Action>(DEFAULT_CHANNEL_CAPACITY);
    let (choice_tx, mut choice_rx) = channel::<ClusterChoiceRequest>(CHOICE_CHANNEL_CAPACITY);
    let context = SideEffectContext::new(client, ChannelClusterChooser::new(choice_tx), tx.clone());

    // Input stream; keys and resizes are never dropped, mouse events may be.
    let tx_input = tx.clone();
    let input_task = tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            let action = match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => Action::Input(key),
                Event::Mouse(mouse) => {
                    match tx_input.try_send(Action::Mouse(mouse)) {
                        Ok(()) => {}
                        Err(TrySendError::Full(_)) => {
                            tracing::debug!("Input channel full, dropping mouse event");
                        }
                        Err(TrySendError::Closed(_)) => break,
                    }
                    continue;
                }
                Event::Resize(width, height) => Action::Resize(width, height),
                _ => continue,
            };
            if tx_input.send(action).await.is_err() {
                break;
            }
        }
    });

    let mut app = App::new(connection_ctx);

    let mut tick_interval =
        tokio::time::interval(tokio::time::Duration::from_millis(DEFAULT_UI_TICK_MS));

    loop {
        terminal.draw(|f| app.render(f))?;

        tokio::select! {
            Some(action) = rx.recv() => {
                tracing::info!("Handling action: {:?}", RedactedAction(&action));

                let action = match action {
                    Action::Input(key) => match app.handle_input(key) {
                        Some(a) => a,
                        None => continue,
                    },
                    other => other,
                };

                if matches!(action, Action::Quit) {
                    break;
                }
                if action.is_side_effect() {
                    handle_side_effects(action, context.clone(), task_tracker.clone()).await;
                } else {
                    app.update(action);
                }
            }
            Some(request) = choice_rx.recv() => {
                app.update(Action::ClusterChoiceRequested(request));
            }
            _ = tick_interval.tick() => {
                app.update(Action::Tick);
            }
        }
    }

    // An open picker holds a suspended submission; dropping it cancels the choice.
    app.popup = None;
    drop(choice_rx);
    input_task.abort();

    // Graceful shutdown: close tracker and wait for in-flight requests
    task_tracker.close();
    task_tracker.wait().await;

    terminal_guard.restore()?;
    terminal.show_cursor()?;

    Ok(())
}
