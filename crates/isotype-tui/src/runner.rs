//! Main TUI runner - entry point and event loop
//!
//! Contains the application lifecycle:
//! - `run`: Terminal setup, initial layout, and teardown
//! - `run_loop`: Main event loop processing terminal and deferred messages

use isotype_app::config::Settings;
use isotype_app::message::Message;
use isotype_app::state::AppState;
use isotype_app::{process_message, signals, Debouncer};
use isotype_core::prelude::*;
use isotype_core::{dc_medicaid, generate};
use ratatui::layout::Rect;
use tokio::sync::mpsc;

use super::{event, layout, render, terminal};

/// Run the interactive chart
pub async fn run(settings: Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    // Initialize terminal
    let mut term = ratatui::init();
    if let Err(e) = terminal::enable_mouse() {
        warn!("Pointer tooltips unavailable: {}", e);
    }

    let result = run_with_terminal(&mut term, settings).await;

    // Restore terminal
    terminal::disable_mouse();
    ratatui::restore();

    result
}

async fn run_with_terminal(term: &mut ratatui::DefaultTerminal, settings: Settings) -> Result<()> {
    let size = term.size()?;
    let screen = Rect::new(0, 0, size.width, size.height);
    let units = generate(&dc_medicaid(), settings.chart.unit_size);
    let viewport = layout::viewport_for(screen, settings.ui.px_per_column, units.len());
    info!(
        "Starting chart: terminal {}x{}, container width {}px",
        size.width, size.height, viewport.container_width
    );

    let mut debouncer = Debouncer::from_millis(settings.resize.debounce_ms);
    let mut state = AppState::with_units(settings, units, viewport);

    // Deferred messages (debounced resizes, signals)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    signals::spawn_signal_handler(msg_tx.clone());

    // Let the tracker report the step under the trigger line
    process_message(&mut state, Message::Scroll(0), &msg_tx, &mut debouncer);

    run_loop(term, &mut state, msg_rx, msg_tx, &mut debouncer)
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    debouncer: &mut Debouncer,
) -> Result<()> {
    while !state.should_quit() {
        // Process deferred messages (settled resizes, signals)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, debouncer);
        }

        // Render
        let screen = terminal.draw(|frame| render::view(frame, state))?.area;

        // Handle terminal events
        if let Some(message) = event::poll(screen, state)? {
            process_message(state, message, &msg_tx, debouncer);
        }
    }

    debouncer.cancel();
    Ok(())
}
