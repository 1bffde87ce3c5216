//! Main TUI runner - entry point and event loop
//!
//! Owns the application lifecycle: terminal setup, the message loop, the
//! transition timers, and terminal restoration.

use tokio::sync::mpsc;
use tokio::time::sleep;

use pageflow_app::config::Settings;
use pageflow_app::handler::{update, UpdateAction};
use pageflow_app::message::Message;
use pageflow_app::state::AppState;
use pageflow_core::prelude::*;
use pageflow_core::Deck;

use super::{event, render, terminal};

/// Run the presentation until the user quits
pub async fn run(deck: Deck, settings: Settings, initial: usize) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut term = ratatui::init();
    terminal::enable_mouse_capture()?;

    let mut state = AppState::new(deck, settings, initial);

    // Seed viewport from the real terminal size; falls back to the default
    // if the size query fails
    if let Ok(size) = term.size() {
        let _ = update(
            &mut state,
            Message::Resize {
                width: size.width,
                height: size.height,
            },
        );
    }

    // Timer tasks send their completion messages back through this channel
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx);

    let _ = terminal::disable_mouse_capture();
    ratatui::restore();
    result
}

/// Main event loop
fn run_loop(
    term: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
) -> Result<()> {
    // Title last pushed to the terminal, to avoid rewriting it every frame
    let mut applied_title = String::new();

    while !state.should_quit() {
        // Timer completions first, so an expired lock releases before the
        // next input is routed
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx);
        }

        if state.ui.fragment != applied_title {
            applied_title = state.ui.fragment.clone();
            terminal::set_title(&applied_title)?;
        }

        term.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx);
        }
    }

    Ok(())
}

/// Run one message through the update function, chasing follow-up messages
/// and executing any scheduled action.
fn process_message(state: &mut AppState, message: Message, msg_tx: &mpsc::Sender<Message>) {
    let mut current = Some(message);
    while let Some(msg) = current.take() {
        let result = update(state, msg);
        if let Some(action) = result.action {
            handle_action(action, msg_tx);
        }
        current = result.message;
    }
}

/// Execute a scheduled action by spawning a timer task that reports back
/// through the message channel.
fn handle_action(action: UpdateAction, msg_tx: &mpsc::Sender<Message>) {
    let (after, done) = match action {
        UpdateAction::ScheduleUnlock { after } => (after, Message::TransitionFinished),
        UpdateAction::ScheduleJumpStep { after } => (after, Message::JumpStepDue),
    };
    let tx = msg_tx.clone();
    tokio::spawn(async move {
        sleep(after).await;
        if let Err(e) = tx.send(done).await {
            warn!("timer completion dropped: {}", e);
        }
    });
}
