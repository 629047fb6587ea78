//! Background render thread for non-blocking UI rendering.
//!
//! The thread owns the terminal for its whole lifetime: raw mode and the
//! alternate screen are entered on spawn and restored on shutdown. The event
//! loop hands over state snapshots and never waits on drawing.

use std::io::{self, Stdout};
use std::sync::mpsc::{self, SyncSender, TrySendError};
use std::thread::{self, JoinHandle};

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use super::state::AppState;

/// Command sent to the render thread.
pub enum RenderCommand {
    /// Render this state snapshot
    Render(Box<AppState>),
    /// Shutdown the render thread
    Shutdown,
}

/// Handle to the background render thread.
pub struct RenderThread {
    cmd_tx: SyncSender<RenderCommand>,
    handle: Option<JoinHandle<()>>,
}

fn terminal_setup() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        disable_raw_mode().ok();
        return Err(e);
    }
    Terminal::new(CrosstermBackend::new(stdout)).inspect_err(|_| {
        disable_raw_mode().ok();
    })
}

fn terminal_teardown(terminal: &mut Terminal<CrosstermBackend<Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
}

impl RenderThread {
    /// Spawn the render thread. Terminal setup happens inside the thread so
    /// it also tears down there, whatever state the event loop ends in.
    pub fn spawn() -> io::Result<Self> {
        // Capacity 1: only the latest snapshot matters
        let (cmd_tx, cmd_rx) = mpsc::sync_channel::<RenderCommand>(1);

        let handle = thread::spawn(move || {
            let mut terminal = match terminal_setup() {
                Ok(t) => t,
                Err(e) => {
                    tracing::error!("Failed to set up terminal: {}", e);
                    return;
                }
            };

            while let Ok(RenderCommand::Render(state)) = cmd_rx.recv() {
                if let Err(e) = terminal.draw(|f| crate::ui::render(f, &state)) {
                    tracing::error!("Render error: {}", e);
                }
            }

            // Shutdown command or a dropped sender both land here
            terminal_teardown(&mut terminal);
        });

        Ok(Self {
            cmd_tx,
            handle: Some(handle),
        })
    }

    /// Request a render of the given state (non-blocking). A frame is skipped
    /// when one is already queued; the event loop re-sends on the next state
    /// change.
    pub fn render(&self, state: AppState) {
        match self.cmd_tx.try_send(RenderCommand::Render(Box::new(state))) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                tracing::trace!("Render thread busy, skipping frame");
            }
            Err(TrySendError::Disconnected(_)) => {
                tracing::error!("Render thread disconnected");
            }
        }
    }

    /// Shutdown the render thread and wait for the terminal to be restored.
    pub fn shutdown(mut self) {
        let _ = self.cmd_tx.send(RenderCommand::Shutdown);

        if let Some(handle) = self.handle.take() {
            handle.join().ok();
        }
    }
}
