//! State shared between the driver's caller and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use starraid_core::commands::FieldCommand;
use starraid_core::enums::BogeySlot;
use starraid_core::state::{FieldFrame, Viewport};
use starraid_sim::pools::{BogeyBehavior, BogeySpawn};

/// Commands sent to the game loop thread.
pub enum LoopCommand {
    /// A command to forward to the field engine.
    Field(FieldCommand),
    /// Place a bogey. Carries its behaviour, so it cannot be a `FieldCommand`.
    SpawnBogey {
        slot: BogeySlot,
        spawn: BogeySpawn,
        behavior: Box<dyn BogeyBehavior>,
    },
    /// The window was resized.
    Resize(Viewport),
    /// Shut down the game loop thread.
    Shutdown,
}

/// Handle held by whoever started the game loop.
pub struct AppState {
    /// Channel sender to the game loop thread. `None` until started.
    pub command_tx: Mutex<Option<mpsc::Sender<LoopCommand>>>,
    /// Latest frame, updated by the game loop thread after each tick.
    pub latest_frame: Arc<Mutex<Option<FieldFrame>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_frame: Arc::new(Mutex::new(None)),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Send a command if the loop is running. Returns false otherwise.
    pub fn send(&self, command: LoopCommand) -> bool {
        match self.command_tx.lock() {
            Ok(guard) => guard
                .as_ref()
                .is_some_and(|tx| tx.send(command).is_ok()),
            Err(_) => false,
        }
    }

    /// Copy of the latest frame, if any tick has run.
    pub fn latest_frame(&self) -> Option<FieldFrame> {
        self.latest_frame.lock().ok().and_then(|f| f.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new();
        assert!(state.command_tx.lock().unwrap().is_none());
        assert!(state.latest_frame().is_none());
    }

    #[test]
    fn test_send_without_loop_fails() {
        let state = AppState::new();
        assert!(!state.send(LoopCommand::Shutdown));
    }
}
