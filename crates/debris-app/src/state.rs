//! State shared between the host thread and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use debris_core::commands::PlayerCommand;
use debris_core::neo::FeedOutcome;
use debris_core::state::GameStateSnapshot;

/// Messages delivered to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Feed data resolved by the host (live data or the archived fallback).
    FeedResolved(FeedOutcome),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Host-side handles to a running game loop.
///
/// `mpsc::Sender` is Send but not Sync, hence the Mutex.
pub struct AppState {
    /// Channel sender to forward commands to the game loop thread.
    /// `None` until the loop is spawned.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot, updated by the game loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&self, tx: mpsc::Sender<GameLoopCommand>) {
        if let Ok(mut lock) = self.command_tx.lock() {
            *lock = Some(tx);
        }
    }

    /// Forward a player command. Returns false when no loop is listening.
    pub fn send_command(&self, command: PlayerCommand) -> bool {
        self.send(GameLoopCommand::PlayerCommand(command))
    }

    /// Ask the loop to stop. Returns false when no loop is listening.
    pub fn shutdown(&self) -> bool {
        self.send(GameLoopCommand::Shutdown)
    }

    /// Clone of the most recent snapshot, if any tick has run.
    pub fn latest(&self) -> Option<GameStateSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|lock| lock.clone())
    }

    fn send(&self, message: GameLoopCommand) -> bool {
        let Ok(lock) = self.command_tx.lock() else {
            return false;
        };
        lock.as_ref().is_some_and(|tx| tx.send(message).is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new();
        assert!(state.command_tx.lock().unwrap().is_none());
        assert!(state.latest().is_none());
        assert!(!state.send_command(PlayerCommand::StartMission));
    }

    #[test]
    fn test_app_state_forwards_commands() {
        let state = AppState::new();
        let (tx, rx) = mpsc::channel();
        state.attach(tx);

        assert!(state.send_command(PlayerCommand::Scan));
        assert!(state.shutdown());

        assert!(matches!(
            rx.try_recv(),
            Ok(GameLoopCommand::PlayerCommand(PlayerCommand::Scan))
        ));
        assert!(matches!(rx.try_recv(), Ok(GameLoopCommand::Shutdown)));

        drop(rx);
        assert!(!state.send_command(PlayerCommand::Scan));
    }
}
