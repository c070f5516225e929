//! Presentation port. The engine pushes each snapshot through it; hosts
//! decide how (or whether) to draw.

use debris_core::events::StatusMessage;
use debris_core::state::{DebrisView, GameStateSnapshot};

/// One-way sink for frames, list refreshes and status lines.
pub trait PresentationPort {
    fn render_frame(&mut self, snapshot: &GameStateSnapshot);

    /// Target list refresh. Receives every live record; entries hidden by
    /// the danger filter have `visible_in_list == false`.
    fn list_update(&mut self, debris: &[DebrisView]);

    fn status_message(&mut self, message: &StatusMessage);
}

/// Push one snapshot through a port: status lines first, then the list and
/// the frame.
pub fn present(port: &mut dyn PresentationPort, snapshot: &GameStateSnapshot) {
    for message in &snapshot.status {
        port.status_message(message);
    }
    port.list_update(&snapshot.debris);
    port.render_frame(snapshot);
}

/// Discards everything. Used by headless runs and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPresenter;

impl PresentationPort for NullPresenter {
    fn render_frame(&mut self, _snapshot: &GameStateSnapshot) {}
    fn list_update(&mut self, _debris: &[DebrisView]) {}
    fn status_message(&mut self, _message: &StatusMessage) {}
}
