//! Per-tick feedback buffer: status lines and audio cues raised by systems.
//!
//! Drained into the snapshot at the end of every tick.

use debris_core::enums::StatusLevel;
use debris_core::events::{AudioEvent, StatusMessage};

#[derive(Debug, Default)]
pub struct Feedback {
    tick: u64,
    status: Vec<StatusMessage>,
    audio: Vec<AudioEvent>,
}

impl Feedback {
    /// Stamp subsequent messages with this tick.
    pub fn set_tick(&mut self, tick: u64) {
        self.tick = tick;
    }

    pub fn status(&mut self, level: StatusLevel, text: impl Into<String>) {
        self.status.push(StatusMessage {
            level,
            text: text.into(),
            tick: self.tick,
        });
    }

    pub fn cue(&mut self, event: AudioEvent) {
        self.audio.push(event);
    }

    pub fn statuses(&self) -> &[StatusMessage] {
        &self.status
    }

    pub fn cues(&self) -> &[AudioEvent] {
        &self.audio
    }

    pub fn last_status(&self) -> Option<&StatusMessage> {
        self.status.last()
    }

    pub fn take_status(&mut self) -> Vec<StatusMessage> {
        std::mem::take(&mut self.status)
    }

    pub fn take_audio(&mut self) -> Vec<AudioEvent> {
        std::mem::take(&mut self.audio)
    }
}
