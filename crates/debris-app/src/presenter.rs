//! Terminal presenter: status lines and a periodic HUD line through
//! `tracing`.

use tracing::{debug, info, warn};

use debris_core::constants::HUD_REFRESH_TICKS;
use debris_core::enums::{EnergyBand, StatusLevel};
use debris_core::events::StatusMessage;
use debris_core::state::{DebrisView, GameStateSnapshot};
use debris_sim::PresentationPort;

#[derive(Debug, Clone)]
pub struct TerminalPresenter {
    hud_every: u64,
    frames: u64,
    listed: usize,
    last_hud: Option<String>,
}

impl Default for TerminalPresenter {
    fn default() -> Self {
        Self::new(HUD_REFRESH_TICKS)
    }
}

impl TerminalPresenter {
    /// HUD line every `hud_every` frames (0 disables it).
    pub fn new(hud_every: u64) -> Self {
        Self {
            hud_every,
            frames: 0,
            listed: 0,
            last_hud: None,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Entries currently shown in the target list.
    pub fn listed(&self) -> usize {
        self.listed
    }

    pub fn last_hud(&self) -> Option<&str> {
        self.last_hud.as_deref()
    }
}

/// One-line HUD summary.
pub fn hud_line(snapshot: &GameStateSnapshot) -> String {
    let telemetry = &snapshot.telemetry;
    let resources = &snapshot.resources;
    let band = match resources.energy_band {
        EnergyBand::Nominal => "",
        EnergyBand::Warning => " (low)",
        EnergyBand::Critical => " (critical)",
    };
    format!(
        "{} | ALT {:.1} km | VEL {:.2} km/s | ENERGY {}%{} | NETS {} | SCORE {} | OBJ {} ({} NEO, {} hazardous) | CAPTURED {} | EFF {}% | {}",
        telemetry.clock,
        telemetry.altitude_km,
        telemetry.speed_km_s,
        resources.energy_display,
        band,
        resources.nets,
        snapshot.score.score,
        telemetry.total_objects,
        telemetry.external_objects,
        telemetry.hazardous_objects,
        telemetry.captured_objects,
        telemetry.efficiency_percent,
        telemetry.data_source.label(),
    )
}

impl PresentationPort for TerminalPresenter {
    fn render_frame(&mut self, snapshot: &GameStateSnapshot) {
        self.frames += 1;
        if self.hud_every == 0 || self.frames % self.hud_every != 0 {
            return;
        }
        let line = hud_line(snapshot);
        info!(target: "hud", "{line}");
        self.last_hud = Some(line);
    }

    fn list_update(&mut self, debris: &[DebrisView]) {
        let listed = debris.iter().filter(|d| d.visible_in_list).count();
        if listed != self.listed {
            debug!(listed, total = debris.len(), "target list changed");
            self.listed = listed;
        }
    }

    fn status_message(&mut self, message: &StatusMessage) {
        match message.level {
            StatusLevel::Warning | StatusLevel::Critical => {
                warn!(tick = message.tick, "{}", message.text)
            }
            StatusLevel::Info | StatusLevel::Success => {
                info!(tick = message.tick, "{}", message.text)
            }
        }
    }
}
