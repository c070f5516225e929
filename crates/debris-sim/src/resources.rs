//! Resource and score data model.
//!
//! Stored on `SimulationEngine`, NOT as ECS entities. The systems in
//! `systems::resources` and `systems::capture` are the only writers.

use debris_core::constants::*;
use debris_core::enums::EnergyBand;

/// Energy and net magazine.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceState {
    pub energy: f64,
    pub nets: u32,
}

impl Default for ResourceState {
    fn default() -> Self {
        Self {
            energy: INITIAL_ENERGY,
            nets: INITIAL_NETS,
        }
    }
}

impl ResourceState {
    /// Subtract `amount`, flooring at zero. Returns true when the floor was hit.
    pub fn drain(&mut self, amount: f64) -> bool {
        self.energy -= amount;
        if self.energy < 0.0 {
            self.energy = 0.0;
            return true;
        }
        false
    }

    /// Credit energy up to `ENERGY_CAP`.
    ///
    /// The cap sits below `INITIAL_ENERGY`, so a credit applied above the cap
    /// lowers energy to the cap.
    pub fn credit_energy(&mut self, amount: f64) {
        self.energy = ENERGY_CAP.min(self.energy + amount);
    }

    /// Spend one net. Returns false (and spends nothing) when empty.
    pub fn consume_net(&mut self) -> bool {
        if self.nets == 0 {
            return false;
        }
        self.nets -= 1;
        true
    }

    /// Backup refill: both counters up to their refill caps.
    pub fn refill(&mut self) {
        self.credit_energy(REFILL_ENERGY_AMOUNT);
        self.nets = NET_REFILL_CAP.min(self.nets + REFILL_NET_AMOUNT);
    }

    pub fn band(&self) -> EnergyBand {
        if self.energy > ENERGY_NOMINAL_LEVEL {
            EnergyBand::Nominal
        } else if self.energy > ENERGY_WARNING_LEVEL {
            EnergyBand::Warning
        } else {
            EnergyBand::Critical
        }
    }
}

/// Running score state tracked by the engine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreState {
    pub score: u32,
    pub captures: u32,
    pub external_captures: u32,
    /// Nets actually fired (successful or not).
    pub attempts: u32,
}
