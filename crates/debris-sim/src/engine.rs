//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the object registry (and through it the hecs
//! world), processes player commands, runs all systems, and produces
//! `GameStateSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use glam::DVec2;
use hecs::Entity;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use debris_core::commands::PlayerCommand;
use debris_core::constants::*;
use debris_core::enums::{GamePhase, StatusLevel, ViewMode};
use debris_core::events::AudioEvent;
use debris_core::neo::FeedOutcome;
use debris_core::state::GameStateSnapshot;
use debris_core::types::{Bounds, SimTime};

use crate::feedback::Feedback;
use crate::presentation::{self, PresentationPort};
use crate::registry::Registry;
use crate::resources::{ResourceState, ScoreState};
use crate::systems;
use crate::systems::capture::CaptureOutcome;
use crate::systems::ingest::ExternalQueue;
use crate::systems::mission_schedule::MissionSchedule;
use crate::systems::scan::ScanState;
use crate::systems::snapshot::SnapshotContext;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial time scale (1.0 = normal). Only scales the scan cooldown;
    /// per-tick rates are frame-based.
    pub time_scale: f64,
    /// Canvas width.
    pub width: f64,
    /// Canvas height.
    pub height: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
        }
    }
}

/// The simulation engine. Owns the registry and all sim state.
pub struct SimulationEngine {
    registry: Registry,
    time: SimTime,
    /// Origin of the HUD mission clock; moved by `Restart`.
    mission_start_tick: u64,
    /// Origin of the opening schedule; only `StartMission` sets it.
    schedule_start_tick: u64,
    phase: GamePhase,
    view_mode: ViewMode,
    time_scale: f64,
    bounds: Bounds,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    retire_buffer: Vec<Entity>,
    despawn_buffer: Vec<Entity>,
    feedback: Feedback,

    resources: ResourceState,
    score: ScoreState,
    scan: ScanState,
    external: ExternalQueue,
    schedule: MissionSchedule,
    aiming: bool,
    filter_dangerous: bool,
    selected: Option<u32>,
    feed_requested: bool,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            registry: Registry::new(),
            time: SimTime::default(),
            mission_start_tick: 0,
            schedule_start_tick: 0,
            phase: GamePhase::default(),
            view_mode: ViewMode::default(),
            time_scale: config.time_scale,
            bounds: Bounds::new(config.width, config.height),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            retire_buffer: Vec::new(),
            despawn_buffer: Vec::new(),
            feedback: Feedback::default(),
            resources: ResourceState::default(),
            score: ScoreState::default(),
            scan: ScanState::default(),
            external: ExternalQueue::default(),
            schedule: MissionSchedule::default(),
            aiming: false,
            filter_dangerous: false,
            selected: None,
            feed_requested: false,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.feedback.set_tick(self.time.tick);
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance();
        }

        if self.selected.is_some_and(|id| self.registry.find(id).is_none()) {
            self.selected = None;
        }

        self.snapshot()
    }

    /// Tick, then push the snapshot through a presentation port.
    pub fn tick_with(&mut self, port: &mut dyn PresentationPort) -> GameStateSnapshot {
        let snapshot = self.tick();
        presentation::present(port, &snapshot);
        snapshot
    }

    /// Hand a resolved feed to the engine. Replaces the live set and
    /// schedules staggered insertions starting this tick.
    pub fn ingest_feed(&mut self, outcome: FeedOutcome) {
        self.feedback.set_tick(self.time.tick);
        systems::ingest::schedule(
            &mut self.external,
            &mut self.registry,
            &mut self.feedback,
            outcome,
            self.time.tick,
        );
    }

    /// True once per raised feed request (player key or mission schedule).
    /// The host is expected to fetch and call `ingest_feed`.
    pub fn take_feed_request(&mut self) -> bool {
        std::mem::take(&mut self.feed_requested)
    }

    /// Resolve a capture attempt immediately, outside the command queue.
    pub fn attempt_capture(&mut self, id: u32) -> CaptureOutcome {
        self.feedback.set_tick(self.time.tick);
        systems::capture::attempt(
            &mut self.registry,
            &mut self.resources,
            &mut self.score,
            &mut self.rng,
            &mut self.feedback,
            id,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn aiming(&self) -> bool {
        self.aiming
    }

    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    /// Get a read-only reference to the object registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn resources(&self) -> &ResourceState {
        &self.resources
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    pub fn scan(&self) -> &ScanState {
        &self.scan
    }

    /// External descriptors not yet inserted.
    pub fn pending_external(&self) -> usize {
        self.external.len()
    }

    #[cfg(test)]
    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    #[cfg(test)]
    pub fn resources_mut(&mut self) -> &mut ResourceState {
        &mut self.resources
    }

    #[cfg(test)]
    pub fn rng_mut(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        let active = self.phase == GamePhase::Active;
        match command {
            PlayerCommand::StartMission => {
                if self.phase == GamePhase::MainMenu {
                    self.start_mission();
                }
            }
            PlayerCommand::Pause => {
                if active {
                    self.phase = GamePhase::Paused;
                    self.feedback.status(StatusLevel::Info, "SIMULATION PAUSED");
                }
            }
            PlayerCommand::Restart => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                    self.mission_start_tick = self.time.tick;
                    self.feedback.status(StatusLevel::Info, "SIMULATION RESUMED");
                }
            }
            PlayerCommand::SetTimeScale { scale } => {
                self.time_scale = scale.clamp(0.0, 4.0);
            }
            PlayerCommand::BeginAim => {
                if !active {
                    return;
                }
                if self.resources.nets == 0 {
                    self.feedback
                        .status(StatusLevel::Warning, "NO NET AMMUNITION - reload required");
                    self.feedback.cue(AudioEvent::NoAmmunition);
                    return;
                }
                self.aiming = true;
                self.feedback
                    .status(StatusLevel::Info, "AIM MODE: click a target to capture it");
                self.feedback.cue(AudioEvent::AimStart);
            }
            PlayerCommand::CancelAim => {
                self.aiming = false;
            }
            PlayerCommand::FireAt { x, y } => {
                if !active || !self.aiming {
                    return;
                }
                self.aiming = false;
                match systems::capture::pick_target(&self.registry, DVec2::new(x, y)) {
                    Some(id) => {
                        self.attempt_capture(id);
                    }
                    None => self.target_not_found(),
                }
            }
            PlayerCommand::CaptureTarget { id } => {
                if !active {
                    return;
                }
                if self.attempt_capture(id) == CaptureOutcome::NoTarget {
                    self.target_not_found();
                }
            }
            PlayerCommand::SelectTarget { id } => {
                if self.registry.find(id).is_some() {
                    self.selected = Some(id);
                }
            }
            PlayerCommand::ToggleDangerFilter => {
                self.filter_dangerous = !self.filter_dangerous;
                let text = if self.filter_dangerous {
                    "DANGER FILTER ON - high-risk targets highlighted"
                } else {
                    "DANGER FILTER OFF - showing all targets"
                };
                self.feedback.status(StatusLevel::Info, text);
            }
            PlayerCommand::ClearCaptured => {
                let dropped = self.registry.discard_captured();
                info!(dropped, "captured records cleared");
                self.feedback.status(StatusLevel::Info, "TARGET LIST CLEARED");
                self.feedback.cue(AudioEvent::ListCleared);
            }
            PlayerCommand::Scan => {
                if !active {
                    return;
                }
                systems::scan::request(
                    &mut self.scan,
                    &mut self.resources,
                    &mut self.feedback,
                    self.time.tick,
                );
            }
            PlayerCommand::FetchExternalData => {
                self.request_feed();
            }
            PlayerCommand::SetViewMode { mode } => {
                self.view_mode = mode;
                let text = match mode {
                    ViewMode::Orbital => "3D MODE ENABLED - use the mouse to orbit the view",
                    ViewMode::Flat => "2D MODE ENABLED - fixed view",
                };
                self.feedback.status(StatusLevel::Info, text);
            }
            PlayerCommand::Resize { width, height } => {
                self.bounds = Bounds::new(width.max(0.0), height.max(0.0));
            }
        }
    }

    fn start_mission(&mut self) {
        self.registry.reset();
        self.resources = ResourceState::default();
        self.score = ScoreState::default();
        self.scan = ScanState::default();
        self.external.clear();
        self.schedule = MissionSchedule::default_mission();
        self.aiming = false;
        self.filter_dangerous = false;
        self.selected = None;
        self.feed_requested = false;
        self.mission_start_tick = self.time.tick;
        self.schedule_start_tick = self.time.tick;
        self.phase = GamePhase::Active;

        info!(tick = self.time.tick, "mission started");
        self.feedback.status(
            StatusLevel::Info,
            "ORBITAL SIMULATION STARTED - [C] capture, [S] scan, [N] NEO data",
        );
    }

    fn request_feed(&mut self) {
        self.feed_requested = true;
        self.feedback.status(StatusLevel::Info, "FETCHING NEO DATA...");
    }

    fn target_not_found(&mut self) {
        self.feedback
            .status(StatusLevel::Warning, "TARGET NOT FOUND - aim more precisely");
        self.feedback.cue(AudioEvent::TargetNotFound);
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let now = self.time.tick;
        let mission_tick = now - self.schedule_start_tick;

        // 1. Opening seeding and the automatic feed request
        if systems::mission_schedule::run(
            &mut self.registry,
            &mut self.rng,
            &self.bounds,
            &mut self.feedback,
            &mut self.schedule,
            mission_tick,
        ) {
            self.request_feed();
        }
        // 2. Staggered external insertions
        systems::ingest::run(
            &mut self.external,
            &mut self.registry,
            &mut self.rng,
            &self.bounds,
            now,
        );
        // 3. Scan-forced detections
        systems::scan::run_detections(
            &mut self.scan,
            &mut self.registry,
            &mut self.rng,
            &self.bounds,
            &mut self.feedback,
            now,
        );
        // 4. Spontaneous detections
        systems::detection::run(
            &mut self.registry,
            &mut self.rng,
            &self.bounds,
            &mut self.feedback,
        );
        // 5. Motion and capture fade
        systems::motion::run(&mut self.registry, &self.bounds, &mut self.retire_buffer);
        // 6. Particles
        systems::particles::run(self.registry.world_mut(), &mut self.despawn_buffer);
        // 7. Energy drain, then backup refill
        systems::resources::run(&mut self.resources, &mut self.rng, &mut self.feedback);
        // 8. Scan cooldown
        systems::scan::run_cooldown(&mut self.scan, self.time.dt() * self.time_scale);
    }

    fn snapshot(&mut self) -> GameStateSnapshot {
        let status = self.feedback.take_status();
        let audio_events = self.feedback.take_audio();
        let ctx = SnapshotContext {
            time: &self.time,
            mission_start_tick: self.mission_start_tick,
            phase: self.phase,
            view_mode: self.view_mode,
            bounds: self.bounds,
            resources: &self.resources,
            score: &self.score,
            scan: &self.scan,
            aiming: self.aiming,
            filter_dangerous: self.filter_dangerous,
            selected: self.selected,
        };
        systems::snapshot::build_snapshot(&self.registry, &ctx, status, audio_events)
    }
}
