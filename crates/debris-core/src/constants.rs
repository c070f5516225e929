//! Simulation constants and tuning parameters.
//!
//! Rates that are "per tick" are applied once per frame and are not scaled
//! by frame duration.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Canvas ---

pub const DEFAULT_CANVAS_WIDTH: f64 = 1280.0;
pub const DEFAULT_CANVAS_HEIGHT: f64 = 720.0;

// --- Detection generator ---

/// Chance per tick of a spontaneous detection.
pub const DETECTION_PROBABILITY: f64 = 0.02;

/// Spontaneous detections stop once this many records are live.
pub const POPULATION_CAP: usize = 15;

/// Simulated ids are drawn uniformly from `0..SIMULATED_ID_RANGE`.
pub const SIMULATED_ID_RANGE: u32 = 10_000;

/// Simulated velocity components are drawn from `[-MAX, MAX)`.
pub const SIMULATED_MAX_SPEED: f64 = 1.0;

/// Simulated spin is drawn from `[-MAX, MAX)` degrees per tick.
pub const SIMULATED_MAX_SPIN: f64 = 2.5;

// --- Capture ---

/// Success probability before the danger penalty.
pub const CAPTURE_BASE_SUCCESS_RATE: f64 = 0.8;

/// Success probability lost per unit of danger.
pub const CAPTURE_DANGER_PENALTY: f64 = 0.3;

/// Capture fade advance per tick (~50 ticks to removal).
pub const CAPTURE_PROGRESS_PER_TICK: f64 = 0.02;

/// Energy credited on any successful capture.
pub const CAPTURE_ENERGY_CREDIT: f64 = 2.0;

/// Extra score for capturing an externally sourced object.
pub const EXTERNAL_CAPTURE_BONUS: u32 = 100;

/// Extra energy for capturing an externally sourced object.
pub const EXTERNAL_CAPTURE_ENERGY_CREDIT: f64 = 5.0;

/// Aim hit-test radius around the click point.
pub const AIM_PICK_RADIUS: f64 = 50.0;

// --- Resources ---

pub const INITIAL_ENERGY: f64 = 200.0;

/// Ceiling applied by capture credits and the auto-refill.
pub const ENERGY_CAP: f64 = 100.0;

pub const INITIAL_NETS: u32 = 10;

/// Ceiling applied by the auto-refill.
pub const NET_REFILL_CAP: u32 = 6;

/// Passive energy drain per tick.
pub const ENERGY_DRAIN_PER_TICK: f64 = 0.03;

/// Chance of the "energy critical" warning on a tick that floors energy.
pub const ENERGY_CRITICAL_WARNING_PROBABILITY: f64 = 0.01;

/// Auto-refill is only sampled while energy is below this threshold.
pub const REFILL_ENERGY_THRESHOLD: f64 = 20.0;

/// Chance per tick of an auto-refill while below the threshold.
pub const REFILL_PROBABILITY: f64 = 0.001;

pub const REFILL_ENERGY_AMOUNT: f64 = 30.0;
pub const REFILL_NET_AMOUNT: u32 = 2;

/// Energy display thresholds (nominal / warning / critical).
pub const ENERGY_NOMINAL_LEVEL: f64 = 30.0;
pub const ENERGY_WARNING_LEVEL: f64 = 10.0;

// --- Scan ---

pub const SCAN_ENERGY_COST: f64 = 10.0;
pub const SCAN_COOLDOWN_SECS: f64 = 5.0;

/// Forced detections scheduled by a scan, and their spacing.
pub const SCAN_FORCED_DETECTIONS: u64 = 3;
pub const SCAN_DETECTION_SPACING_TICKS: u64 = 30;
pub const SCAN_DETECTION_PROBABILITY: f64 = 0.7;

/// How long scan highlights stay on after a scan.
pub const SCAN_REVEAL_TICKS: u64 = 60;

// --- Danger classes ---

/// Records above this danger are highlighted while the filter is on.
pub const FILTER_HIGHLIGHT_DANGER: f64 = 0.5;

/// Records above this danger count as "dangerous" in the target list.
pub const DANGEROUS_LIST_DANGER: f64 = 0.6;

/// Records above this danger are drawn with the irregular hazard shape.
pub const HAZARD_SHAPE_DANGER: f64 = 0.7;

// --- External ingestion ---

/// Spacing between staggered insertions of external objects (300 ms).
pub const EXTERNAL_INSERT_SPACING_TICKS: u64 = 18;

/// Margin kept between external spawn points and the canvas edge.
pub const EXTERNAL_SPAWN_MARGIN: f64 = 100.0;

pub const EXTERNAL_MIN_SIZE: f64 = 3.0;
pub const EXTERNAL_MAX_SIZE: f64 = 12.0;

/// Diameter (m) per unit of visual size.
pub const EXTERNAL_DIAMETER_PER_SIZE: f64 = 2000.0;

// --- Mission start ---

/// Simulated debris seeded at mission start, one per spacing interval.
pub const INITIAL_SEED_COUNT: u64 = 3;
pub const INITIAL_SEED_SPACING_TICKS: u64 = 60;

/// Tick (after mission start) at which the first feed request is raised.
pub const INITIAL_FEED_REQUEST_TICK: u64 = 120;

// --- Particles ---

pub const CAPTURE_PARTICLES_PRIMARY: usize = 15;
pub const CAPTURE_PARTICLES_SECONDARY: usize = 8;
pub const PARTICLE_MAX_SPEED: f64 = 4.0;
pub const PARTICLE_MIN_DECAY: f64 = 0.01;
pub const PARTICLE_MAX_DECAY: f64 = 0.03;
pub const PARTICLE_MIN_SIZE: f64 = 1.0;
pub const PARTICLE_MAX_SIZE: f64 = 4.0;

// --- Telemetry ---

pub const TELEMETRY_BASE_ALTITUDE_KM: f64 = 400.0;
pub const TELEMETRY_BASE_SPEED_KM_S: f64 = 7.6;

/// HUD refresh interval for hosts that don't redraw every tick.
pub const HUD_REFRESH_TICKS: u64 = 60;
