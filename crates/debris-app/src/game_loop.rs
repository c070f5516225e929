//! Game loop thread. Runs the simulation engine at 60Hz and presents
//! snapshots.
//!
//! The engine is created inside this thread because it's cleaner for ownership.
//! Commands arrive via `mpsc` channel. Feed requests raised by the engine are
//! resolved on short-lived worker threads that post the result back through
//! a second channel owned by the loop, so dropping every host sender still
//! ends the loop.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, info, warn};

use debris_core::commands::PlayerCommand;
use debris_core::constants::TICK_RATE;
use debris_core::neo::FeedOutcome;
use debris_core::state::{GameStateSnapshot, ScoreView, TelemetryView};
use debris_feed::fallback::archived_objects;
use debris_feed::{fetch_with_fallback, NeoFeedClient};
use debris_sim::engine::{SimConfig, SimulationEngine};
use debris_sim::PresentationPort;

use crate::state::GameLoopCommand;

/// Nominal duration of one tick at 1x speed.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// How the loop is driven.
#[derive(Debug, Clone)]
pub struct LoopOptions {
    pub sim: SimConfig,
    /// Stop after this many ticks. `None` runs until shutdown.
    pub max_ticks: Option<u64>,
    /// Sleep to hold the nominal tick rate. Off for batch runs and tests.
    pub paced: bool,
    /// Queue `StartMission` ahead of the first tick.
    pub autostart: bool,
}

impl Default for LoopOptions {
    fn default() -> Self {
        Self {
            sim: SimConfig::default(),
            max_ticks: None,
            paced: true,
            autostart: false,
        }
    }
}

/// Final state reported when the loop exits.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoopSummary {
    pub ticks: u64,
    pub score: ScoreView,
    pub telemetry: TelemetryView,
}

/// Spawns the game loop in a new thread.
///
/// With no feed client every feed request is answered with the archived
/// objects. Returns the command sender and the thread handle.
pub fn spawn_game_loop(
    options: LoopOptions,
    presenter: Box<dyn PresentationPort + Send>,
    feed_client: Option<Arc<dyn NeoFeedClient>>,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> std::io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<LoopSummary>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let (feed_tx, feed_rx) = mpsc::channel::<FeedOutcome>();

    let handle = std::thread::Builder::new()
        .name("debris-game-loop".into())
        .spawn(move || {
            let mut game = GameLoop {
                engine: SimulationEngine::new(options.sim.clone()),
                presenter,
                feed_client,
                feed_tx,
                feed_rx,
            };
            game.run(&options, cmd_rx, &latest_snapshot)
        })?;

    Ok((cmd_tx, handle))
}

struct GameLoop {
    engine: SimulationEngine,
    presenter: Box<dyn PresentationPort + Send>,
    feed_client: Option<Arc<dyn NeoFeedClient>>,
    /// Cloned into each feed worker; never handed to the host.
    feed_tx: mpsc::Sender<FeedOutcome>,
    feed_rx: mpsc::Receiver<FeedOutcome>,
}

impl GameLoop {
    /// The game loop. Runs until Shutdown, channel disconnect, or the tick
    /// limit.
    fn run(
        &mut self,
        options: &LoopOptions,
        cmd_rx: mpsc::Receiver<GameLoopCommand>,
        latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
    ) -> LoopSummary {
        let mut next_tick_time = Instant::now();
        let mut ticks = 0u64;
        let mut last: Option<GameStateSnapshot> = None;

        if options.autostart {
            self.engine.queue_command(PlayerCommand::StartMission);
        }

        loop {
            // 1. Drain all pending commands
            loop {
                match cmd_rx.try_recv() {
                    Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                        self.engine.queue_command(cmd);
                    }
                    Ok(GameLoopCommand::FeedResolved(outcome)) => {
                        self.engine.ingest_feed(outcome);
                    }
                    Ok(GameLoopCommand::Shutdown) => return summary(ticks, last),
                    Err(mpsc::TryRecvError::Empty) => break,
                    Err(mpsc::TryRecvError::Disconnected) => {
                        debug!("host dropped every sender, stopping");
                        return summary(ticks, last);
                    }
                }
            }
            while let Ok(outcome) = self.feed_rx.try_recv() {
                self.engine.ingest_feed(outcome);
            }

            // 2. Advance one tick and present it
            let snapshot = self.engine.tick_with(self.presenter.as_mut());
            ticks += 1;

            // 3. Hand off any feed request the tick raised
            if self.engine.take_feed_request() {
                self.request_feed();
            }

            // 4. Store latest snapshot for polling
            if let Ok(mut lock) = latest_snapshot.lock() {
                *lock = Some(snapshot.clone());
            }
            last = Some(snapshot);

            if options.max_ticks.is_some_and(|max| ticks >= max) {
                info!(ticks, "tick limit reached");
                return summary(ticks, last);
            }

            if !options.paced {
                continue;
            }

            // 5. Sleep until next tick, adjusting for time_scale
            let time_scale = self.engine.time_scale();
            let effective_tick_duration = if time_scale > 0.001 {
                TICK_DURATION.div_f64(time_scale)
            } else {
                TICK_DURATION
            };

            next_tick_time += effective_tick_duration;
            let now = Instant::now();
            if next_tick_time > now {
                std::thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > effective_tick_duration * 2 {
                // Too far behind, reset to avoid catch-up spiral
                next_tick_time = now;
            }
        }
    }

    /// Resolve a feed request off-thread. Offline hosts answer immediately
    /// with the archived objects.
    fn request_feed(&mut self) {
        let Some(client) = self.feed_client.clone() else {
            debug!("offline, serving archived objects");
            self.engine
                .ingest_feed(FeedOutcome::Fallback(archived_objects()));
            return;
        };

        let tx = self.feed_tx.clone();
        let spawned = std::thread::Builder::new()
            .name("debris-feed".into())
            .spawn(move || {
                let outcome = fetch_with_fallback(client.as_ref());
                if tx.send(outcome).is_err() {
                    debug!("game loop gone, dropping feed result");
                }
            });

        if let Err(err) = spawned {
            warn!(error = %err, "could not spawn feed worker, serving archived objects");
            self.engine
                .ingest_feed(FeedOutcome::Fallback(archived_objects()));
        }
    }
}

fn summary(ticks: u64, last: Option<GameStateSnapshot>) -> LoopSummary {
    let last = last.unwrap_or_default();
    LoopSummary {
        ticks,
        score: last.score,
        telemetry: last.telemetry,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use debris_core::enums::GamePhase;
    use debris_sim::presentation::NullPresenter;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartMission))
            .unwrap();
        tx.send(GameLoopCommand::FeedResolved(FeedOutcome::Fallback(
            archived_objects(),
        )))
        .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::PlayerCommand(PlayerCommand::StartMission)
        ));
        assert!(matches!(
            &commands[1],
            GameLoopCommand::FeedResolved(outcome) if outcome.is_fallback()
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.666ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }

    #[test]
    fn test_tick_limit_stops_loop() {
        let latest = Arc::new(Mutex::new(None));
        let options = LoopOptions {
            max_ticks: Some(30),
            paced: false,
            autostart: true,
            ..Default::default()
        };
        let (_tx, handle) =
            spawn_game_loop(options, Box::new(NullPresenter), None, latest.clone()).unwrap();

        let summary = handle.join().unwrap();
        assert_eq!(summary.ticks, 30);

        let last = latest.lock().unwrap().clone().unwrap();
        assert_eq!(last.phase, GamePhase::Active);
        assert_eq!(last.time.tick, 30);
    }

    #[test]
    fn test_shutdown_stops_loop() {
        let latest = Arc::new(Mutex::new(None));
        let (tx, handle) =
            spawn_game_loop(LoopOptions::default(), Box::new(NullPresenter), None, latest)
                .unwrap();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Pause))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let summary = handle.join().unwrap();
        assert!(summary.ticks < 600);
    }

    #[test]
    fn test_dropping_host_sender_stops_loop() {
        let latest = Arc::new(Mutex::new(None));
        let options = LoopOptions {
            paced: true,
            autostart: true,
            ..Default::default()
        };
        let (tx, handle) =
            spawn_game_loop(options, Box::new(NullPresenter), None, latest).unwrap();
        drop(tx);

        let (done_tx, done_rx) = mpsc::channel();
        std::thread::spawn(move || {
            let _ = done_tx.send(handle.join().is_ok());
        });
        let joined = done_rx.recv_timeout(Duration::from_secs(3));
        assert_eq!(joined, Ok(true), "loop kept running without a host sender");
    }

    #[test]
    fn test_feed_worker_does_not_keep_loop_alive() {
        struct SlowFeed;
        impl NeoFeedClient for SlowFeed {
            fn fetch(
                &self,
            ) -> Result<Vec<debris_core::neo::NeoDescriptor>, debris_feed::FeedError> {
                std::thread::sleep(Duration::from_millis(50));
                Ok(archived_objects())
            }
        }

        let latest = Arc::new(Mutex::new(None));
        let options = LoopOptions {
            paced: false,
            autostart: true,
            ..Default::default()
        };
        let feed: Arc<dyn NeoFeedClient> = Arc::new(SlowFeed);
        let (tx, handle) =
            spawn_game_loop(options, Box::new(NullPresenter), Some(feed), latest.clone())
                .unwrap();

        // Wait until the scheduled feed request has gone out.
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            let tick = latest
                .lock()
                .unwrap()
                .as_ref()
                .map_or(0, |s: &GameStateSnapshot| s.time.tick);
            if tick > 130 {
                break;
            }
            std::thread::sleep(Duration::from_millis(1));
        }
        drop(tx);

        let (done_tx, done_rx) = mpsc::channel();
        std::thread::spawn(move || {
            let _ = done_tx.send(handle.join().is_ok());
        });
        assert_eq!(done_rx.recv_timeout(Duration::from_secs(3)), Ok(true));
    }

    #[test]
    fn test_pause_resume_via_commands() {
        let mut engine = SimulationEngine::new(SimConfig::default());

        engine.queue_command(PlayerCommand::StartMission);
        let snap = engine.tick();
        assert_eq!(snap.phase, GamePhase::Active);

        engine.queue_command(PlayerCommand::Pause);
        let snap = engine.tick();
        assert_eq!(snap.phase, GamePhase::Paused);
        let paused_tick = snap.time.tick;

        let snap = engine.tick();
        assert_eq!(snap.time.tick, paused_tick);

        engine.queue_command(PlayerCommand::Restart);
        let snap = engine.tick();
        assert_eq!(snap.phase, GamePhase::Active);
        assert!(snap.time.tick > paused_tick);
    }
}
