use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use debris_app::config::AppConfig;
use debris_app::game_loop::{spawn_game_loop, LoopOptions};
use debris_app::presenter::TerminalPresenter;
use debris_app::state::AppState;
use debris_feed::{NeoFeedClient, NeoWsClient};

#[derive(Parser, Debug)]
#[command(name = "debris-capture", about = "Orbital debris capture simulation")]
struct Cli {
    /// TOML file with [simulation] and [feed] tables
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the simulation seed
    #[arg(long)]
    seed: Option<u64>,

    /// Ticks to run before exiting (0 runs until interrupted)
    #[arg(long, default_value_t = 3600)]
    ticks: u64,

    /// Skip the NEO feed and use the archived objects
    #[arg(long)]
    offline: bool,

    /// Hold the 60Hz tick rate instead of running as fast as possible
    #[arg(long)]
    realtime: bool,

    /// Print the final summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref()).context("loading configuration")?;

    let mut sim = config.sim_config();
    if let Some(seed) = cli.seed {
        sim.seed = seed;
    }

    let feed: Option<Arc<dyn NeoFeedClient>> = if cli.offline {
        None
    } else {
        let client = NeoWsClient::from_config(&config.feed).context("building NEO client")?;
        Some(Arc::new(client))
    };

    info!(
        seed = sim.seed,
        ticks = cli.ticks,
        offline = cli.offline,
        "starting debris capture"
    );

    let options = LoopOptions {
        sim,
        max_ticks: (cli.ticks > 0).then_some(cli.ticks),
        paced: cli.realtime,
        autostart: true,
    };

    let state = AppState::new();
    let (tx, handle) = spawn_game_loop(
        options,
        Box::new(TerminalPresenter::default()),
        feed,
        state.latest_snapshot.clone(),
    )
    .context("spawning game loop")?;
    state.attach(tx);

    let summary = handle
        .join()
        .map_err(|_| anyhow!("game loop thread panicked"))?;

    if cli.json {
        let json = serde_json::to_string_pretty(&summary).context("encoding summary")?;
        println!("{json}");
        return Ok(());
    }

    println!(
        "ticks {} | score {} | captured {}/{} | efficiency {}% | {}",
        summary.ticks,
        summary.score.score,
        summary.score.captures,
        summary.score.attempts,
        summary.telemetry.efficiency_percent,
        summary.telemetry.data_source.label(),
    );
    Ok(())
}
