//! # Island Horizons Main Entry Point
//!
//! Parses the command line, initializes logging and settings, then either
//! opens the macroquad window or runs the simulation headless.

use clap::Parser;
use island_horizons::{
    service_from_settings, DialogueDispatcher, InputHandler, IslandResult, SceneManager, Session,
    Settings,
};
use macroquad::window::Conf;
use std::path::PathBuf;
use std::time::Duration;
#[cfg(feature = "dev-tools")]
use tracing::Level;

/// Command line arguments for Island Horizons.
#[derive(Parser, Debug)]
#[command(name = "island-horizons")]
#[command(about = "A cozy island life-simulation with wandering villagers")]
#[command(version)]
struct Args {
    /// Random seed for villager wandering
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Use canned dialogue instead of the generation API
    #[arg(long)]
    offline: bool,

    /// Run the simulation without a window and print the final state
    #[arg(long)]
    headless: bool,

    /// Frames to simulate in headless mode
    #[arg(long, default_value_t = 600)]
    ticks: u32,

    /// Frame length in milliseconds for headless mode
    #[arg(long, default_value_t = 16)]
    frame_ms: u64,
}

fn main() {
    let args = Args::parse();
    initialize_logging(&args.log_level);

    log::info!("Starting Island Horizons v{}", island_horizons::VERSION);

    let settings = match load_settings(&args) {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("Could not load settings: {}", e);
            std::process::exit(2);
        }
    };

    if args.headless {
        if let Err(e) = run_headless(&settings, args.ticks, Duration::from_millis(args.frame_ms)) {
            log::error!("Headless run failed: {}", e);
            std::process::exit(1);
        }
        return;
    }

    macroquad::Window::from_config(window_conf(), async move {
        if let Err(e) = run_game(settings).await {
            log::error!("Game exited with error: {}", e);
        }
    });
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Island Horizons".to_string(),
        window_width: 1024,
        window_height: 768,
        high_dpi: true,
        ..Default::default()
    }
}

/// Initializes the logging system based on the specified log level.
///
/// With `dev-tools` a tracing subscriber collects both `tracing` spans and
/// `log` records; otherwise `env_logger` handles `log` directly.
fn initialize_logging(log_level: &str) {
    #[cfg(feature = "dev-tools")]
    {
        let level = match log_level.to_lowercase().as_str() {
            "error" => Level::ERROR,
            "warn" => Level::WARN,
            "info" => Level::INFO,
            "debug" => Level::DEBUG,
            "trace" => Level::TRACE,
            _ => Level::INFO,
        };

        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .init();
    }

    #[cfg(not(feature = "dev-tools"))]
    {
        env_logger::Builder::new()
            .parse_filters(log_level)
            .format_timestamp_millis()
            .init();
    }
}

fn load_settings(args: &Args) -> IslandResult<Settings> {
    let mut settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if args.seed.is_some() {
        settings.seed = args.seed;
    }
    if args.offline {
        settings.dialogue.offline = true;
    }
    settings.validate()?;
    Ok(settings)
}

/// Simulates `ticks` frames of island life and prints the final state.
fn run_headless(settings: &Settings, ticks: u32, frame: Duration) -> IslandResult<()> {
    log::info!("Running {} headless frames of {:?}", ticks, frame);
    let mut session = Session::new(settings);
    session.start_game();

    let mut changed_frames = 0u32;
    for _ in 0..ticks {
        if session.tick(frame) {
            changed_frames += 1;
        }
    }
    session.state.check_invariants()?;
    log::info!("{} of {} frames changed the island", changed_frames, ticks);

    println!("{}", session.state.to_json()?);
    Ok(())
}

/// Runs the windowed game.
async fn run_game(settings: Settings) -> IslandResult<()> {
    let session = Session::new(&settings);
    let dispatcher = match DialogueDispatcher::new(service_from_settings(&settings.dialogue)) {
        Ok(dispatcher) => Some(dispatcher),
        Err(e) => {
            log::warn!("Dialogue disabled: {}", e);
            None
        }
    };

    let mut scenes = SceneManager::new(session, InputHandler::new(), dispatcher);
    scenes.run().await
}
