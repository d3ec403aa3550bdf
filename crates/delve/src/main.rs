//! delve: headless driver for the dungeon engine
//!
//! Generates (or loads) a dungeon, plays a scripted sequence of intents,
//! prints what happened and the final map, and optionally saves the result.

mod render;
mod script;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;

use dv_core::{DungeonConfig, GameLoop, GameRng, GameState, GenerationError, TurnError};
use dv_save::SaveError;

use crate::render::{describe, render_map, status_line};
use crate::script::{ScriptError, parse_script};

/// Explore a procedurally generated dungeon from the command line
#[derive(Parser, Debug)]
#[command(name = "delve")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Dungeon seed (random when omitted)
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// TOML configuration file
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Intents to play, e.g. "ddds.e1"
    #[arg(short = 'x', long = "script", default_value = "")]
    script: String,

    /// Resume from a save file instead of generating
    #[arg(short = 'l', long = "load")]
    load: Option<PathBuf>,

    /// Save the session after the script has run
    #[arg(short = 'o', long = "save")]
    save: Option<PathBuf>,

    /// Save to the default location for the seed
    #[arg(long = "save-default", conflicts_with = "save")]
    save_default: bool,

    /// Draw the whole map, ignoring fog-of-war
    #[arg(short = 'r', long = "reveal")]
    reveal: bool,

    /// Print the events of every turn
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("could not read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Save(#[from] SaveError),

    #[error(transparent)]
    Script(#[from] ScriptError),

    #[error(transparent)]
    Turn(#[from] TurnError),
}

fn load_config(path: &Path) -> Result<DungeonConfig, CliError> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let config: DungeonConfig = toml::from_str(&content).map_err(|source| CliError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "config loaded");
    Ok(config)
}

fn run(args: Args) -> Result<(), CliError> {
    let intents = parse_script(&args.script)?;

    let state = match &args.load {
        Some(path) => dv_save::load_game(path)?,
        None => {
            let config = match &args.config {
                Some(path) => load_config(path)?,
                None => DungeonConfig::default(),
            };
            let seed = args.seed.unwrap_or_else(|| GameRng::from_entropy().seed());
            tracing::info!(seed, "generating dungeon");
            GameState::generate(config, seed)?
        }
    };

    for event in state.generation_events() {
        println!("{}", describe(event));
    }

    let mut game = GameLoop::new(state);
    for intent in intents {
        if game.state().phase().is_ended() {
            tracing::warn!(?intent, "session over, ignoring remaining intents");
            break;
        }
        let report = game.tick(intent)?;
        if args.verbose {
            for event in &report.events {
                println!("[{}] {}", report.turn, describe(event));
            }
        }
    }

    let state = game.into_state();
    print!("{}", render_map(&state, args.reveal));
    println!("{}", status_line(&state));

    let save_path = match (args.save, args.save_default) {
        (Some(path), _) => Some(path),
        (None, true) => Some(dv_save::default_save_path(state.seed)),
        (None, false) => None,
    };
    if let Some(path) = save_path {
        dv_save::save_game(&state, &path)?;
        println!("saved to {}", path.display());
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("delve: {e}");
            ExitCode::FAILURE
        }
    }
}
