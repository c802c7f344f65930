//! rlgym CLI
//!
//! 시나리오 샘플링 / 관측 벡터 확인 도구

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use rlgym_core::engine::game::Action;
use rlgym_core::engine::state_setters::StateSetter;
use rlgym_core::{AdvancedObsPadder, EnvConfig, GameMode, GameState, ObsBuilder, SnapshotArena};

#[derive(Parser)]
#[command(name = "rlgym")]
#[command(about = "Sample reset scenarios and inspect padded observations", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the observation length for a padding team size
    ObsSize {
        #[arg(long, default_value = "3")]
        team_size: usize,
    },

    /// Reset fresh arenas and dump the resulting states as JSON
    Sample {
        #[command(flatten)]
        scene: SceneArgs,

        /// Number of episodes
        #[arg(long, default_value = "1")]
        episodes: usize,

        /// Reset episodes on the rayon thread pool
        #[arg(long, default_value = "false")]
        parallel: bool,

        /// Output JSON file (stdout if omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Reset one arena and print every player's observation
    Observe {
        #[command(flatten)]
        scene: SceneArgs,
    },

    /// Print a preset config as YAML (or JSON)
    Config {
        #[arg(long, default_value = "standard")]
        preset: GameMode,

        #[arg(long, default_value = "false")]
        json: bool,
    },
}

#[derive(clap::Args)]
struct SceneArgs {
    /// kickoff | flick | aerial | air_dribble | ceiling_shot | random | weighted
    #[arg(long, default_value = "weighted")]
    setter: String,

    /// Config file (.json / .yaml / .yml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Game mode used when no config is given
    #[arg(long, default_value = "standard")]
    mode: GameMode,

    /// Blue car count (defaults to the mode's team size)
    #[arg(long)]
    blue: Option<usize>,

    /// Orange car count (defaults to the mode's team size)
    #[arg(long)]
    orange: Option<usize>,

    /// Base seed; episode i uses seed + i
    #[arg(long)]
    seed: Option<u64>,
}

impl SceneArgs {
    fn load_config(&self) -> Result<EnvConfig> {
        match &self.config {
            Some(path) => EnvConfig::load(path)
                .with_context(|| format!("Failed to load config: {}", path.display())),
            None => Ok(EnvConfig::for_game_mode(self.mode)),
        }
    }

    fn roster(&self, config: &EnvConfig) -> (usize, usize) {
        let n = config.game_mode.team_size();
        (self.blue.unwrap_or(n), self.orange.unwrap_or(n))
    }

    fn base_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

fn setter_by_name(name: &str, config: &EnvConfig) -> Result<Box<dyn StateSetter>> {
    if name == "weighted" {
        let selector = config.build_state_setter()?;
        debug!("Selector table: {:?}", config.selector_weights().entries());
        return Ok(Box::new(selector));
    }
    config.scenario(name).ok_or_else(|| anyhow!("Unknown setter: {}", name))
}

fn run_episode(setter: &dyn StateSetter, blue: usize, orange: usize, seed: u64) -> Result<GameState> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut arena = SnapshotArena::with_cars(blue, orange);
    let state = setter.reset_state(&mut arena, &mut rng)?;
    debug!("Episode seed {} reset with {}", seed, setter.name());
    Ok(state)
}

#[derive(Serialize)]
struct PlayerObs {
    car_id: u32,
    team: String,
    obs: Vec<f32>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    match cli.command {
        Commands::ObsSize { team_size } => {
            let padder = AdvancedObsPadder::new(team_size, false)?;
            println!("{}", padder.obs_size());
        }

        Commands::Sample { scene, episodes, parallel, out } => {
            let config = scene.load_config()?;
            let setter = setter_by_name(&scene.setter, &config)?;
            let (blue, orange) = scene.roster(&config);
            let seed = scene.base_seed();

            info!(
                "Sampling {} episode(s) of {} ({}v{}, seed {})",
                episodes,
                setter.name(),
                blue,
                orange,
                seed
            );

            let states: Vec<GameState> = if parallel {
                (0..episodes as u64)
                    .into_par_iter()
                    .map(|i| run_episode(setter.as_ref(), blue, orange, seed.wrapping_add(i)))
                    .collect::<Result<_>>()?
            } else {
                (0..episodes as u64)
                    .map(|i| run_episode(setter.as_ref(), blue, orange, seed.wrapping_add(i)))
                    .collect::<Result<_>>()?
            };

            let json = serde_json::to_string_pretty(&states)?;
            match out {
                Some(path) => {
                    fs::write(&path, json)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!("Wrote {} state(s) to {}", states.len(), path.display());
                }
                None => println!("{json}"),
            }
        }

        Commands::Observe { scene } => {
            let config = scene.load_config()?;
            let setter = setter_by_name(&scene.setter, &config)?;
            let mut padder = config.build_obs_builder()?;
            let (blue, orange) = scene.roster(&config);

            let state = run_episode(setter.as_ref(), blue, orange, scene.base_seed())?;
            padder.reset(&state);

            let obs: Vec<PlayerObs> = state
                .players
                .iter()
                .map(|p| PlayerObs {
                    car_id: p.car_id,
                    team: format!("{:?}", p.team),
                    obs: padder.build_obs(p, &state, &Action::default()),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&obs)?);
        }

        Commands::Config { preset, json } => {
            let config = EnvConfig::for_game_mode(preset);
            if json {
                println!("{}", config.to_json_string()?);
            } else {
                print!("{}", config.to_yaml_string()?);
            }
        }
    }

    Ok(())
}
