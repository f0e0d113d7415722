use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Env, Target};
use log::LevelFilter;
use snake_grid::game::{GameConfig, StopReason};
use snake_grid::modes::HumanMode;
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "snake_grid")]
#[command(version, about = "Classic Snake in the terminal")]
struct Cli {
    /// Game speed in ticks per second
    #[arg(long, default_value = "10", value_parser = clap::value_parser!(u32).range(1..))]
    speed: u32,

    /// Seed for fruit placement
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (the terminal is taken by the game)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        let config = GameConfig::new(self.speed);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

/// The TUI draws on stderr, so records only go to a file; without one
/// logging stays off whatever `RUST_LOG` says
fn logger_builder(log_file: Option<File>) -> env_logger::Builder {
    match log_file {
        Some(file) => {
            let mut builder =
                env_logger::Builder::from_env(Env::default().default_filter_or("snake_grid=debug"));
            builder.target(Target::Pipe(Box::new(file)));
            builder
        }
        None => {
            let mut builder = env_logger::Builder::new();
            builder.filter_level(LevelFilter::Off);
            builder
        }
    }
}

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let file = log_file
        .map(|path| {
            File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))
        })
        .transpose()?;
    logger_builder(file).init();
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let config = cli.game_config();
    log::info!("Starting with {:?}", config);

    let mut human_mode = HumanMode::new(config);
    human_mode.run().await?;

    let state = human_mode.state();
    match state.stop_reason() {
        Some(StopReason::Collision(collision)) => {
            println!("Game over ({:?})! Final score: {}", collision, state.score);
        }
        Some(StopReason::Quit) | None => {
            println!("Final score: {}", state.score);
        }
    }

    Ok(())
}
