//! Terminal front end for the Jornada console RPG.

mod menu;
mod prompt;
mod render;
mod terminal;

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use jornada_engine::GameConfig;
use jornada_engine::config::DEFAULT_SAVE_PATH;

#[derive(Parser)]
#[command(
    name = "jornada",
    about = "Jornada: a turn-based console RPG with a persistent roster",
    version
)]
struct Cli {
    /// Save file for the roster
    #[arg(short, long, default_value = DEFAULT_SAVE_PATH)]
    save: PathBuf,

    /// RNG seed for reproducible sessions (default: random)
    #[arg(long)]
    seed: Option<u64>,

    /// Log filter for stderr, e.g. "info" or "jornada_engine=debug" (default: $RUST_LOG, then "warn")
    #[arg(long)]
    log_level: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    let mut config = GameConfig::default().with_save_path(cli.save);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    if let Err(e) = menu::run(&config) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(directives) => EnvFilter::try_new(directives).ok(),
        None => EnvFilter::try_from_default_env().ok(),
    }
    .unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
