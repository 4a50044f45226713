use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;

use connect_four::config::AppConfig;
use connect_four::console::TerminalConsole;
use connect_four::error::GameError;
use connect_four::session::run_app;

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect_four", about = "Play Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Number of human players (1 or 2); asked at startup when omitted
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    players: Option<u8>,

    /// Seed for the computer opponent
    #[arg(long)]
    seed: Option<u64>,

    /// Pause before each computer move, in milliseconds
    #[arg(long)]
    bot_delay_ms: Option<u64>,

    /// Draw the board without colors
    #[arg(long)]
    no_color: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(cli.log_level)
        .init();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(players) = cli.players {
        config.players.count = Some(players);
    }
    if let Some(seed) = cli.seed {
        config.bot.seed = Some(seed);
    }
    if let Some(delay_ms) = cli.bot_delay_ms {
        config.bot.delay_ms = delay_ms;
    }
    if cli.no_color {
        config.display.color = false;
    }
    config.validate().context("validating command line overrides")?;
    debug!(?config, "configuration loaded");

    let mut console = TerminalConsole::stdio(&config.display);
    match run_app(&mut console, &config) {
        Ok(tally) => {
            debug!(?tally, "all games played");
            Ok(())
        }
        // Closing stdin is how a player walks away mid-game
        Err(GameError::InputClosed) => Ok(()),
        Err(err) => Err(err).context("running the game"),
    }
}
