use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{info, warn};

use crate::deck::Hand;
use crate::search::{reachable_targets, solve, TARGET_COUNT};
use crate::sweep;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Countdown - solve numbers game puzzles and rank them by solvability
#[derive(Parser, Debug)]
#[command(name = "countdown")]
#[command(about = "Solve numbers game puzzles or sweep every possible hand")]
#[command(version)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Find an expression over six cards that reaches a target
    Solve {
        /// Target value to reach
        target: u64,
        /// The six card values
        #[arg(num_args = 6, required = true)]
        cards: Vec<u64>,
    },
    /// List every target in [100, 999] reachable from six cards
    Targets {
        /// The six card values
        #[arg(num_args = 6, required = true)]
        cards: Vec<u64>,
    },
    /// Sweep every possible hand and print solvability rankings
    Sweep,
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(&args.log_level)?;

    match args.command {
        Command::Solve { target, cards } => {
            let hand = parse_hand(&cards)?;
            if target == 0 {
                bail!("target must be a positive integer");
            }
            info!("searching for {} from cards {:?}", target, hand);
            let solution = solve(&hand, target);
            if !solution.is_solved() {
                warn!("search exhausted without reaching {}", target);
            }
            println!("{}", solution);
            Ok(())
        }
        Command::Targets { cards } => {
            let hand = parse_hand(&cards)?;
            let bitmap = reachable_targets(&hand);
            info!(
                "{} of {} targets reachable from {:?}",
                bitmap.count(),
                TARGET_COUNT,
                hand
            );
            for target in bitmap.iter() {
                println!("{}", target);
            }
            Ok(())
        }
        Command::Sweep => {
            let stats = sweep::run_sweep().context("hand enumeration failed")?;
            sweep::print_report(&stats);
            Ok(())
        }
    }
}

fn parse_hand(cards: &[u64]) -> Result<Hand> {
    let hand: Hand = cards
        .try_into()
        .context("exactly six card values are required")?;
    if hand.contains(&0) {
        bail!("card values must be positive integers");
    }
    Ok(hand)
}
