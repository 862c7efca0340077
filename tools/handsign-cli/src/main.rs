//! Handsign CLI: offline gesture classification of recorded hand detections.
//!
//! Usage:
//!   handsign replay <PATH>       Classify a recorded detection stream
//!   handsign profile <NAME>      Print a built-in classifier profile
//!   handsign check <FILE>        Validate a classifier profile file
//!   handsign synth <SCENARIO>    Generate a synthetic detection stream

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use handsign_common::config::AppConfig;

mod commands;

#[derive(Parser)]
#[command(
    name = "handsign",
    about = "Hand gesture classification from landmark detections",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a recorded detection stream (JSONL)
    Replay {
        /// Path to the detection stream
        path: PathBuf,

        /// Built-in profile name (video|live) or path to a profile JSON file
        #[arg(short, long)]
        profile: Option<String>,

        /// Only check the newest frame pair for stillness
        #[arg(long)]
        last_pair: bool,

        /// Print only frames where the label changes
        #[arg(long)]
        changes_only: bool,

        /// Emit one JSON object per line instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print a built-in classifier profile as JSON
    Profile {
        /// Profile name: video|live
        #[arg(default_value = "live")]
        name: String,
    },

    /// Validate a classifier profile file
    Check {
        /// Path to the profile JSON file
        path: PathBuf,
    },

    /// Generate a synthetic detection stream (JSONL) on stdout or to a file
    Synth {
        /// Scenario name, e.g. palm-open, sweep-left, pressed-palms
        scenario: String,

        /// Number of frames to generate
        #[arg(short, long, default_value = "8")]
        frames: usize,

        /// Hand to generate: left|right
        #[arg(long, default_value = "right")]
        hand: String,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load();

    // Initialize logging
    let mut logging = config.logging.clone();
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    handsign_common::logging::init_logging(&logging)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    match cli.command {
        Commands::Replay {
            path,
            profile,
            last_pair,
            changes_only,
            json,
        } => commands::replay::run(
            path,
            profile.unwrap_or(config.default_profile),
            last_pair,
            changes_only,
            json,
        ),
        Commands::Profile { name } => commands::profile::run(name),
        Commands::Check { path } => commands::check::run(path),
        Commands::Synth {
            scenario,
            frames,
            hand,
            output,
        } => commands::synth::run(scenario, frames, hand, output),
    }
}
