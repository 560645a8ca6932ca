//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for replymate
#[derive(Parser, Debug)]
#[command(name = "replymate")]
#[command(version, about = "Drafts polite auto-replies for missed calls and messages")]
#[command(long_about = r#"
replymate asks a hosted model to draft a short, friendly auto-reply for a
situation you describe ("my boss called while I'm on vacation").

Without arguments it opens an interactive chat; with a scenario argument it
prints a single drafted reply and exits.

The GEMINI_API_KEY environment variable must be set.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./replymate.toml    Project-level config
3. ~/.config/replymate/config.toml   Global config

Example:
  replymate
  replymate "A friend sent a WhatsApp message asking to borrow money."
  replymate -m gemini-2.5-pro --chat
"#)]
pub struct Cli {
    /// Scenario to draft a single reply for (omit to start chat mode)
    pub scenario: Option<String>,

    /// Start interactive chat mode even when a scenario is given
    #[arg(short, long)]
    pub chat: bool,

    /// Model to use
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the progress spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,
}
