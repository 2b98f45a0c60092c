//! CLI argument definitions.

use apex_legends_api::{Action, ApiConfig, Identity, Platform};
use apex_legends_api::client::{API_KEY_ENV_VAR, BASE_URL_ENV_VAR, DEFAULT_BASE_URL};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::time::Duration;

/// Apex Legends player stats, match history and origin lookups.
#[derive(Debug, Parser)]
#[command(name = "apexctl", version, about)]
pub struct Cli {
    /// API key (or set `APEX_API_KEY`).
    #[arg(long, env = API_KEY_ENV_VAR, hide_env_values = true)]
    pub api_key: String,

    /// Host serving `/bridge` and `/origin`.
    #[arg(long, env = BASE_URL_ENV_VAR, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,

    /// How results are printed.
    #[arg(long, short, value_enum, default_value_t = Output::Text)]
    pub output: Output,

    /// Log requests (overridden by `APEX_LOG`).
    #[arg(long, short)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout),
            ..ApiConfig::new(self.api_key.clone())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Output {
    /// Indented outline.
    Text,
    /// Field names only.
    Schema,
    /// Pretty-printed JSON.
    Json,
}

/// A player on a platform, by name or by uid.
#[derive(Debug, Args)]
pub struct Target {
    /// Player name, or uid with `--uid`.
    pub player: String,

    /// X1 | PS4 | PC (XBOX and PSN also accepted).
    #[arg(long, short, default_value = "PC")]
    pub platform: Platform,

    /// Treat `player` as a platform uid.
    #[arg(long)]
    pub uid: bool,
}

impl Target {
    pub fn identity(&self) -> Identity {
        if self.uid {
            Identity::uid(self.player.as_str())
        } else {
            Identity::name(self.player.as_str())
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Raw basic stats records.
    Stats {
        #[command(flatten)]
        target: Target,

        /// Ask the service not to compute tracker ranks.
        #[arg(long)]
        skip_rank: bool,
    },

    /// Raw match history records for a tracking action.
    Events {
        #[command(flatten)]
        target: Target,

        /// info | get | add | delete
        #[arg(long, short, default_value = "get")]
        action: Action,
    },

    /// Origin account behind a PC player name.
    Origin {
        player: String,

        /// Search and return every hit.
        #[arg(long)]
        all_hits: bool,
    },

    /// Stats plus match history, mapped into a player.
    Player {
        #[command(flatten)]
        target: Target,
    },

    /// Every identity tracked under the API key.
    Tracked,

    /// Stop tracking every identity. Cannot be undone.
    Purge {
        /// Confirm the purge.
        #[arg(long)]
        yes: bool,
    },
}
