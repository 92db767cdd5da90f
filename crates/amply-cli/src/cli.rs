//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "amply", version, about = "Validate and send transactional email")]
pub struct Cli {
    /// Log at debug level unless `RUST_LOG` is set.
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the normalized request document for a JSON email file.
    Normalize {
        /// Email file (`-` for stdin).
        file: PathBuf,
        /// Print compact JSON.
        #[arg(long)]
        compact: bool,
    },
    /// Normalize a JSON email file and submit it.
    Send {
        /// Email file (`-` for stdin).
        file: PathBuf,
        #[command(flatten)]
        api: ApiArgs,
    },
}

#[derive(Args, Debug)]
pub struct ApiArgs {
    /// API access token.
    #[arg(long, env = "AMPLY_ACCESS_TOKEN", hide_env_values = true)]
    pub token: String,
    /// API base URL.
    #[arg(long, default_value = amply::DEFAULT_BASE_URL)]
    pub base_url: String,
    /// Request timeout in seconds.
    #[arg(long, default_value_t = 5)]
    pub timeout_secs: u64,
}
