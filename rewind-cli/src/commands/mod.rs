//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod versions;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Show the version timeline of a job
    Versions {
        /// Job ID
        job_id: String,
    },
    /// Revert a job to an older version
    Revert {
        /// Job ID
        job_id: String,

        /// Version to revert to
        target_version: u64,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Versions { job_id } => versions::show_timeline(config, &job_id).await,
        Commands::Revert {
            job_id,
            target_version,
        } => versions::revert(config, &job_id, target_version).await,
    }
}
