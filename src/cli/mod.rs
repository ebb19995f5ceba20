//! Command-line interface
//!
//! Evaluates a role record exported from the identity store against
//! permissions or declared page gates, without touching the backend.

mod commands;

pub use commands::{execute, load_profile};

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Check Auzap console permissions for a role record
#[derive(Debug, Parser)]
#[command(name = "auzap-authz", version, about)]
pub struct Cli {
    /// YAML configuration file
    #[arg(short, long, env = "AUZAP_AUTHZ_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level directive, overrides the configuration
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit JSON logs
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check one or more permissions; exits non-zero unless all are granted
    Check {
        /// Profile record (`{"role": {"name": .., "permissions": [..]}}`), JSON or YAML
        #[arg(short, long)]
        profile: PathBuf,

        /// Permissions to check, e.g. `dashboard.read`
        #[arg(required = true)]
        permissions: Vec<String>,
    },
    /// Evaluate a page gate declared in the configuration
    Gate {
        #[arg(short, long)]
        profile: PathBuf,

        /// Gate name
        page: String,
    },
    /// Show the role, admin flags and permissions of a profile
    Whoami {
        #[arg(short, long)]
        profile: PathBuf,
    },
}
