//! Command-line argument definitions.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Event planner scheduling service.
///
/// Assigns events to rooms and suggests event itineraries for users, either
/// over HTTP or one request at a time from the command line.
#[derive(Debug, Parser)]
#[command(name = "ep", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP API (default when no subcommand is given).
    Serve {
        /// Address to bind, overriding the configured one.
        #[arg(long)]
        bind: Option<SocketAddr>,
    },

    /// Assign events to rooms from a JSON request and print the schedule.
    Schedule {
        /// Request file with `rooms` and `events` ("-" reads stdin).
        #[arg(long, short, default_value = "-")]
        input: PathBuf,
    },

    /// Generate suggestion paths from a JSON request and print them.
    Suggest {
        /// Request file with `events` and `users` ("-" reads stdin).
        #[arg(long, short, default_value = "-")]
        input: PathBuf,

        /// Group paths per user instead of printing one flat list.
        #[arg(long)]
        by_user: bool,
    },
}
