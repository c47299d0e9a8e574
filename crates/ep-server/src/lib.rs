//! Event planner service library.
//!
//! This crate provides the CLI and HTTP interfaces over `ep_core`.

mod cli;
pub mod commands;
mod config;
pub mod http;

pub use cli::{Cli, Commands};
pub use config::Config;
