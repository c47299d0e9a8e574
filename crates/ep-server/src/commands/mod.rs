//! CLI subcommand implementations.

pub mod schedule;
pub mod serve;
pub mod suggest;
mod util;
