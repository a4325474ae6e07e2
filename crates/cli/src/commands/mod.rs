//! CLI subcommand implementations.

pub mod points;
