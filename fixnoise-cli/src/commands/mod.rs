//! Subcommand implementations.

pub mod sample;
pub mod tables;
