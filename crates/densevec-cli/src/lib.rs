//! Library half of the `densevec` command-line tool.
//!
//! Each subcommand is a plain function in [`commands`] so it can be driven
//! from tests without spawning the binary.
pub mod commands;
pub mod config;
