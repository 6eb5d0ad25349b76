//! CLI module for the `chainrag` binary
//!
//! Command line argument parsing, command handlers, and output
//! formatting.

pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::*;
pub use handlers::*;
pub use output::*;
