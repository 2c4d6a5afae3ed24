//! # CLI Layer
//!
//! This module is **one possible UI client** for magpie. It is the only place
//! in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, stdin prompts)
//! - Handles argument parsing
//! - Formats output for human consumption
//! - Installs the `tracing` subscriber
//!
//! ## Structure
//!
//! - `setup`: clap definitions
//! - `commands`: `run()`, context setup and per-command handlers
//! - `print`: output formatting

mod commands;
mod print;
mod setup;

pub use commands::run;
