//! Command-line interface
//!
//! Argument parsing and the lint command entry point.

pub mod args;
pub mod commands;
