//! CLI module for Unburden
//!
//! Command-line argument parsing for the companion binary.

pub mod args;

pub use args::{Args, Commands, Verbosity};
