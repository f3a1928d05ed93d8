//! Command-line argument parsing for Unburden
//!
//! Provides clap-based CLI with one subcommand per generation mode.

use crate::types::{MoodAction, TimeOfDay, DEFAULT_QUICK_WIN_COUNT};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Unburden - a gentle companion backed by a hosted language model
#[derive(Parser, Debug)]
#[command(name = "unburden")]
#[command(version)]
#[command(about = "Empathetic chat, quick wins and affirmations from your terminal", long_about = None)]
pub struct Args {
    /// Configuration file path (~/.unburden/config.toml by default)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Model to use, overriding the configuration file
    #[arg(short, long, global = true)]
    pub model: Option<String>,

    /// Verbosity level: -q (quiet), default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (only print generated content)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Talk with the companion; starts an interactive session without MESSAGE
    Chat {
        #[arg(value_name = "MESSAGE")]
        message: Option<String>,
    },

    /// Respond to a mood button (better, distract, reflect)
    Mood {
        #[arg(value_name = "ACTION")]
        action: MoodAction,
    },

    /// Suggest small wellness tasks
    QuickWins {
        /// Number of tasks
        #[arg(short = 'n', long, default_value_t = DEFAULT_QUICK_WIN_COUNT)]
        count: usize,

        /// Time of day framing (morning, afternoon, evening)
        #[arg(short, long, default_value_t = TimeOfDay::Afternoon)]
        time_of_day: TimeOfDay,
    },

    /// Suggest three tasks tailored to how you feel
    PersonalizedWins {
        #[arg(value_name = "MOOD")]
        mood: String,

        /// Task already completed today (repeatable)
        #[arg(long = "done", value_name = "TASK")]
        completed: Vec<String>,
    },

    /// Show an inspirational message
    Affirmation {
        /// Use the richer premium prompt
        #[arg(long)]
        premium: bool,
    },

    /// Display current configuration
    Config,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }
}

impl Verbosity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "quiet",
            Verbosity::Normal => "normal",
            Verbosity::Verbose => "verbose",
            Verbosity::VeryVerbose => "very_verbose",
        }
    }

    /// Default tracing filter directive for this level
    pub fn log_filter(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "info",
            Verbosity::Verbose => "unburden=debug,info",
            Verbosity::VeryVerbose => "debug",
        }
    }

    /// Check if fallback hints should be printed
    pub fn show_source(&self) -> bool {
        !matches!(self, Verbosity::Quiet)
    }
}
