//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Cohort using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Cohort - CSV to MongoDB batch loader
#[derive(Parser, Debug)]
#[command(name = "cohort")]
#[command(version, about, long_about = None)]
#[command(author = "Cohort Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "cohort.toml", env = "COHORT_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "COHORT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load the CSV dataset into the target MongoDB collection
    Load(commands::load::LoadArgs),

    /// Validate the CSV dataset without writing anywhere
    Check(commands::check::CheckArgs),

    /// Show the target collection's document count
    Status(commands::status::StatusArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
