//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! Every flag is optional: running with no arguments performs the full
//! check sequence against the current directory.

use clap::Parser;
use std::path::PathBuf;

/// Checks that this machine is ready for the LangGraph notebook workshop.
#[derive(Debug, Parser)]
#[command(name = "workshop-check")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory holding the notebooks and .env (overrides current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Python interpreter the workshop runs on
    #[arg(long, env = "WORKSHOP_PYTHON")]
    pub python: Option<PathBuf>,

    /// Env file with API keys, relative to the project directory
    #[arg(long, default_value = ".env")]
    pub env_file: PathBuf,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
