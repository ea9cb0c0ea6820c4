//! Command-line argument definitions for the Dockyard CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the share link, the extra docks and
//! storage to add, the output path, configuration file, and logging
//! verbosity.

use clap::Parser;

/// Command-line arguments for the Dockyard blueprint tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Station-calculator share link
    #[arg(help = "Share link copied from the station calculator")]
    pub link: String,

    /// Number of medium trade docks to add
    #[arg(long, default_value_t = 0)]
    pub docks: u32,

    /// Number of large-ship piers to add
    #[arg(long, default_value_t = 0)]
    pub piers: u32,

    /// Number of large container storage modules to add
    #[arg(long, default_value_t = 0)]
    pub container_storage: u32,

    /// Number of large solid storage modules to add
    #[arg(long, default_value_t = 0)]
    pub solid_storage: u32,

    /// Number of large liquid storage modules to add
    #[arg(long, default_value_t = 0)]
    pub liquid_storage: u32,

    /// Faction style for docks, piers and storage (argon, paranid, teladi, split, terran)
    #[arg(long, default_value = "argon")]
    pub culture: String,

    /// Plan name shown in the game
    #[arg(long, default_value = "Imported Plan")]
    pub name: String,

    /// Path to the output XML file [default: <plan name>.xml]
    #[arg(short, long)]
    pub output: Option<String>,

    /// Overwrite the output file if it already exists
    #[arg(long)]
    pub force: bool,

    /// Layout engine (attach, grid); overrides the configuration file
    #[arg(long)]
    pub engine: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
