use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for placesdb
#[derive(Debug, Parser)]
#[command(
    name = "placesdb",
    version,
    about = "Look up US places by name and state in a prefix index"
)]
pub struct CliArgs {
    /// Path to the fixed-width places file (plain or .gz)
    #[arg(short = 'i', long = "input", global = true, env = "PLACESDB_INPUT")]
    pub input: Option<PathBuf>,

    /// Expected number of places, used to pre-size the index
    #[arg(long = "capacity-hint", global = true, default_value_t = 25_000)]
    pub capacity_hint: usize,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the index contents
    Stats,

    /// Look up a place by name or name prefix
    Lookup {
        /// Place name or prefix (case-insensitive)
        name: String,

        /// Two-letter state code to narrow same-named places
        #[arg(short, long)]
        state: Option<String>,
    },

    /// Find the place closest to a coordinate
    Near {
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        long: f64,
    },
}
