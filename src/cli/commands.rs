//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "daymark")]
#[command(about = "Week-grouped day tracker", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long, global = true, value_name = "DATE")]
    pub as_of: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new tracker
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Cycle a day through empty, marked and unmarked
    Toggle {
        /// Day reference (e.g., today, yesterday, last monday, 2025-01-17)
        #[arg(default_value = "today")]
        day: String,
    },

    /// Set the state of a day
    Set {
        /// Day reference (e.g., today, yesterday, last monday, 2025-01-17)
        day: String,

        /// State: marked (P), unmarked (N) or empty (E)
        state: String,
    },

    /// Show the state of a day
    Get {
        /// Day reference (e.g., today, yesterday, last monday, 2025-01-17)
        #[arg(default_value = "today")]
        day: String,
    },

    /// Show weeks from the current one back to the earliest entry
    Weeks {
        /// Show at most N weeks
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// List recorded entries
    Entries {
        /// Only entries on or after this date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Only entries on or before this date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
    },

    /// Print the earliest recorded date
    Earliest,

    /// List every date between two dates, inclusive
    Days {
        /// First date (YYYY-MM-DD)
        start: String,

        /// Last date (YYYY-MM-DD)
        end: String,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
