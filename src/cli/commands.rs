//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "moodmix")]
#[command(about = "Mood journal that turns each entry into a playlist", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Write a new entry and generate its mix
    New {
        /// Entry title
        #[arg(short, long, default_value = "")]
        title: String,

        /// Entry body (opens the editor when omitted)
        #[arg(short, long)]
        content: Option<String>,
    },

    /// Show the timeline, newest first
    List {
        /// Maximum number of entries to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show an entry and its playlist (latest when no id is given)
    Show {
        /// Entry id
        id: Option<String>,
    },

    /// Delete an entry
    Delete {
        /// Entry id
        id: String,

        /// Also remove an unreadable entry whose owner cannot be recovered
        #[arg(long)]
        force: bool,
    },

    /// Delete all of your entries
    Clear {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },

    /// Show how your mood has moved over time
    Stats,

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
