// src/cli.rs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "diary - A personal diary for the command line",
    long_about = "diary keeps dated entries in a local SQLite database. The first line of an entry is its title, the rest is its body."
)]
pub struct Cli {
    /// Database file to use. Overrides DIARY_DB and the default location.
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Creates the diary database if needed and prints its location.
    Init,

    /// Writes a new entry.
    /// If no text is given via -m, it opens the default editor.
    New {
        #[arg(short, long, help = "Entry text; the first line becomes the title")]
        message: Option<String>,
    },

    /// Lists all entries, oldest first.
    List,

    /// Shows a single entry.
    Show {
        #[arg(help = "Entry id or a unique prefix of it")]
        id: String,
    },

    /// Edits an existing entry. Without -m the entry opens in the default editor.
    Edit {
        #[arg(help = "Entry id or a unique prefix of it")]
        id: String,

        #[arg(short, long, help = "Replacement text; the first line becomes the title")]
        message: Option<String>,
    },

    /// Deletes an entry after asking twice.
    Del {
        #[arg(help = "Entry id or a unique prefix of it")]
        id: String,

        #[arg(short, long, help = "Skip both confirmation prompts")]
        yes: bool,
    },
}
