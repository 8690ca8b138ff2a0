use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "showforge")]
#[command(author, version, about = "Release-name parser for episodic video")]
pub struct Cli {
    /// Path to a JSON library file with known series and episodes
    #[arg(short, long, global = true)]
    pub library: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a release title
    Parse {
        /// Release title to parse
        #[arg(required = true)]
        title: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Parse a file path, using the directory name as fallback context
    ParsePath {
        /// Path to parse
        #[arg(required = true)]
        path: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Extract just the release group from a title
    Group {
        /// Release title to inspect
        #[arg(required = true)]
        title: String,
    },

    /// Extract just the language from a title
    Language {
        /// Release title to inspect
        #[arg(required = true)]
        title: String,
    },

    /// Display version information
    Version,
}
