//! Main commands enum.
//!
//! This module defines the available commands for the CLI tool.

use std::path::PathBuf;

use clap::Subcommand;
use partscope_extract::ComponentFamily;

/// Available commands.
///
/// Commands that read datasheet text take an optional FILE and fall back
/// to stdin.
#[derive(Subcommand)]
pub enum Commands {
    /// Print the detected GPU memory
    Probe,

    /// List model files in the models directory
    Scan,

    /// Pick the model the AI engine would load on this machine
    Select {
        /// Preferred model (case-insensitive filename prefix)
        #[arg(short, long)]
        model: Option<String>,
        /// Assume this much VRAM in MB instead of probing
        #[arg(long)]
        vram: Option<u64>,
    },

    /// Classify datasheet text into a component family
    Classify {
        /// Component name, e.g. "2N3904"
        #[arg(short, long)]
        name: Option<String>,
        /// Text file to read (stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Extract specifications and metadata from datasheet text
    Extract {
        /// Component name, e.g. "2N3904"
        #[arg(short, long)]
        name: Option<String>,
        /// Skip classification and use this family's rules
        #[arg(short, long)]
        family: Option<ComponentFamily>,
        /// Print the full analysis as JSON
        #[arg(long)]
        json: bool,
        /// Text file to read (stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Summarize datasheet text on one line
    Summarize {
        /// Component name, e.g. "2N3904"
        #[arg(short, long)]
        name: Option<String>,
        /// Text file to read (stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Ask the local model a question
    Ask {
        /// The question to ask
        question: String,
        /// Preferred model (case-insensitive filename prefix)
        #[arg(short, long)]
        model: Option<String>,
        /// Datasheet text file to use as context
        #[arg(short, long)]
        context: Option<PathBuf>,
    },
}
