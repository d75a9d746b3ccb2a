//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// workdesk - AI productivity task server
#[derive(Parser, Debug)]
#[command(name = "workdesk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API server
    Serve {
        /// Bind address (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Listen port (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Run a single task from the terminal
    Run {
        /// Task kind (speech, minutes, email, presentation, code-review,
        /// translate, quiz)
        task: String,

        /// Task input text (reads stdin when omitted and --file is unset)
        input: Option<String>,

        /// Read task input from a file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Output file (required for speech; optional elsewhere)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Synthesis language (speech) or target language (translate)
        #[arg(long)]
        language: Option<String>,

        /// Writing tone (email)
        #[arg(long)]
        tone: Option<String>,

        /// Recipient name (email)
        #[arg(long)]
        recipient: Option<String>,

        /// Topic (presentation)
        #[arg(long)]
        topic: Option<String>,

        /// Number of questions (quiz)
        #[arg(long)]
        count: Option<u32>,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
