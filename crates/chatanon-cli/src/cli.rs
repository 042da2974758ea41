use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chatanon")]
#[command(about = "Anonymize chat exports", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Anonymize an export and write cleaned messages plus the name mapping
    Run(RunArgs),

    /// Write a default config file
    Init {
        /// Where to write the config (default: user config dir)
        #[arg(long)]
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Redact a single piece of text and print the result
    Redact {
        /// Text to redact
        text: String,
    },
}

#[derive(Args)]
pub struct RunArgs {
    /// Config file (default: user config dir, if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Export JSON to read
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Where to write cleaned messages
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Where to write the real-name to pseudonym mapping
    #[arg(long)]
    pub mapping: Option<PathBuf>,

    /// Your own sender name in the export
    #[arg(long)]
    pub self_name: Option<String>,

    /// Pseudonym used for your own messages
    #[arg(long)]
    pub self_label: Option<String>,

    /// Mask names of all senders in every message, not only those seen so far
    #[arg(long)]
    pub full_document: bool,
}
