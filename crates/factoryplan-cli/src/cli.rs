use clap::Parser;
use std::path::PathBuf;

/// Computes a minimum-cost factory production plan and renders it as DOT.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a factory config (.json, .yaml, or .yml)
    pub factory_config: PathBuf,

    /// Increase log verbosity to DEBUG
    #[arg(short, long)]
    pub verbose: bool,

    /// Write the rendered DOT document here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
