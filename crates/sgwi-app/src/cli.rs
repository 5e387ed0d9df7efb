use std::path::PathBuf;

use clap::Parser;

/// Ask questions about the multi-model SGWI paper from the terminal.
#[derive(Parser, Debug)]
#[command(name = "sgwi-chat", version, about)]
pub struct Args {
    /// Ask a single question, print the answer, and exit.
    #[arg(short = 'a', long)]
    pub ask: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. "sgwi=debug").
    #[arg(long)]
    pub log_level: Option<String>,

    /// Skip the assistant's introductory message.
    #[arg(long)]
    pub no_greeting: bool,

    /// Print the effective configuration as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
