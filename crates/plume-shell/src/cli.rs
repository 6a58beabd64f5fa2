use std::path::PathBuf;

use clap::Parser;

/// Plume, a desktop shell for the plume-core editing engine.
#[derive(Parser, Debug)]
#[command(name = "plume", version, about)]
pub struct Args {
    /// Files to open at startup.
    pub files: Vec<PathBuf>,

    /// Path to the core binary (overrides config and PLUME_CORE).
    #[arg(long)]
    pub core: Option<PathBuf>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. "plume=debug").
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
