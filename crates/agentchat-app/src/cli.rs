use std::path::PathBuf;

use clap::Parser;

/// agentchat: a terminal chat front end for a hosted agent.
#[derive(Parser, Debug)]
#[command(name = "agentchat", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Agent service base URL (overrides AGENT_API_ENDPOINT).
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print replies at once instead of word by word.
    #[arg(long)]
    pub no_typing: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
