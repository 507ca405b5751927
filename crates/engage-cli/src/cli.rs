use clap::Parser;

/// Engage — realtime conversation polling demo.
#[derive(Parser, Debug)]
#[command(name = "engage", version, about)]
pub struct Args {
    /// Base URL of the realtime endpoint.
    #[arg(long, default_value = "http://localhost:4000")]
    pub base_url: String,

    /// Conversation id to poll.
    #[arg(short = 'c', long)]
    pub conversation: String,

    /// Config snapshot path (JSON). Defaults to a snapshot with realtime
    /// enabled so the demo runs without a file.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
