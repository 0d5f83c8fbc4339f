use clap::Parser;

/// Homedeck, a dashboard shell hosting web panels in one window.
#[derive(Parser, Debug)]
#[command(name = "homedeck", version, about)]
pub struct Args {
    /// Config file path override (default: ./config.yml).
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
