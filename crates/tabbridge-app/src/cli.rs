use std::path::PathBuf;

use clap::Parser;

/// tabbridge: forwards browser tab events to a front-end over WebSocket.
#[derive(Parser, Debug)]
#[command(name = "tabbridge", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override, as a tracing directive (e.g. `tabbridge=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// WebSocket endpoint override (`ws://` or `wss://`).
    #[arg(long)]
    pub endpoint: Option<String>,

    /// URL for the first tab.
    #[arg(long)]
    pub url: Option<String>,

    /// JSON Lines engine script to replay. Reads stdin when omitted.
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// How long to wait for the socket before replaying, in milliseconds.
    #[arg(long, default_value_t = 1000)]
    pub connect_wait_ms: u64,
}

pub fn parse() -> Args {
    Args::parse()
}
