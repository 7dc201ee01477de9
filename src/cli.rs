//! Command-line definition.

use clap::Parser;

/// Single-shot HTTP/1.0 file download client.
///
/// Downloads http://HOST:PORT/PATH into the current directory, naming the
/// file after the final path segment (index.html for "/").
#[derive(Parser, Debug)]
#[command(name = "httpget", version)]
pub struct Args {
    /// Server hostname or IPv4 address
    pub host: String,

    /// Server TCP port (1-65535)
    pub port: String,

    /// Absolute request path, e.g. /files/report.txt
    pub path: String,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
