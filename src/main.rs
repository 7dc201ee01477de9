use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use httpget::cli::Args;
use httpget::download::{self, Outcome};
use httpget::http::parser::ParseError;
use httpget::target::RequestTarget;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Stdout is reserved for the non-200 status line; diagnostics go to
    // stderr.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let target = match RequestTarget::new(&args.host, &args.port, &args.path) {
        Ok(target) => target,
        Err(e) => {
            error!("Invalid target: {e}");
            return ExitCode::FAILURE;
        }
    };

    let dest = PathBuf::from(target.output_filename());

    match download::fetch(&target, &dest).await {
        Ok(Outcome::Saved { .. }) => ExitCode::SUCCESS,
        Ok(Outcome::NotOk { status_line, .. }) => {
            // Non-200 responses are reported, not treated as client
            // failures.
            println!("{status_line}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            if let Some(ParseError::MissingContentLength) = e.downcast_ref::<ParseError>() {
                println!("Could not download the requested file (content length unknown)");
            }
            error!("Download failed: {e:#}");
            ExitCode::FAILURE
        }
    }
}
