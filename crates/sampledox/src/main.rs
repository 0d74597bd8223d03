//! sampledox CLI - Doxygen sample index generator.
//!
//! Scans a directory of sample programs and writes a `.dox` file linking a
//! top-level index page to one page per sample, then echoes the written
//! file to stdout for inspection in build pipelines.

mod error;
mod generate;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use generate::GenerateArgs;
use output::Output;

/// sampledox - Doxygen sample index generator.
#[derive(Parser)]
#[command(name = "sampledox", version, about)]
struct Cli {
    #[command(flatten)]
    args: GenerateArgs,

    /// Enable info-level logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // Initialize tracing with appropriate log level
    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    // Log to stderr: stdout carries the echoed document
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Reproduced verbatim in the output header
    let invocation = std::env::args().collect::<Vec<_>>().join(" ");

    if let Err(err) = cli.args.execute(&invocation) {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
