//! Sample index generation.

use std::io::Write as _;
use std::path::PathBuf;

use clap::Args;
use sampledox_config::{CliSettings, Config};
use sampledox_pages::DoxGenerator;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for sample index generation.
#[derive(Args)]
pub(crate) struct GenerateArgs {
    /// Root directory to scan for sample subdirectories (default: samples).
    #[arg(short, long)]
    sample_folder: Option<PathBuf>,

    /// Destination file; its base name seeds the index page id and title
    /// (default: docs/Samples.dox).
    #[arg(short, long)]
    output_file: Option<PathBuf>,

    /// Extension of the per-sample source file, without the dot
    /// (default: cpp).
    #[arg(short = 'e', long)]
    source_extension: Option<String>,

    /// Path to configuration file (default: auto-discover sampledox.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl GenerateArgs {
    /// Generate the index file and echo it to stdout.
    pub(crate) fn execute(self, invocation: &str) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            sample_dir: self.sample_folder,
            output_file: self.output_file,
            extension: self.source_extension,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let generator = DoxGenerator::new(
            config.samples.source_dir,
            config.output.file.clone(),
            config.samples.extension,
            invocation,
        );
        let document = generator.generate()?;

        // Echo the written file for inspection in build pipelines
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(document.as_bytes())?;
        stdout.flush()?;

        output.success(&format!("Wrote {}", config.output.file.display()));
        Ok(())
    }
}
