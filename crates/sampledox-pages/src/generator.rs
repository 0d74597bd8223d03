//! End-to-end generation pipeline.

use std::fs;
use std::path::PathBuf;

use crate::page::IndexPage;
use crate::renderer::DoxRenderer;
use crate::scanner::{SampleScanner, ScanError};

/// Generation error.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// Sample discovery failed.
    #[error("{0}")]
    Scan(#[from] ScanError),
    /// Output path has no usable base name to derive the index page from.
    #[error("Invalid output file: {}", .0.display())]
    InvalidOutput(PathBuf),
    /// I/O error while writing or reading back the output file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// One-shot `.dox` generation: discover samples, render, write, read back.
pub struct DoxGenerator {
    sample_dir: PathBuf,
    output_file: PathBuf,
    extension: String,
    invocation: String,
}

impl DoxGenerator {
    /// Create a generator.
    ///
    /// `invocation` is embedded verbatim in the output header; callers pass
    /// the command line that produced the run.
    #[must_use]
    pub fn new(
        sample_dir: PathBuf,
        output_file: PathBuf,
        extension: String,
        invocation: impl Into<String>,
    ) -> Self {
        Self {
            sample_dir,
            output_file,
            extension,
            invocation: invocation.into(),
        }
    }

    /// Run the pipeline and return the written document for echoing.
    ///
    /// The sample root is scanned before the output file is opened, so a
    /// failed scan leaves any pre-existing output file untouched. The
    /// returned string is read back from disk rather than taken from the
    /// in-memory render, so the echo reflects what actually landed in the
    /// file.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidOutput`] if no index page id can be
    /// derived from the output path, [`GenerateError::Scan`] if the sample
    /// root cannot be listed, and [`GenerateError::Io`] if the output file
    /// cannot be written or read back.
    pub fn generate(&self) -> Result<String, GenerateError> {
        let index = IndexPage::from_output_path(&self.output_file)
            .ok_or_else(|| GenerateError::InvalidOutput(self.output_file.clone()))?;

        let scanner = SampleScanner::new(self.sample_dir.clone(), self.extension.clone());
        let pages = scanner.scan(&index)?;

        let document = DoxRenderer::new(self.invocation.as_str()).render(&index, &pages);
        fs::write(&self.output_file, &document)?;

        tracing::info!(
            output = %self.output_file.display(),
            pages = pages.len(),
            "wrote sample index"
        );

        Ok(fs::read_to_string(&self.output_file)?)
    }
}
