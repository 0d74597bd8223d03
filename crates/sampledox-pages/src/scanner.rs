//! Sample discovery by directory listing.
//!
//! Discovery is a single-level walk of the sample root: each immediate
//! child directory is a candidate sample, accepted only when it contains a
//! source file named after the directory. Rendering consumes the resulting
//! [`SamplePage`] list as-is, so the order fixed here (lexicographic by
//! directory name) governs both the index links and the body sections.

use std::fs;
use std::path::PathBuf;

use crate::page::{IndexPage, SamplePage};

/// Discovery error.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// Sample root directory does not exist or is not a directory.
    #[error("Sample folder not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error while listing the sample root.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Discovers sample pages under a sample root directory.
///
/// A sample is an immediate child directory containing `<name>.<extension>`.
/// Children without that file are skipped with no diagnostic, matching the
/// historical behavior of the build pipelines that consume the output.
pub struct SampleScanner {
    sample_dir: PathBuf,
    extension: String,
}

impl SampleScanner {
    /// Create a scanner for `sample_dir` looking for `.<extension>` sources.
    #[must_use]
    pub fn new(sample_dir: PathBuf, extension: String) -> Self {
        Self {
            sample_dir,
            extension,
        }
    }

    /// Scan the sample root and return pages in lexicographic name order.
    ///
    /// Page ids are derived from `index`, the top-level page the samples
    /// will be linked under.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::NotFound`] if the sample root does not exist and
    /// [`ScanError::Io`] if it cannot be listed.
    pub fn scan(&self, index: &IndexPage) -> Result<Vec<SamplePage>, ScanError> {
        if !self.sample_dir.is_dir() {
            return Err(ScanError::NotFound(self.sample_dir.clone()));
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.sample_dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            // Skip hidden entries
            if name.starts_with('.') {
                continue;
            }
            if entry.file_type()?.is_dir() {
                names.push(name);
            }
        }
        names.sort();

        let mut pages = Vec::new();
        for name in names {
            let source_path = self
                .sample_dir
                .join(&name)
                .join(format!("{name}.{}", self.extension));
            if source_path.is_file() {
                pages.push(SamplePage::new(index, &name, source_path));
            }
        }

        tracing::debug!(count = pages.len(), "discovered sample pages");
        Ok(pages)
    }
}
