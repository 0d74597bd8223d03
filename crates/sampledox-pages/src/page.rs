//! Page model and identifier derivation.
//!
//! Page identifiers are the link currency of the generated document: the
//! index section references each sample page by id, and Doxygen resolves
//! those references against the `\page` declarations in the body sections.

use std::path::{Path, PathBuf};

/// A discovered sample with its derived documentation page.
///
/// Built once during discovery and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamplePage {
    /// Path to the sample's source file, exactly as it appears in the
    /// rendered `\include` directive.
    pub source_path: PathBuf,
    /// Unique page identifier linking the index entry to the body section.
    pub page_id: String,
    /// Page title (the sample directory's base name).
    pub title: String,
}

impl SamplePage {
    /// Create a page for the sample directory `sample_name`.
    ///
    /// The page id is `<index_id>_<sample_name>`, unique per run because
    /// sample directory names are unique within the sample root.
    #[must_use]
    pub fn new(index: &IndexPage, sample_name: &str, source_path: PathBuf) -> Self {
        Self {
            source_path,
            page_id: format!("{}_{sample_name}", index.id),
            title: sample_name.to_owned(),
        }
    }
}

/// The top-level index page, derived from the output file's base name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexPage {
    /// Page identifier (output base name with the extension stripped).
    pub id: String,
    /// Human-readable title (underscores replaced by spaces).
    pub title: String,
}

impl IndexPage {
    /// Derive the index page from the output file path.
    ///
    /// Returns `None` if the path has no usable base name (e.g. `..` or a
    /// bare directory separator).
    #[must_use]
    pub fn from_output_path(output_file: &Path) -> Option<Self> {
        let stem = output_file.file_stem()?.to_str()?;
        if stem.is_empty() {
            return None;
        }
        Some(Self {
            id: stem.to_owned(),
            title: stem.replace('_', " "),
        })
    }
}
