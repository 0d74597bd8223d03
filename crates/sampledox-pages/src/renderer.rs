//! Doxygen document assembly.

use std::fmt::Write as _;

use crate::page::{IndexPage, SamplePage};

/// Renders the `.dox` document consumed by Doxygen.
///
/// The directive layout, including blank-line placement, is a compatibility
/// contract with the downstream documentation build: each index entry is a
/// `\subpage` reference followed by a blank line, and each body section is a
/// `\page` declaration followed by a verbatim `\include` of the sample
/// source. The whole document lives inside one `/** ... */` comment block.
pub struct DoxRenderer {
    invocation: String,
}

impl DoxRenderer {
    /// Create a renderer that records `invocation` in the header comment.
    ///
    /// The invocation is reproduced verbatim inside a `\cond`/`\endcond`
    /// block so the file documents how to regenerate it without the text
    /// showing up in the rendered output.
    #[must_use]
    pub fn new(invocation: impl Into<String>) -> Self {
        Self {
            invocation: invocation.into(),
        }
    }

    /// Render the full document for `index` and its sample pages.
    ///
    /// An empty page list yields a document with the header and the
    /// top-level page declaration only.
    #[must_use]
    pub fn render(&self, index: &IndexPage, pages: &[SamplePage]) -> String {
        let mut doc = format!(
            "/**\n\\cond\nFile generate using `{}`\n\\endcond\n\\page {} {}\n",
            self.invocation, index.id, index.title
        );

        for page in pages {
            let _ = writeln!(doc, "\\subpage {}\n", page.page_id);
        }

        for page in pages {
            let _ = writeln!(
                doc,
                "\n\\page {} {}\n\\include {}",
                page.page_id,
                page.title,
                page.source_path.display()
            );
        }

        doc.push_str("*/");
        doc
    }
}
