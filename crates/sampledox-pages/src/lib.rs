//! Sample discovery and Doxygen index rendering.
//!
//! This crate provides:
//! - [`SampleScanner`]: discovers sample subdirectories containing a
//!   same-named source file
//! - [`DoxRenderer`]: renders the `.dox` document linking an index page to
//!   one page per sample
//! - [`DoxGenerator`]: the one-shot scan/render/write/read-back pipeline
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::PathBuf;
//! use sampledox_pages::DoxGenerator;
//!
//! let generator = DoxGenerator::new(
//!     PathBuf::from("samples"),
//!     PathBuf::from("docs/Samples.dox"),
//!     "cpp".to_owned(),
//!     "sampledox -s samples -o docs/Samples.dox",
//! );
//!
//! // Writes docs/Samples.dox and returns its contents for echoing
//! let document = generator.generate()?;
//! print!("{document}");
//! # Ok(())
//! # }
//! ```

pub(crate) mod generator;
pub(crate) mod page;
pub(crate) mod renderer;
pub(crate) mod scanner;

pub use generator::{DoxGenerator, GenerateError};
pub use page::{IndexPage, SamplePage};
pub use renderer::DoxRenderer;
pub use scanner::{SampleScanner, ScanError};
