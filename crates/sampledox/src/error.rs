//! CLI error types.

use sampledox_config::ConfigError;
use sampledox_pages::GenerateError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Generate(#[from] GenerateError),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}
