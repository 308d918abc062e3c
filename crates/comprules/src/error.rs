//! CLI error types.

use comprules_config::ConfigError;
use comprules_page::PageError;
use comprules_parser::StructureError;
use comprules_source::SourceError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Source(#[from] SourceError),

    #[error("{0}")]
    Structure(#[from] StructureError),

    #[error("{0}")]
    Page(#[from] PageError),
}
