use gale_catalog::{CatalogError, CommunitiesError};
use gale_icons::IconError;
use gale_lookup::LookupError;
use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Catalog(#[from] CatalogError),

    #[error("thunderstore.toml: {0}")]
    Communities(#[from] CommunitiesError),

    #[error("Lookup failed: {0}")]
    Lookup(#[from] LookupError),

    #[error("Icon error: {0}")]
    Icon(#[from] IconError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Some icons in a directory could not be normalized
    #[error("{0} icon(s) could not be converted")]
    IconFailures(usize),

    /// Input ended before the operator finished answering
    #[error("Aborted: no more input")]
    Aborted,
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
