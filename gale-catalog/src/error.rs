use thiserror::Error;

/// Errors from loading, saving, or mutating the catalog document.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// The document is not a JSON array of well-formed game records.
    #[error("Malformed catalog {path}: {reason}")]
    MalformedCatalog { path: String, reason: String },

    #[error("Slug '{slug}' is already used by '{name}'")]
    SlugCollision { slug: String, name: String },

    #[error("Failed to serialize catalog: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CatalogError {
    pub fn malformed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedCatalog {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Errors from editing the `communities = [...]` array in `thunderstore.toml`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommunitiesError {
    #[error("No `communities = [` line found")]
    MissingArray,

    #[error("The communities array is never closed with `]`")]
    UnterminatedArray,
}
