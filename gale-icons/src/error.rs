use std::path::PathBuf;

/// Errors that can occur while normalizing icons.
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Converting would overwrite a different file with the same stem.
    #[error("{} would overwrite existing {}", input.display(), target.display())]
    TargetExists { input: PathBuf, target: PathBuf },

    #[error("Not a supported icon format: {}", .0.display())]
    Unsupported(PathBuf),
}
