//! Game icon normalization: every icon becomes a WebP no larger than
//! 256×256, named after the game's slug.

pub mod error;
pub mod normalize;

pub use error::IconError;
pub use normalize::{
    CANONICAL_EXTENSION, DirReport, IconOutcome, IconProgress, SOURCE_EXTENSIONS, THUMBNAIL_SIZE,
    find_icon, list_icons, normalize_dir, normalize_dir_entry, normalize_icon,
    thumbnail_dimensions,
};
