//! Game catalog data model, slug derivation, and `games.json` persistence.
//!
//! The catalog is a single JSON array of game records. This crate owns the
//! record types, the name-to-slug transliteration, the canonical ordering
//! rule, and whole-document load/save. It also edits the communities list
//! in `thunderstore.toml`, which is derived from the catalog's slugs.

pub mod communities;
pub mod error;
pub mod layout;
pub mod slug;
pub mod store;
pub mod types;

pub use communities::{insert_community, render_slug_array, replace_communities};
pub use error::{CatalogError, CommunitiesError};
pub use layout::KeyOrder;
pub use slug::derive_slug;
pub use store::{
    CatalogStore, canonical_order, derive_slug_if_absent, find_slug_collisions, sort_catalog,
};
pub use types::*;
