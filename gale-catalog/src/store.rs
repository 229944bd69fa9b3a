//! Whole-document persistence for `games.json` and the canonical sort rule.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

use crate::error::CatalogError;
use crate::layout::{AsciiFormatter, KeyOrder};
use crate::slug::derive_slug;
use crate::types::GameRecord;

/// Loads and saves the catalog document at a fixed path.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and validate the whole catalog.
    ///
    /// Any structural problem is fatal: the catalog is the single source of
    /// truth, so a malformed document is reported rather than repaired.
    pub fn load(&self) -> Result<Vec<GameRecord>, CatalogError> {
        let contents = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        parse_catalog(&contents).map_err(|reason| CatalogError::malformed(self.display(), reason))
    }

    /// Sort `records` into canonical order and replace the document with them.
    ///
    /// The document is written to a sibling temp file first and renamed into
    /// place, so a failed write leaves the previous catalog intact.
    pub fn save(&self, records: &mut [GameRecord]) -> Result<(), CatalogError> {
        sort_catalog(records);
        let serialized = to_pretty_json(records)?;

        let tmp = self.temp_path();
        fs::write(&tmp, serialized).map_err(|e| self.io_error(e))?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(self.io_error(e));
        }

        log::debug!("Wrote {} records to {}", records.len(), self.display());
        Ok(())
    }

    /// Add a record to the catalog and save it in canonical order.
    ///
    /// A missing slug is derived from the name first. A slug that another
    /// record already uses is rejected and the document is left untouched.
    pub fn append(&self, record: GameRecord) -> Result<GameRecord, CatalogError> {
        let record = derive_slug_if_absent(record);
        let mut records = self.load()?;

        let slug = record.effective_slug();
        if let Some(existing) = records.iter().find(|r| r.effective_slug() == slug) {
            return Err(CatalogError::SlugCollision {
                slug: slug.into_owned(),
                name: existing.name.clone(),
            });
        }

        records.push(record.clone());
        self.save(&mut records)?;
        log::debug!("Appended '{}' to {}", record.name, self.display());
        Ok(record)
    }

    /// Rewrite the catalog in canonical order. Returns the number of records.
    pub fn sort(&self) -> Result<usize, CatalogError> {
        let mut records = self.load()?;
        self.save(&mut records)?;
        Ok(records.len())
    }

    /// Effective slug of every record, in catalog order.
    pub fn slugs(&self) -> Result<Vec<String>, CatalogError> {
        Ok(self
            .load()?
            .iter()
            .map(|r| r.effective_slug().into_owned())
            .collect())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn display(&self) -> String {
        self.path.display().to_string()
    }

    fn io_error(&self, source: std::io::Error) -> CatalogError {
        CatalogError::Io {
            path: self.display(),
            source,
        }
    }
}

/// Canonical catalog order: popular games first, then by name.
///
/// Names compare by codepoint, not locale. Combined with a stable sort, records
/// with equal keys keep their relative order.
pub fn canonical_order(a: &GameRecord, b: &GameRecord) -> Ordering {
    b.is_popular()
        .cmp(&a.is_popular())
        .then_with(|| a.name.cmp(&b.name))
}

pub fn sort_catalog(records: &mut [GameRecord]) {
    records.sort_by(canonical_order);
}

/// Fill in `slug` from the name when it is missing or empty.
pub fn derive_slug_if_absent(mut record: GameRecord) -> GameRecord {
    if record.slug.as_deref().is_none_or(str::is_empty) {
        record.slug = Some(derive_slug(&record.name));
    }
    record
}

/// Slugs claimed by more than one record, with the names that claim them.
pub fn find_slug_collisions(records: &[GameRecord]) -> Vec<(String, Vec<String>)> {
    let mut by_slug: HashMap<String, Vec<String>> = HashMap::new();
    let mut order = Vec::new();

    for record in records {
        let slug = record.effective_slug().into_owned();
        let names = by_slug.entry(slug.clone()).or_insert_with(|| {
            order.push(slug);
            Vec::new()
        });
        names.push(record.name.clone());
    }

    order
        .into_iter()
        .filter_map(|slug| {
            let names = by_slug.remove(&slug)?;
            (names.len() > 1).then_some((slug, names))
        })
        .collect()
}

/// Validate the document shape element by element, then decode it.
fn parse_catalog(contents: &str) -> Result<Vec<GameRecord>, String> {
    let doc: Value = serde_json::from_str(contents).map_err(|e| format!("invalid JSON: {e}"))?;
    let items = match doc {
        Value::Array(items) => items,
        other => return Err(format!("expected a JSON array, found {}", json_kind(&other))),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| -> Result<GameRecord, String> {
            let Some(obj) = item.as_object() else {
                return Err(format!("entry {i} is {}, not an object", json_kind(&item)));
            };
            match obj.get("name") {
                Some(Value::String(name)) if !name.is_empty() => {}
                Some(Value::String(_)) => return Err(format!("entry {i} has an empty name")),
                Some(_) => return Err(format!("entry {i} has a non-string name")),
                None => return Err(format!("entry {i} has no name")),
            }
            let mut record: GameRecord = serde_json::from_value(item.clone()).map_err(|e| {
                let name = obj.get("name").and_then(Value::as_str).unwrap_or_default();
                format!("entry {i} ('{name}'): {e}")
            })?;
            record.layout = KeyOrder::of(&item);
            Ok(record)
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Pretty JSON with 4-space indentation, ASCII-only, no trailing newline.
/// Each record keeps the key order it was loaded with.
fn to_pretty_json(records: &[GameRecord]) -> Result<Vec<u8>, CatalogError> {
    let values = records
        .iter()
        .map(|record| -> Result<Value, serde_json::Error> {
            Ok(record.layout.apply(serde_json::to_value(record)?))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, AsciiFormatter::new());
    values.serialize(&mut ser)?;
    Ok(buf)
}
