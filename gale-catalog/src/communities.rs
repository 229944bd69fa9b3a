//! Editing the `communities = [...]` list in `thunderstore.toml`.
//!
//! The file is edited line-wise instead of round-tripping through a TOML
//! serializer, so comments and layout outside the array stay untouched.
//! Entries are one quoted slug per line:
//!
//! ```text
//! communities = [
//!     "lethal-company",
//!     "risk-of-rain-2",
//! ]
//! ```

use crate::error::CommunitiesError;

const ARRAY_OPEN: &str = "communities = [";
const ENTRY_INDENT: &str = "    ";

fn entry_line(slug: &str) -> String {
    format!("{ENTRY_INDENT}\"{}\",", escape_basic(slug))
}

/// Escape `s` for use inside a TOML basic (double-quoted) string.
fn escape_basic(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if c.is_control() => out.push_str(&format!("\\u{:04X}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

/// Render slugs as a bare TOML array, one entry per line.
pub fn render_slug_array<S: AsRef<str>>(slugs: &[S]) -> String {
    let mut out = String::from("[\n");
    for slug in slugs {
        out.push_str(&entry_line(slug.as_ref()));
        out.push('\n');
    }
    out.push(']');
    out
}

/// Insert `slug` into the communities array, keeping existing entries in
/// place and putting the new one before the first entry that sorts after it.
///
/// Returns the document unchanged if the slug is already listed.
pub fn insert_community(contents: &str, slug: &str) -> Result<String, CommunitiesError> {
    let doc = CommunitiesDoc::parse(contents)?;
    let new_line = entry_line(slug);

    if doc.entries().iter().any(|line| line.trim() == new_line.trim()) {
        log::debug!("'{slug}' is already listed in communities");
        return Ok(contents.to_string());
    }

    let snapshot = doc.entries();
    let position = snapshot
        .iter()
        .position(|line| *line > new_line.as_str())
        .unwrap_or(snapshot.len());

    let mut entries: Vec<String> = Vec::with_capacity(snapshot.len() + 1);
    entries.extend(snapshot[..position].iter().map(|s| s.to_string()));
    entries.push(new_line);
    entries.extend(snapshot[position..].iter().map(|s| s.to_string()));

    Ok(doc.with_entries(&entries))
}

/// Replace the whole body of the communities array with `slugs`, in order.
pub fn replace_communities<S: AsRef<str>>(
    contents: &str,
    slugs: &[S],
) -> Result<String, CommunitiesError> {
    let doc = CommunitiesDoc::parse(contents)?;
    let entries: Vec<String> = slugs.iter().map(|s| entry_line(s.as_ref())).collect();
    Ok(doc.with_entries(&entries))
}

/// A document split around the communities array body.
struct CommunitiesDoc<'a> {
    lines: Vec<&'a str>,
    /// Index of the `communities = [` line.
    open: usize,
    /// Index of the closing `]` line.
    close: usize,
    trailing_newline: bool,
}

impl<'a> CommunitiesDoc<'a> {
    fn parse(contents: &'a str) -> Result<Self, CommunitiesError> {
        let lines: Vec<&str> = contents.lines().collect();
        let open = lines
            .iter()
            .position(|line| line.trim_end() == ARRAY_OPEN)
            .ok_or(CommunitiesError::MissingArray)?;
        let close = lines[open + 1..]
            .iter()
            .position(|line| line.trim() == "]")
            .map(|offset| open + 1 + offset)
            .ok_or(CommunitiesError::UnterminatedArray)?;

        Ok(Self {
            lines,
            open,
            close,
            trailing_newline: contents.ends_with('\n'),
        })
    }

    fn entries(&self) -> &[&'a str] {
        &self.lines[self.open + 1..self.close]
    }

    fn with_entries(&self, entries: &[String]) -> String {
        let mut out: Vec<&str> = Vec::with_capacity(self.lines.len() + entries.len());
        out.extend_from_slice(&self.lines[..=self.open]);
        out.extend(entries.iter().map(String::as_str));
        out.extend_from_slice(&self.lines[self.close..]);

        let mut text = out.join("\n");
        if self.trailing_newline {
            text.push('\n');
        }
        text
    }
}
