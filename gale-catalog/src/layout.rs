//! Byte-level layout of `games.json`.
//!
//! Typed records serialize their fields in declaration order. To rewrite the
//! document without reshuffling every entry, the key order of each loaded
//! object is captured as a [`KeyOrder`] and reapplied to the serialized value.
//! [`AsciiFormatter`] writes the same text the catalog has always had:
//! 4-space indentation with non-ASCII escaped as `\uXXXX`.

use std::io::{self, Write};

use serde_json::ser::{Formatter, PrettyFormatter};
use serde_json::{Map, Value};

/// The authored key order of a JSON object and of the objects nested in it.
///
/// Layout is not part of a record's value: two `KeyOrder`s always compare
/// equal.
#[derive(Debug, Clone, Default)]
pub struct KeyOrder {
    keys: Vec<KeyEntry>,
}

#[derive(Debug, Clone)]
struct KeyEntry {
    key: String,
    /// The key was written as an explicit `null`.
    null: bool,
    nested: KeyOrder,
}

impl KeyOrder {
    /// Record the key order of `value`. Non-objects have no layout.
    pub fn of(value: &Value) -> Self {
        let Value::Object(map) = value else {
            return Self::default();
        };
        Self {
            keys: map
                .iter()
                .map(|(key, v)| KeyEntry {
                    key: key.clone(),
                    null: v.is_null(),
                    nested: Self::of(v),
                })
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Reorder the keys of `value` to follow this layout.
    ///
    /// Recorded keys come first, in recorded order. Keys the layout doesn't
    /// know follow in their current order. A recorded explicit `null` that
    /// `value` lacks is written back as `null`.
    pub fn apply(&self, value: Value) -> Value {
        let Value::Object(map) = value else {
            return value;
        };
        if self.is_empty() {
            return Value::Object(map);
        }

        let mut rest: Vec<(String, Value)> = map.into_iter().collect();
        let mut out = Map::with_capacity(rest.len());
        for entry in &self.keys {
            if let Some(pos) = rest.iter().position(|(key, _)| *key == entry.key) {
                let (key, v) = rest.remove(pos);
                out.insert(key, entry.nested.apply(v));
            } else if entry.null {
                out.insert(entry.key.clone(), Value::Null);
            }
        }
        out.extend(rest);
        Value::Object(out)
    }
}

impl PartialEq for KeyOrder {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

/// Pretty printer with 4-space indentation that escapes everything outside
/// printable ASCII as `\uXXXX` (UTF-16 units, lowercase hex).
pub struct AsciiFormatter<'a> {
    pretty: PrettyFormatter<'a>,
}

impl AsciiFormatter<'_> {
    pub fn new() -> Self {
        Self {
            pretty: PrettyFormatter::with_indent(b"    "),
        }
    }
}

impl Default for AsciiFormatter<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for AsciiFormatter<'_> {
    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_array(writer)
    }

    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        self.pretty.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object(writer)
    }

    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        self.pretty.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object_value(writer)
    }

    // Control characters, quotes and backslashes are escaped by serde_json
    // before fragments get here.
    fn write_string_fragment<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut start = 0;
        for (i, ch) in fragment.char_indices() {
            if matches!(ch, ' '..='~') {
                continue;
            }
            writer.write_all(fragment[start..i].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = i + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}
