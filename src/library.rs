//! Compiled SVG library and its entries
//!
//! A [`Library`] is produced by [`compile`](crate::compile) and never mutated
//! afterwards. It can be written out as a JSON artifact at build time and
//! loaded back at process start:
//!
//! ```rust,ignore
//! static ICONS: &str = include_str!(concat!(env!("OUT_DIR"), "/icons.json"));
//!
//! let library = svg_inliner::Library::from_json(ICONS)?;
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::RenderError;
use crate::render::{render, Attributes};

/// Opening token every entry starts with (no closing `>`)
pub const OPEN_TAG: &str = "<svg";
/// Closing tag every entry ends with
pub const CLOSE_TAG: &str = "</svg>";

/// One parsed SVG file, split around the injection point for attributes
///
/// Only the inner content is stored; the surrounding tags are always
/// [`OPEN_TAG`] and [`CLOSE_TAG`], so a loaded artifact cannot change them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Entry {
    inner: String,
}

impl Entry {
    /// Create an entry from the content found between `<svg` and `</svg>`
    pub fn new(inner: impl Into<String>) -> Self {
        Self {
            inner: inner.into(),
        }
    }

    pub fn open_tag(&self) -> &str {
        OPEN_TAG
    }

    /// Everything after `<svg`, including the source tag's own attributes
    pub fn inner_content(&self) -> &str {
        &self.inner
    }

    pub fn close_tag(&self) -> &str {
        CLOSE_TAG
    }
}

/// Immutable table of SVG entries keyed by their path-derived name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Library {
    entries: BTreeMap<String, Entry>,
}

impl Library {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Get an entry by key
    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    /// Check if a key exists
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// All keys in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render an entry with the given attributes injected after `<svg`
    pub fn render<A: Into<Attributes>>(&self, key: &str, attrs: A) -> Result<String, RenderError> {
        render(self, key, attrs)
    }

    /// Render an entry, panicking if the key is missing
    ///
    /// Use this where a missing icon is a programming error.
    pub fn render_or_panic<A: Into<Attributes>>(&self, key: &str, attrs: A) -> String {
        match render(self, key, attrs) {
            Ok(svg) => svg,
            Err(e) => panic!("{}", e),
        }
    }

    /// Serialize the library as a JSON artifact
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Load a library from a JSON artifact
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Write the JSON artifact to `path`, for use from build scripts
    pub fn write_json(&self, path: &Path) -> std::io::Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)
    }

    /// Insert a freshly compiled entry. Duplicate checks happen in the compiler.
    pub(crate) fn insert(&mut self, key: String, entry: Entry) {
        self.entries.insert(key, entry);
    }
}

impl<'a> IntoIterator for &'a Library {
    type Item = (&'a String, &'a Entry);
    type IntoIter = std::collections::btree_map::Iter<'a, String, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Library {
        let mut library = Library::new();
        library.insert(
            "ui/check".to_string(),
            Entry::new(r#" viewBox="0 0 24 24"><path d="M5 12l5 5L20 7"/>"#),
        );
        library.insert("dot".to_string(), Entry::new("><circle r=\"1\"/>"));
        library
    }

    #[test]
    fn test_entry_tags() {
        let entry = Entry::new(">x");
        assert_eq!(entry.open_tag(), "<svg");
        assert_eq!(entry.inner_content(), ">x");
        assert_eq!(entry.close_tag(), "</svg>");
    }

    #[test]
    fn test_keys_are_sorted() {
        let library = sample();
        assert_eq!(library.keys().collect::<Vec<_>>(), vec!["dot", "ui/check"]);
        assert_eq!(library.len(), 2);
        assert!(!library.is_empty());
        assert!(library.contains("dot"));
        assert!(!library.contains("ui"));
    }

    #[test]
    fn test_json_roundtrip_renders_identically() {
        let library = sample();
        let json = library.to_json().expect("Should serialize");
        let loaded = Library::from_json(&json).expect("Should deserialize");
        assert_eq!(loaded, library);
        assert_eq!(
            loaded.render("ui/check", [("class", "icon")]),
            library.render("ui/check", [("class", "icon")])
        );
    }

    #[test]
    fn test_json_is_a_flat_object() {
        let json = sample().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["dot"]["inner"], "><circle r=\"1\"/>");
        assert!(value["dot"].get("open").is_none());
    }

    #[test]
    fn test_from_json_rejects_foreign_tags() {
        let result = Library::from_json(r#"{"k": {"open": "<div", "inner": ">", "close": "</div>"}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_json_entries_always_render_svg() {
        let library = Library::from_json(r#"{"k": {"inner": ">x"}}"#).expect("Should deserialize");
        assert_eq!(library.render("k", Attributes::new()).unwrap(), "<svg>x</svg>");
    }

    #[test]
    #[should_panic(expected = "SVG missing not found in library")]
    fn test_render_or_panic_missing() {
        sample().render_or_panic("missing", Attributes::new());
    }
}
