//! Render library entries back to markup
//!
//! Caller attributes are injected immediately after the literal `<svg` token,
//! ahead of any attributes the source file declared on its own root tag.
//! Names have `_` replaced by `-`. Values are quoted with Rust's `Debug`
//! string formatting, so plain values come out as `"value"` and embedded
//! quotes or backslashes are escaped with a backslash.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::error::RenderError;
use crate::library::Library;

/// Ordered attribute list injected into the root `<svg` tag
///
/// Lists keep the caller's order. Maps are sorted by key first, so rendering
/// from a `HashMap` is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    /// Create an empty attribute list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an attribute, keeping insertion order
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.push((name.into(), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    fn sorted(mut pairs: Vec<(String, String)>) -> Self {
        pairs.sort_by(|a, b| a.0.cmp(&b.0));
        Self(pairs)
    }

    /// Serialize as ` name="value"` fragments
    fn to_markup(&self) -> String {
        let mut out = String::new();
        for (name, value) in &self.0 {
            out.push_str(&format!(" {}={:?}", name.replace('_', "-"), value));
        }
        out
    }
}

impl<K: Into<String>, V: Into<String>> From<Vec<(K, V)>> for Attributes {
    fn from(pairs: Vec<(K, V)>) -> Self {
        Self(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Attributes {
    fn from(pairs: [(K, V); N]) -> Self {
        Self(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: AsRef<str>, V: AsRef<str>> From<&[(K, V)]> for Attributes {
    fn from(pairs: &[(K, V)]) -> Self {
        Self(
            pairs
                .iter()
                .map(|(k, v)| (k.as_ref().to_string(), v.as_ref().to_string()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<String>, S: BuildHasher> From<HashMap<K, V, S>> for Attributes {
    fn from(map: HashMap<K, V, S>) -> Self {
        Self::sorted(map.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: AsRef<str>, V: AsRef<str>, S: BuildHasher> From<&HashMap<K, V, S>> for Attributes {
    fn from(map: &HashMap<K, V, S>) -> Self {
        Self::sorted(
            map.iter()
                .map(|(k, v)| (k.as_ref().to_string(), v.as_ref().to_string()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<String>> From<BTreeMap<K, V>> for Attributes {
    fn from(map: BTreeMap<K, V>) -> Self {
        Self::sorted(map.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: AsRef<str>, V: AsRef<str>> From<&BTreeMap<K, V>> for Attributes {
    fn from(map: &BTreeMap<K, V>) -> Self {
        Self::sorted(
            map.iter()
                .map(|(k, v)| (k.as_ref().to_string(), v.as_ref().to_string()))
                .collect(),
        )
    }
}

/// Render the entry stored under `key` with `attrs` injected into its root tag
///
/// # Example
///
/// ```rust
/// use svg_inliner::{render, Library};
///
/// let library = Library::from_json(
///     r#"{"dot": {"inner": "><circle r=\"1\"/>"}}"#,
/// ).unwrap();
///
/// let svg = render(&library, "dot", [("class", "icon"), ("aria_hidden", "true")]).unwrap();
/// assert_eq!(svg, r#"<svg class="icon" aria-hidden="true"><circle r="1"/></svg>"#);
///
/// assert!(render(&library, "missing", Vec::<(String, String)>::new()).is_err());
/// ```
pub fn render<A: Into<Attributes>>(
    library: &Library,
    key: &str,
    attrs: A,
) -> Result<String, RenderError> {
    let entry = library.get(key).ok_or_else(|| RenderError::NotFound {
        key: key.to_string(),
    })?;
    let attrs = attrs.into().to_markup();

    let mut svg = String::with_capacity(
        entry.open_tag().len() + attrs.len() + entry.inner_content().len() + entry.close_tag().len(),
    );
    svg.push_str(entry.open_tag());
    svg.push_str(&attrs);
    svg.push_str(entry.inner_content());
    svg.push_str(entry.close_tag());
    Ok(svg)
}

/// Render an entry, panicking if the key is not in the library
///
/// ```rust
/// use svg_inliner::{render, Library};
///
/// let library = Library::from_json(
///     r#"{"dot": {"inner": "><circle/>"}}"#,
/// ).unwrap();
///
/// assert_eq!(render!(library, "dot"), "<svg><circle/></svg>");
/// assert_eq!(
///     render!(library, "dot", class = "icon", stroke_width = 2),
///     r#"<svg class="icon" stroke-width="2"><circle/></svg>"#
/// );
/// assert_eq!(
///     render!(library, "dot", [("@click", "go")]),
///     r#"<svg @click="go"><circle/></svg>"#
/// );
/// ```
#[macro_export]
macro_rules! render {
    ($library:expr, $key:expr $(,)?) => {
        $crate::Library::render_or_panic(&$library, $key, $crate::Attributes::new())
    };
    ($library:expr, $key:expr, $($name:ident = $value:expr),+ $(,)?) => {
        $crate::Library::render_or_panic(
            &$library,
            $key,
            $crate::Attributes::new()
                $(.with(stringify!($name).trim_start_matches("r#"), $value.to_string()))+,
        )
    };
    ($library:expr, $key:expr, $attrs:expr $(,)?) => {
        $crate::Library::render_or_panic(&$library, $key, $attrs)
    };
}
