//! Compile a directory tree of `.svg` files into a [`Library`]
//!
//! Every file whose name ends in `.svg` (case-sensitive) anywhere under the
//! root becomes one entry. Its key is the path relative to the root, joined
//! with `/` and without the `.svg` suffix, so `root/ui/arrows/left.svg` is
//! stored as `ui/arrows/left`.

use std::fs;
use std::path::{Component, Path};

use lazy_static::lazy_static;
use regex::Regex;
use tracing::instrument;
use walkdir::WalkDir;

use crate::error::{CompileError, InvalidReason};
use crate::library::{Entry, Library, CLOSE_TAG, OPEN_TAG};

/// File suffix that marks an SVG file
pub const SVG_SUFFIX: &str = ".svg";

lazy_static! {
    static ref RE_SVG: Regex = Regex::new(r"(?s)<svg[^>]*>.*?</svg>").unwrap();
}

/// Compile every SVG under `root` into a copy of `library`
///
/// Keys already present in `library` count as duplicates, so chaining
/// `compile` over several roots fails on the first collision instead of
/// overwriting. On any error nothing is returned; the input is untouched.
///
/// # Example
///
/// ```rust,no_run
/// use svg_inliner::{compile, Library};
///
/// let icons = compile(&Library::new(), "assets/icons")?;
/// let icons = compile(&icons, "vendor/icons")?;
/// # Ok::<(), svg_inliner::CompileError>(())
/// ```
pub fn compile(library: &Library, root: impl AsRef<Path>) -> Result<Library, CompileError> {
    let root = root.as_ref();
    if !root.is_dir() {
        return Err(CompileError::RootNotFound {
            path: root.to_path_buf(),
        });
    }
    let root = fs::canonicalize(root).map_err(|e| CompileError::io(root, e))?;

    let mut compiled = library.clone();
    let mut added = 0usize;

    for dir_entry in WalkDir::new(&root).follow_links(true).sort_by_file_name() {
        let dir_entry = dir_entry.map_err(|e| {
            let path = e.path().unwrap_or(&root).to_path_buf();
            CompileError::io(path, e.into())
        })?;
        if !dir_entry.file_type().is_file() || !is_svg(dir_entry.path()) {
            continue;
        }

        let path = dir_entry.path();
        let key = derive_key(&root, path);
        if compiled.contains(&key) {
            return Err(CompileError::DuplicateKey { key });
        }

        let entry = read_svg(path, &key)?;
        tracing::debug!(key = %key, path = %path.display(), "compiled svg");
        compiled.insert(key, entry);
        added += 1;
    }

    tracing::info!(root = %root.display(), added, total = compiled.len(), "compile pass complete");
    Ok(compiled)
}

/// Compile a single root into a fresh library
pub fn compile_dir(root: impl AsRef<Path>) -> Result<Library, CompileError> {
    compile(&Library::new(), root)
}

/// Chain [`compile`] over several roots, in order
pub fn compile_all<I, P>(library: &Library, roots: I) -> Result<Library, CompileError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    roots
        .into_iter()
        .try_fold(library.clone(), |acc, root| compile(&acc, root))
}

/// A bare `.svg` has no name to key it by and is skipped like other dotfiles
fn is_svg(path: &Path) -> bool {
    path.file_name()
        .map(|name| {
            let name = name.to_string_lossy();
            name.len() > SVG_SUFFIX.len() && name.ends_with(SVG_SUFFIX)
        })
        .unwrap_or(false)
}

/// Derive the library key for `path` relative to `root`
pub fn derive_key(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let joined = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/");
    match joined.strip_suffix(SVG_SUFFIX) {
        Some(key) => key.to_string(),
        None => joined,
    }
}

/// Read and validate one SVG file
#[instrument(level = "trace", skip(path))]
pub fn read_svg(path: &Path, key: &str) -> Result<Entry, CompileError> {
    let bytes = fs::read(path).map_err(|e| CompileError::io(path, e))?;
    let text = String::from_utf8(bytes).map_err(|_| CompileError::InvalidFile {
        key: key.to_string(),
        reason: InvalidReason::InvalidChars,
    })?;
    parse_svg(&text).ok_or_else(|| CompileError::InvalidFile {
        key: key.to_string(),
        reason: InvalidReason::InvalidFormat,
    })
}

/// Split SVG text into an [`Entry`], or `None` if it has no `<svg>...</svg>` span
///
/// Text before the first `<svg` and after the last `</svg>` is dropped.
pub fn parse_svg(text: &str) -> Option<Entry> {
    let trimmed = text.trim();
    let start = RE_SVG.find(trimmed)?.start();
    let end = trimmed.rfind(CLOSE_TAG)? + CLOSE_TAG.len();
    let inner = trimmed[start..end]
        .strip_prefix(OPEN_TAG)?
        .strip_suffix(CLOSE_TAG)?;
    Some(Entry::new(inner))
}
