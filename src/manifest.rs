//! Build manifest listing the icon roots to compile
//!
//! A manifest is a small TOML file, usually `svg-inliner.toml` at the project
//! root, so build scripts and the CLI compile the same set of directories:
//!
//! ```toml
//! roots = ["assets/icons", "vendor/icons"]
//! output = "target/icons.json"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::compiler::compile_all;
use crate::error::CompileError;
use crate::library::Library;

/// Default manifest file name
pub const MANIFEST_FILE: &str = "svg-inliner.toml";

/// Errors that can occur when loading a manifest or writing its artifact
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to read manifest file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse manifest TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to serialize library: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error(transparent)]
    Compile(#[from] CompileError),
}

/// Roots to compile, in chaining order, plus the artifact location
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    /// Directories compiled one after another into a single library
    pub roots: Vec<PathBuf>,
    /// Where the JSON artifact is written, if anywhere
    pub output: Option<PathBuf>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlManifest {
    #[serde(default)]
    roots: Vec<PathBuf>,
    output: Option<PathBuf>,
}

impl Manifest {
    /// Load a manifest from a TOML file
    ///
    /// Relative paths resolve against the directory containing the file.
    pub fn from_file(path: &Path) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path)?;
        let manifest = Self::from_str(&content)?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(manifest.relative_to(base))
    }

    /// Load a manifest from a TOML string, leaving paths as written
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ManifestError> {
        let parsed: TomlManifest = toml::from_str(content)?;
        Ok(Manifest {
            roots: parsed.roots,
            output: parsed.output,
        })
    }

    /// Resolve relative roots and output against `base`
    pub fn relative_to(self, base: &Path) -> Self {
        Self {
            roots: self.roots.into_iter().map(|r| base.join(r)).collect(),
            output: self.output.map(|o| base.join(o)),
        }
    }

    /// Compile all roots, in order, into a fresh library
    pub fn compile(&self) -> Result<Library, CompileError> {
        compile_all(&Library::new(), &self.roots)
    }

    /// Compile and write the artifact to `output` when one is configured
    pub fn build(&self) -> Result<Library, ManifestError> {
        let library = self.compile()?;
        if let Some(output) = &self.output {
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(output, library.to_json()?)?;
            tracing::info!(path = %output.display(), entries = library.len(), "wrote library artifact");
        }
        Ok(library)
    }
}
