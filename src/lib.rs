//! SVG Inliner - compile icon directories into an in-memory library
//!
//! The [`compile`] step walks a directory of `.svg` files once, usually from a
//! build script, producing an immutable [`Library`]. [`render`] then turns any
//! entry back into markup with extra attributes injected into the root tag,
//! without touching the filesystem.
//!
//! # Example
//!
//! ```rust,no_run
//! use svg_inliner::{compile_dir, render};
//!
//! let icons = compile_dir("assets/icons").unwrap();
//!
//! let svg = render(&icons, "ui/check", [("class", "icon"), ("aria_hidden", "true")]).unwrap();
//! assert!(svg.starts_with(r#"<svg class="icon" aria-hidden="true""#));
//! ```

pub mod compiler;
pub mod error;
pub mod library;
pub mod manifest;
pub mod render;

pub use compiler::{compile, compile_all, compile_dir};
pub use error::{CompileError, InvalidReason, RenderError};
pub use library::{Entry, Library};
pub use manifest::{Manifest, ManifestError};
pub use render::{render, Attributes};
