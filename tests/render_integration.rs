//! Integration tests for rendering compiled libraries

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use svg_inliner::{compile_dir, render, Attributes, Library, Manifest, RenderError};

const ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg">path-data</svg>"#;

fn library_with(files: &[(&str, &str)]) -> (tempfile::TempDir, Library) {
    let dir = tempfile::tempdir().unwrap();
    for (relative, content) in files {
        let path = dir.path().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
    let library = compile_dir(dir.path()).expect("Should compile");
    (dir, library)
}

#[test]
fn test_roundtrip_without_attributes() {
    let (_dir, library) = library_with(&[("icon.svg", ICON)]);
    let svg = render(&library, "icon", Attributes::new()).unwrap();
    assert_eq!(svg, ICON);
}

#[test]
fn test_roundtrip_trims_whitespace() {
    let (_dir, library) = library_with(&[("icon.svg", "\n\n  <svg><g/></svg>  \n")]);
    assert_eq!(svg_inliner::render!(library, "icon"), "<svg><g/></svg>");
}

#[test]
fn test_attribute_injection_order() {
    let (_dir, library) = library_with(&[("icon.svg", ICON)]);
    let svg = render(&library, "icon", vec![("class", "a"), ("@click", "go")]).unwrap();
    insta::assert_snapshot!(svg, @r#"<svg class="a" @click="go" xmlns="http://www.w3.org/2000/svg">path-data</svg>"#);
}

#[test]
fn test_name_normalization() {
    let (_dir, library) = library_with(&[("icon.svg", ICON)]);
    let svg = render(&library, "icon", [("test_attr", "v")]).unwrap();
    assert!(svg.contains(r#" test-attr="v""#));
}

#[test]
fn test_map_input_is_deterministic() {
    let (_dir, library) = library_with(&[("icon.svg", ICON)]);

    let mut ba = HashMap::new();
    ba.insert("b", "2");
    ba.insert("a", "1");
    let mut ab = HashMap::new();
    ab.insert("a", "1");
    ab.insert("b", "2");

    let first = render(&library, "icon", ba).unwrap();
    let second = render(&library, "icon", ab).unwrap();
    assert_eq!(first, second);
    assert!(first.starts_with(r#"<svg a="1" b="2" xmlns="#));
}

#[test]
fn test_missing_key() {
    let (_dir, library) = library_with(&[("icon.svg", ICON)]);
    let err = render(&library, "nonexistent", Attributes::new()).unwrap_err();
    assert_eq!(
        err,
        RenderError::NotFound {
            key: "nonexistent".to_string()
        }
    );
    assert!(err.to_string().contains("nonexistent"));
}

#[test]
#[should_panic(expected = "SVG nonexistent not found in library")]
fn test_missing_key_panics_with_macro() {
    let (_dir, library) = library_with(&[("icon.svg", ICON)]);
    svg_inliner::render!(library, "nonexistent", class = "x");
}

#[test]
fn test_render_is_idempotent() {
    let (_dir, library) = library_with(&[("ui/check.svg", ICON)]);
    let attrs = vec![("class", "icon"), ("data_size", "lg")];
    let first = render(&library, "ui/check", attrs.clone()).unwrap();
    let second = render(&library, "ui/check", attrs).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_concurrent_renders_share_library() {
    let (_dir, library) = library_with(&[("icon.svg", ICON)]);
    let expected = render(&library, "icon", [("class", "x")]).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| render(&library, "icon", [("class", "x")]).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_artifact_roundtrip() {
    let (dir, library) = library_with(&[("icon.svg", ICON), ("nested/dot.svg", "<svg><circle/></svg>")]);
    let artifact = dir.path().join("out/icons.json");
    fs::create_dir_all(artifact.parent().unwrap()).unwrap();
    library.write_json(&artifact).unwrap();

    let loaded = Library::from_json(&fs::read_to_string(&artifact).unwrap()).unwrap();
    for key in library.keys() {
        assert_eq!(
            render(&loaded, key, [("class", "i")]),
            render(&library, key, [("class", "i")])
        );
    }
}

#[test]
fn test_manifest_build() {
    let project = tempfile::tempdir().unwrap();
    write(project.path(), "assets/icons/x.svg", ICON);
    write(project.path(), "vendor/icons/brand/logo.svg", "<svg><g/></svg>");
    write(
        project.path(),
        "svg-inliner.toml",
        "roots = [\"assets/icons\", \"vendor/icons\"]\noutput = \"target/icons.json\"\n",
    );

    let manifest = Manifest::from_file(&project.path().join("svg-inliner.toml")).unwrap();
    let library = manifest.build().expect("Should build");
    assert_eq!(library.keys().collect::<Vec<_>>(), vec!["brand/logo", "x"]);

    let json = fs::read_to_string(project.path().join("target/icons.json")).unwrap();
    assert_eq!(Library::from_json(&json).unwrap(), library);
}

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}
