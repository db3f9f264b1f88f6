//! SVG Inliner CLI
//!
//! Usage:
//!   svg-inliner compile [ROOT]... [-c MANIFEST] [-o FILE]
//!   svg-inliner list <LIBRARY>
//!   svg-inliner render <LIBRARY> <KEY> [-a NAME=VALUE]...

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use svg_inliner::manifest::MANIFEST_FILE;
use svg_inliner::{Attributes, Library, Manifest};

#[derive(Parser)]
#[command(name = "svg-inliner")]
#[command(about = "Compile SVG icon directories into an inlinable library")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile icon roots into a JSON library
    Compile {
        /// Icon roots, compiled in order (defaults to the manifest's roots)
        roots: Vec<PathBuf>,

        /// Manifest file (TOML format)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output file (writes to stdout if not provided)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the keys of a compiled library
    List {
        /// Compiled library (JSON)
        library: PathBuf,
    },

    /// Render one entry
    Render {
        /// Compiled library (JSON)
        library: PathBuf,

        /// Entry key, e.g. `ui/check`
        key: String,

        /// Attribute to inject, as NAME=VALUE (repeatable, kept in order)
        #[arg(short, long = "attr", value_parser = parse_attr)]
        attrs: Vec<(String, String)>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Command::Compile {
            roots,
            config,
            output,
        } => run_compile(roots, config, output),
        Command::List { library } => load_library(&library).map(|library| {
            for key in library.keys() {
                println!("{}", key);
            }
        }),
        Command::Render {
            library,
            key,
            attrs,
        } => load_library(&library).and_then(|library| {
            library
                .render(&key, Attributes::from(attrs))
                .map(|svg| println!("{}", svg))
                .map_err(|e| e.to_string())
        }),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_compile(
    roots: Vec<PathBuf>,
    config: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<(), String> {
    let default_config = Path::new(MANIFEST_FILE);
    let config = match config {
        Some(path) => Some(path),
        None if roots.is_empty() && default_config.is_file() => Some(default_config.to_path_buf()),
        None => None,
    };
    let manifest = resolve_manifest(roots, config.as_deref(), output)?;

    match &manifest.output {
        Some(_) => manifest.build().map(|_| ()).map_err(|e| e.to_string()),
        None => {
            let library = manifest.compile().map_err(|e| e.to_string())?;
            let json = library.to_json().map_err(|e| e.to_string())?;
            println!("{}", json);
            Ok(())
        }
    }
}

/// Explicit roots and output override whatever the manifest says
fn resolve_manifest(
    roots: Vec<PathBuf>,
    config: Option<&Path>,
    output: Option<PathBuf>,
) -> Result<Manifest, String> {
    let mut manifest = match config {
        Some(path) => load_manifest(path)?,
        None => Manifest::default(),
    };
    if !roots.is_empty() {
        manifest.roots = roots;
    }
    if manifest.roots.is_empty() {
        return Err(format!(
            "no icon roots given and no {} found",
            MANIFEST_FILE
        ));
    }
    if output.is_some() {
        manifest.output = output;
    }
    Ok(manifest)
}

fn load_manifest(path: &Path) -> Result<Manifest, String> {
    Manifest::from_file(path)
        .map_err(|e| format!("Error loading manifest '{}': {}", path.display(), e))
}

fn load_library(path: &Path) -> Result<Library, String> {
    let json = fs::read_to_string(path)
        .map_err(|e| format!("Error reading file '{}': {}", path.display(), e))?;
    Library::from_json(&json)
        .map_err(|e| format!("Error parsing library '{}': {}", path.display(), e))
}

fn parse_attr(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", s))
}
