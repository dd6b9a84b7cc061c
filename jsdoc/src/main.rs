//! jsdoc — generate Markdown reference pages from JSDoc comments in
//! JavaScript utility files.
//!
//! Scans a configured list of (source, destination, name) folder triples,
//! extracts `/** ... */` blocks from each top-level `.js` file (non-recursive),
//! and writes one Markdown file per folder. Folders with no documented files
//! are skipped with a warning.

mod extract;
mod model;
mod parser;
mod render;

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

/// Built-in folder table, mirroring the documentation layout of the app this
/// tool ships with. Overridable per run with `--folder`.
const FOLDERS: &[FolderSpec] = &[
    FolderSpec::new("src/lib/utils", "docs/technical", "utils"),
    FolderSpec::new("src/lib/utils/image", "docs/technical", "utils_image"),
    FolderSpec::new("src/lib/utils/import", "docs/technical", "utils_import"),
    FolderSpec::new("src/lib/utils/import/paprika", "docs/technical", "utils_paprika"),
    FolderSpec::new("src/lib/utils/parse", "docs/technical", "utils_parse"),
    FolderSpec::new("src/lib/utils/prisma", "docs/technical", "utils_prisma"),
    FolderSpec::new("src/lib/utils/pwa", "docs/technical", "utils_pwa"),
    FolderSpec::new("src/lib/utils/seed", "docs/technical", "utils_seed"),
];

/// One documentation job: scan `source`, write `<destination>/<name>.md`.
#[derive(Debug, Clone)]
struct FolderSpec {
    source: &'static str,
    destination: &'static str,
    name: &'static str,
}

impl FolderSpec {
    const fn new(source: &'static str, destination: &'static str, name: &'static str) -> Self {
        Self {
            source,
            destination,
            name,
        }
    }
}

/// Owned folder spec parsed from a `--folder SOURCE:DEST:NAME` argument.
#[derive(Debug, Clone)]
struct FolderArg {
    source: String,
    destination: String,
    name: String,
}

impl FolderArg {
    fn parse(value: &str) -> Result<Self> {
        let parts: Vec<&str> = value.split(':').collect();
        let [source, destination, name] = parts.as_slice() else {
            bail!("invalid folder spec (expected SOURCE:DEST:NAME): {}", value);
        };
        if source.is_empty() || destination.is_empty() || name.is_empty() {
            bail!("invalid folder spec (empty field): {}", value);
        }
        Ok(Self {
            source: source.to_string(),
            destination: destination.to_string(),
            name: name.to_string(),
        })
    }
}

#[derive(Parser)]
#[command(
    name = "jsdoc",
    about = "Generate Markdown reference pages from JSDoc comments in JS utility files"
)]
struct Cli {
    /// Project root the folder table paths resolve against
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Override the built-in folder table: SOURCE:DEST:NAME (repeatable)
    #[arg(long = "folder", value_parser = FolderArg::parse)]
    folders: Vec<FolderArg>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let jobs: Vec<FolderArg> = if cli.folders.is_empty() {
        FOLDERS
            .iter()
            .map(|f| FolderArg {
                source: f.source.to_string(),
                destination: f.destination.to_string(),
                name: f.name.to_string(),
            })
            .collect()
    } else {
        cli.folders.clone()
    };

    for job in &jobs {
        process_folder(&cli.root, job)?;
    }

    Ok(())
}

/// Run one folder job: scan, render, write (or warn when nothing documented).
fn process_folder(root: &Path, job: &FolderArg) -> Result<()> {
    let source_dir = root.join(&job.source);
    let output_dir = root.join(&job.destination);

    fs::create_dir_all(&output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let output_name = if job.name.ends_with(".md") {
        job.name.clone()
    } else {
        format!("{}.md", job.name)
    };

    let mut docs: Vec<String> = Vec::new();
    for js_file in list_js_files(&source_dir)? {
        let content = fs::read_to_string(&js_file)
            .with_context(|| format!("failed to read {}", js_file.display()))?;
        let blocks = extract::extract_blocks(&content);
        if blocks.is_empty() {
            continue;
        }
        let entries: Vec<_> = blocks
            .iter()
            .enumerate()
            .map(|(i, block)| parser::classify(block, i + 1))
            .collect();
        let file_name = js_file
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        docs.push(render::render_file(&file_name, &entries));
    }

    if docs.is_empty() {
        eprintln!("⚠️ No JSDoc blocks found in {}", source_dir.display());
        return Ok(());
    }

    let folder_name = source_dir
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let out_path = output_dir.join(output_name);
    let output = format!("{}{}", render::folder_title(&folder_name), docs.join("\n\n"));
    fs::write(&out_path, output)
        .with_context(|| format!("failed to write {}", out_path.display()))?;
    println!("✅ Wrote {}", out_path.display());

    Ok(())
}

/// Top-level `.js` files in a directory, sorted for deterministic output.
/// A missing source directory yields no files rather than an error, so the
/// warning path handles it.
fn list_js_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return Ok(files),
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("js") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
