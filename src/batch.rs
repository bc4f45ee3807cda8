//! Batch conversion of a directory tree.
//!
//! Recursively discovers image files under the input root, mirrors their
//! relative paths under the output root (creating directories as needed),
//! and runs the single-file pipeline once per file. One file's failure is
//! captured in its [`BatchEntry`] and never aborts the batch.
//!
//! Discovery order is `walkdir`'s filename sort — stable within a run, so
//! two runs over the same tree produce the same summary.

use crate::imaging::{
    ConversionReport, ConversionRequest, ConvertError, Quality, ResizeMethod, codec,
    convert_file,
};
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One discovered file and what happened to it.
#[derive(Debug)]
pub struct BatchEntry {
    pub source: PathBuf,
    pub output: PathBuf,
    pub outcome: Result<ConversionReport, ConvertError>,
}

/// Per-file results in discovery order.
#[derive(Debug)]
pub struct BatchSummary {
    pub entries: Vec<BatchEntry>,
}

impl BatchSummary {
    pub fn succeeded(&self) -> usize {
        self.entries.iter().filter(|e| e.outcome.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.entries.len() - self.succeeded()
    }
}

/// Recursively discover convertible images under `root`, in stable
/// filename order.
pub fn discover_images(root: &Path) -> Result<Vec<PathBuf>, ConvertError> {
    if !root.is_dir() {
        return Err(ConvertError::InputNotFound(root.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(io::Error::from)?;
        if entry.file_type().is_file() && codec::is_supported(entry.path()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Convert every file in `files`, writing each to its mirrored path under
/// `output_root`. `observer` is called with each entry as it completes,
/// so the caller can print per-file status while the batch runs.
pub fn convert_files(
    input_root: &Path,
    output_root: &Path,
    files: Vec<PathBuf>,
    method: ResizeMethod,
    quality: Quality,
    mut observer: impl FnMut(&BatchEntry),
) -> BatchSummary {
    let mut entries = Vec::with_capacity(files.len());

    for source in files {
        let relative = source.strip_prefix(input_root).unwrap_or(&source).to_path_buf();
        let output = output_root.join(relative);
        let outcome = convert_one(&source, &output, method, quality);

        let entry = BatchEntry {
            source,
            output,
            outcome,
        };
        observer(&entry);
        entries.push(entry);
    }

    BatchSummary { entries }
}

/// Discover and convert in one call.
pub fn convert_directory(
    input_root: &Path,
    output_root: &Path,
    method: ResizeMethod,
    quality: Quality,
    observer: impl FnMut(&BatchEntry),
) -> Result<BatchSummary, ConvertError> {
    let files = discover_images(input_root)?;
    Ok(convert_files(
        input_root,
        output_root,
        files,
        method,
        quality,
        observer,
    ))
}

fn convert_one(
    source: &Path,
    output: &Path,
    method: ResizeMethod,
    quality: Quality,
) -> Result<ConversionReport, ConvertError> {
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }
    convert_file(&ConversionRequest {
        input: source.to_path_buf(),
        output: output.to_path_buf(),
        method,
        quality,
    })
}
