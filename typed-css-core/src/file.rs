use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use eyre::{Context, Result};

/// Script extensions stripped from an input before the declaration suffix is added.
const SCRIPT_EXTENSIONS: &[&str] = &["js", "mjs", "cjs"];

/// Compute where the declaration for `input` is written.
///
/// `styles/button.css.js` with extension `.d.ts` becomes
/// `styles/button.css.d.ts`. With `out_dir` set, the file name is kept and
/// the directory replaced.
pub fn declaration_path(input: &Path, out_dir: Option<&Path>, extension: &str) -> PathBuf {
    let stem = match input.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if SCRIPT_EXTENSIONS.contains(&ext) => input.with_extension(""),
        _ => input.to_path_buf(),
    };

    let mut file_name = stem
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    file_name.push(extension);

    match out_dir {
        Some(dir) => dir.join(file_name),
        None => stem.with_file_name(file_name),
    }
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had the same content
    Unchanged,
}

/// State of a declaration file on disk compared with freshly generated content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// No file at the path
    Missing,
    /// File exists with different content
    Stale,
    /// File exists with identical content
    UpToDate,
}

/// A generated declaration file
pub struct DeclarationFile {
    path: PathBuf,
    content: String,
}

impl DeclarationFile {
    /// Create a new declaration file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Compare the content with what is currently on disk
    pub fn status(&self) -> Result<FileStatus> {
        if !self.path.exists() {
            return Ok(FileStatus::Missing);
        }

        let existing = std::fs::read_to_string(&self.path)
            .wrap_err_with(|| format!("Failed to read {}", self.path.display()))?;

        if existing == self.content {
            Ok(FileStatus::UpToDate)
        } else {
            Ok(FileStatus::Stale)
        }
    }

    /// Write the file, leaving it untouched when the content is already current
    pub fn write(&self) -> Result<WriteResult> {
        if self.status()? == FileStatus::UpToDate {
            return Ok(WriteResult::Unchanged);
        }

        write_file(&self.path, &self.content)
            .wrap_err_with(|| format!("Failed to write {}", self.path.display()))?;
        Ok(WriteResult::Written)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}
