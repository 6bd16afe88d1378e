//! Line-oriented input listings.

use std::{fs, path::Path};

use anyhow::{Context, Result};

/// The verbatim lines of one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawListing {
    file_path: String,
    lines: Vec<String>,
}

impl RawListing {
    pub fn new(file_path: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            file_path: file_path.into(),
            lines,
        }
    }

    /// Build a listing from in-memory text, as if it had been read from `file_path`.
    pub fn from_text(file_path: impl Into<String>, text: &str) -> Self {
        Self::new(file_path, text.lines().map(String::from).collect())
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Iterate lines with their 1-based line numbers.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &str)> {
        self.lines
            .iter()
            .enumerate()
            .map(|(i, line)| (i + 1, line.as_str()))
    }
}

/// Read a whole listing into memory.
///
/// The file is closed before this returns. Errors carry the path so the
/// caller can report which component had to be skipped.
pub fn read_listing(path: &Path) -> Result<RawListing> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;

    // Listings are pasted from web pages; stray Latin-1 bytes only ever
    // appear in descriptions, never in the identifiers we keep.
    Ok(RawListing::from_text(
        path.to_string_lossy().to_string(),
        &String::from_utf8_lossy(&bytes),
    ))
}
