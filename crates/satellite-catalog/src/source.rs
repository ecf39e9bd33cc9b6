//! Line sources feeding a catalog build
//!
//! Fetching and cache freshness live with whoever supplies the lines; these
//! sources only read text that is already available.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::Result;

/// Anything that can hand over the raw lines of a TLE listing
pub trait LineSource {
    fn read_lines(&self) -> Result<Vec<String>>;
}

fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

/// TLE text already held in memory
#[derive(Debug, Clone)]
pub struct MemorySource {
    text: String,
}

impl MemorySource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl LineSource for MemorySource {
    fn read_lines(&self) -> Result<Vec<String>> {
        Ok(split_lines(&self.text))
    }
}

/// A TLE file on local disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl LineSource for FileSource {
    fn read_lines(&self) -> Result<Vec<String>> {
        info!("Reading TLE lines from {:?}", self.path);
        let text = fs::read_to_string(&self.path)?;
        Ok(split_lines(&text))
    }
}
