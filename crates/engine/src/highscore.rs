//! High-score persistence - a single best-score scalar
//!
//! The only state that survives the process: one non-negative integer in a
//! plain text file. A missing file reads as zero; corrupt contents are an
//! error rather than silent data loss.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};

/// File-backed store for the best score
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored best score. A missing file is 0.
    pub fn load(&self) -> Result<u32> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("read high score from {}", self.path.display()))
            }
        };

        raw.trim()
            .parse::<u32>()
            .map_err(|_| anyhow!("invalid high score in {}: {:?}", self.path.display(), raw))
    }

    /// Write the best score, creating parent directories as needed.
    pub fn save(&self, score: u32) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("create directory {}", parent.display()))?;
            }
        }
        fs::write(&self.path, format!("{}\n", score))
            .with_context(|| format!("write high score to {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> HighScoreStore {
        let mut path = std::env::temp_dir();
        path.push(format!("block-blitz-test-{}-{}", std::process::id(), name));
        let _ = fs::remove_file(&path);
        HighScoreStore::new(path)
    }

    #[test]
    fn test_missing_file_reads_zero() {
        let store = temp_store("missing");
        assert_eq!(store.load().unwrap(), 0);
    }

    #[test]
    fn test_save_then_load() {
        let store = temp_store("roundtrip");
        store.save(4400).unwrap();
        assert_eq!(store.load().unwrap(), 4400);
        store.save(9000).unwrap();
        assert_eq!(store.load().unwrap(), 9000);
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let store = temp_store("corrupt");
        fs::write(store.path(), "not a number").unwrap();
        assert!(store.load().is_err());
        let _ = fs::remove_file(store.path());
    }
}
