//! File-backed high-score persistence
//!
//! A single JSON record in the user's home directory. Load and save failures
//! degrade to an in-memory value of 0 with a logged warning; persistence
//! trouble must never take the game down.

use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const STORE_FILENAME: &str = ".snake_high_score.json";

#[derive(Debug, Default, Serialize, Deserialize)]
struct HighScoreRecord {
    #[serde(default)]
    high_score: u32,
}

/// Durable best-score store with silent fallback semantics
pub struct HighScoreStore {
    path: PathBuf,
    high_score: u32,
}

impl HighScoreStore {
    /// Open the store at its default location (`~/.snake_high_score.json`)
    pub fn open_default() -> Self {
        Self::open(default_path())
    }

    /// Open a store at the given path, loading any existing record.
    /// A missing or unreadable file is treated as a high score of 0.
    pub fn open(path: PathBuf) -> Self {
        let high_score = load_record(&path);
        Self { path, high_score }
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Persist `score` if it beats the stored maximum. Write failures are
    /// logged and the new maximum is kept in memory for this session.
    pub fn record(&mut self, score: u32) {
        if score <= self.high_score {
            return;
        }
        self.high_score = score;

        let record = HighScoreRecord { high_score: score };
        let json = match serde_json::to_string(&record) {
            Ok(json) => json,
            Err(err) => {
                warn!("could not serialize high score: {err}");
                return;
            }
        };
        if let Err(err) = fs::write(&self.path, json) {
            warn!("could not save high score to {}: {err}", self.path.display());
        }
    }
}

/// Default store location: the user's home directory, or the working
/// directory when no home can be resolved
pub fn default_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(STORE_FILENAME)
}

fn load_record(path: &Path) -> u32 {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            if err.kind() != ErrorKind::NotFound {
                warn!("could not load high score from {}: {err}", path.display());
            }
            return 0;
        }
    };

    match serde_json::from_str::<HighScoreRecord>(&contents) {
        Ok(record) => record.high_score,
        Err(err) => {
            warn!("corrupt high score file {}: {err}", path.display());
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_defaults_to_zero() {
        let dir = TempDir::new().unwrap();
        let store = HighScoreStore::open(dir.path().join("scores.json"));
        assert_eq!(store.high_score(), 0);
    }

    #[test]
    fn test_record_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scores.json");

        let mut store = HighScoreStore::open(path.clone());
        store.record(120);
        assert_eq!(store.high_score(), 120);

        let reloaded = HighScoreStore::open(path);
        assert_eq!(reloaded.high_score(), 120);
    }

    #[test]
    fn test_lower_score_not_persisted() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scores.json");

        let mut store = HighScoreStore::open(path.clone());
        store.record(100);
        store.record(40);
        assert_eq!(store.high_score(), 100);

        let reloaded = HighScoreStore::open(path);
        assert_eq!(reloaded.high_score(), 100);
    }

    #[test]
    fn test_corrupt_file_defaults_to_zero() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scores.json");
        fs::write(&path, "not json at all").unwrap();

        let store = HighScoreStore::open(path);
        assert_eq!(store.high_score(), 0);
    }

    #[test]
    fn test_missing_field_tolerated() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scores.json");
        fs::write(&path, "{}").unwrap();

        let store = HighScoreStore::open(path);
        assert_eq!(store.high_score(), 0);
    }

    #[test]
    fn test_default_path_points_at_store_file() {
        let path = default_path();
        assert_eq!(path.file_name().unwrap(), STORE_FILENAME);
        assert!(path.parent().is_some());
    }

    #[test]
    fn test_unwritable_path_kept_in_memory() {
        let dir = TempDir::new().unwrap();
        // Point at a directory so the write fails
        let mut store = HighScoreStore::open(dir.path().to_path_buf());
        store.record(30);
        assert_eq!(store.high_score(), 30);
    }
}
