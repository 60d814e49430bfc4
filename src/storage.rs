//! The single persisted value: the best score seen so far.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::HIGH_SCORE_FILE;

pub trait HighScoreStore {
    fn load(&self) -> Result<u32>;
    fn save(&mut self, score: u32) -> Result<()>;
}

#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
struct HighScoreRecord {
    high_score: u32,
}

/// Keeps the high score as `{"high_score": N}` in a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$HOME/<file>`, or the working directory when there is no home.
    pub fn default_path() -> PathBuf {
        match std::env::var_os("HOME") {
            Some(home) => Path::new(&home).join(HIGH_SCORE_FILE),
            None => PathBuf::from(HIGH_SCORE_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for JsonFileStore {
    fn load(&self) -> Result<u32> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(0),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("reading high score from {}", self.path.display()))
            }
        };
        let record: HighScoreRecord = serde_json::from_str(&contents)
            .with_context(|| format!("parsing high score in {}", self.path.display()))?;
        Ok(record.high_score)
    }

    fn save(&mut self, score: u32) -> Result<()> {
        let contents = serde_json::to_string(&HighScoreRecord { high_score: score })?;
        fs::write(&self.path, contents)
            .with_context(|| format!("writing high score to {}", self.path.display()))
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    pub high_score: u32,
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> Result<u32> {
        Ok(self.high_score)
    }

    fn save(&mut self, score: u32) -> Result<()> {
        self.high_score = score;
        Ok(())
    }
}
