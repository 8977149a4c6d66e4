//! Completed-match records and the append-only store that keeps them.
//!
//! The file store writes one JSON object per line and never rewrites earlier
//! lines. A missing or empty file reads back as zero records.

use chrono::{DateTime, Utc};
use core::fmt;
use core::str::FromStr;
use core::time::Duration;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::Mode;

const INITIALS_LEN: usize = 3;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("initials must be exactly three letters A-Z, got {0:?}")]
pub struct InvalidInitials(pub String);

/// Three upper-case ASCII letters identifying a player.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Initials([u8; INITIALS_LEN]);

impl Initials {
    pub const LEN: usize = INITIALS_LEN;

    /// Letter in `slot`, or `None` past the last slot.
    pub fn letter(&self, slot: usize) -> Option<char> {
        self.0.get(slot).map(|&letter| letter as char)
    }

    /// Next letter in `slot`, stopping at `Z`.
    pub fn increment(&mut self, slot: usize) {
        if let Some(letter) = self.0.get_mut(slot) {
            if *letter < b'Z' {
                *letter += 1;
            }
        }
    }

    /// Previous letter in `slot`, stopping at `A`.
    pub fn decrement(&mut self, slot: usize) {
        if let Some(letter) = self.0.get_mut(slot) {
            if *letter > b'A' {
                *letter -= 1;
            }
        }
    }

    pub fn as_str(&self) -> &str {
        // only ever holds A-Z
        core::str::from_utf8(&self.0).unwrap_or("???")
    }
}

impl Default for Initials {
    fn default() -> Self {
        Self([b'A'; INITIALS_LEN])
    }
}

impl fmt::Display for Initials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Initials {
    type Err = InvalidInitials;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes: [u8; INITIALS_LEN] = s
            .as_bytes()
            .try_into()
            .map_err(|_| InvalidInitials(s.to_owned()))?;
        if bytes.iter().all(u8::is_ascii_uppercase) {
            Ok(Self(bytes))
        } else {
            Err(InvalidInitials(s.to_owned()))
        }
    }
}

impl TryFrom<String> for Initials {
    type Error = InvalidInitials;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Initials> for String {
    fn from(value: Initials) -> Self {
        value.as_str().to_owned()
    }
}

/// One completed match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub initials: Initials,
    pub elapsed: Duration,
    pub completed_at: DateTime<Utc>,
    pub mode: Mode,
}

impl ScoreRecord {
    /// Record completed right now.
    pub fn new(initials: Initials, elapsed: Duration, mode: Mode) -> Self {
        Self {
            initials,
            elapsed,
            completed_at: Utc::now(),
            mode,
        }
    }
}

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("score store I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("malformed score record on line {line}: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("could not encode score record: {0}")]
    Encode(#[source] serde_json::Error),
}

pub type PersistenceResult<T> = core::result::Result<T, PersistenceError>;

/// Durable, append-only list of [`ScoreRecord`]s.
pub trait ScoreStore {
    fn append(&mut self, record: &ScoreRecord) -> PersistenceResult<()>;

    /// Every record in insertion order. An empty or missing store is not an
    /// error.
    fn load(&self) -> PersistenceResult<Vec<ScoreRecord>>;
}

/// JSON-lines file on disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for FileScoreStore {
    fn append(&mut self, record: &ScoreRecord) -> PersistenceResult<()> {
        let mut line = serde_json::to_string(record).map_err(PersistenceError::Encode)?;
        line.push('\n');

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        file.flush()?;

        log::debug!("Saved score to {}", self.path.display());
        Ok(())
    }

    fn load(&self) -> PersistenceResult<Vec<ScoreRecord>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("No score store at {}", self.path.display());
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };

        contents
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, line)| {
                serde_json::from_str(line).map_err(|source| PersistenceError::Malformed {
                    line: index + 1,
                    source,
                })
            })
            .collect()
    }
}

/// In-memory store, for tests and for running without a writable data dir.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryScoreStore {
    records: Vec<ScoreRecord>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn append(&mut self, record: &ScoreRecord) -> PersistenceResult<()> {
        self.records.push(record.clone());
        Ok(())
    }

    fn load(&self) -> PersistenceResult<Vec<ScoreRecord>> {
        Ok(self.records.clone())
    }
}

/// Sorts records fastest first; equal times rank the earlier completion first.
pub fn leaderboard(mut records: Vec<ScoreRecord>) -> Vec<ScoreRecord> {
    records.sort_by(|a, b| {
        a.elapsed
            .cmp(&b.elapsed)
            .then_with(|| a.completed_at.cmp(&b.completed_at))
    });
    records
}

/// Index of the most recently completed record.
pub fn latest_index(records: &[ScoreRecord]) -> Option<usize> {
    records
        .iter()
        .enumerate()
        .max_by_key(|(_, record)| record.completed_at)
        .map(|(index, _)| index)
}
