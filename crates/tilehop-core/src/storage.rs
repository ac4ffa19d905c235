use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Durable high-score storage. Reads and writes are synchronous; a store
/// never surfaces failures to game logic.
pub trait HighScoreStore {
    /// Stored high score, or 0 when nothing has been stored yet.
    fn high_score(&self) -> u32;

    fn set_high_score(&mut self, score: u32);
}

/// In-process store, used by tests and when no file path is configured.
#[derive(Debug, Clone, Default)]
pub struct MemoryHighScores {
    high_score: u32,
}

impl MemoryHighScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_score(high_score: u32) -> Self {
        Self { high_score }
    }
}

impl HighScoreStore for MemoryHighScores {
    fn high_score(&self) -> u32 {
        self.high_score
    }

    fn set_high_score(&mut self, score: u32) {
        self.high_score = score;
    }
}

#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "high score file I/O failed: {e}"),
            Self::Parse(e) => write!(f, "high score file is malformed: {e}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

/// On-disk layout of the high score file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighScoreRecord {
    pub high_score: u32,
    pub updated_at: Option<String>,
}

/// JSON-file backed store. The record is read once on open and cached;
/// every write goes straight to disk.
#[derive(Debug, Clone)]
pub struct FileHighScores {
    path: PathBuf,
    record: HighScoreRecord,
}

impl FileHighScores {
    /// Open the store at `path`. A missing file means no high score yet;
    /// an unreadable or malformed one is logged and treated the same way.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let record = match Self::read(&path) {
            Ok(record) => record,
            Err(StoreError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                HighScoreRecord::default()
            },
            Err(e) => {
                tracing::warn!("Failed to load {}: {e}, starting from 0", path.display());
                HighScoreRecord::default()
            },
        };
        Self { path, record }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn record(&self) -> &HighScoreRecord {
        &self.record
    }

    fn read(path: &Path) -> Result<HighScoreRecord, StoreError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn write(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.record)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl HighScoreStore for FileHighScores {
    fn high_score(&self) -> u32 {
        self.record.high_score
    }

    fn set_high_score(&mut self, score: u32) {
        self.record = HighScoreRecord {
            high_score: score,
            updated_at: Some(timestamp_now()),
        };
        match self.write() {
            Ok(()) => tracing::debug!(score, path = %self.path.display(), "High score saved"),
            Err(e) => tracing::warn!("Failed to save {}: {e}", self.path.display()),
        }
    }
}

/// Seconds since the Unix epoch, suffixed with `Z`.
fn timestamp_now() -> String {
    let since_epoch = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}Z", since_epoch.as_secs())
}
