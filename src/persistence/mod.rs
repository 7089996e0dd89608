//! File-backed leaderboard
//!
//! Features:
//! - Versioned JSON envelope
//! - Backup rotation (old save copied to backup, tmp renamed over save)
//! - Falls back to the backup when the main file is missing or corrupt

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::highscores::{HighScores, LeaderboardError, LeaderboardPort, ScoreRecord};

/// Current on-disk format version
pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    version: u32,
    scores: HighScores,
}

/// Leaderboard persisted to a JSON file after every recorded score
#[derive(Debug)]
pub struct JsonLeaderboard {
    path: PathBuf,
    scores: HighScores,
}

impl JsonLeaderboard {
    /// Open the leaderboard at `path`; with neither save nor backup the board is empty
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, LeaderboardError> {
        let path = path.into();
        let scores = match read_envelope(&path) {
            Ok(Some(scores)) => scores,
            Ok(None) => match read_envelope(&backup_path(&path))? {
                Some(scores) => {
                    log::warn!("Leaderboard {} missing, restored from backup", path.display());
                    scores
                }
                None => {
                    log::info!("No leaderboard at {}, starting fresh", path.display());
                    HighScores::new()
                }
            },
            Err(e) => {
                log::warn!("Leaderboard {} unreadable ({e}), trying backup", path.display());
                match read_envelope(&backup_path(&path)) {
                    Ok(Some(scores)) => scores,
                    _ => return Err(e),
                }
            }
        };
        log::info!("Loaded {} leaderboard entries", scores.len());
        Ok(Self { path, scores })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn scores(&self) -> &HighScores {
        &self.scores
    }

    fn save(&self) -> Result<(), LeaderboardError> {
        let envelope = Envelope {
            version: FORMAT_VERSION,
            scores: self.scores.clone(),
        };
        let json = serde_json::to_string_pretty(&envelope)?;

        let tmp = tmp_path(&self.path);
        fs::write(&tmp, json)?;
        if self.path.exists() {
            fs::copy(&self.path, backup_path(&self.path))?;
        }
        // The main file is replaced in one step, never removed
        fs::rename(&tmp, &self.path)?;
        log::info!("Leaderboard saved ({} entries)", self.scores.len());
        Ok(())
    }
}

impl LeaderboardPort for JsonLeaderboard {
    fn record_score(&mut self, record: &ScoreRecord) -> Result<(), LeaderboardError> {
        self.scores.add_score(record.clone());
        self.save()
    }

    fn top_scores(&self, limit: usize) -> Result<Vec<ScoreRecord>, LeaderboardError> {
        self.scores.top_scores(limit)
    }
}

fn read_envelope(path: &Path) -> Result<Option<HighScores>, LeaderboardError> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let envelope: Envelope = serde_json::from_str(&json)?;
    if envelope.version > FORMAT_VERSION {
        return Err(LeaderboardError::Unavailable(format!(
            "unsupported leaderboard version {}",
            envelope.version
        )));
    }
    let mut scores = envelope.scores;
    scores.normalize_order();
    Ok(Some(scores))
}

fn tmp_path(path: &Path) -> PathBuf {
    with_suffix(path, "tmp")
}

fn backup_path(path: &Path) -> PathBuf {
    with_suffix(path, "bak")
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".");
    name.push(suffix);
    PathBuf::from(name)
}
