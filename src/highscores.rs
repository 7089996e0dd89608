//! Leaderboard port and in-memory leaderboard
//!
//! The simulation only ever records a final score; the menu reads a ranked
//! top-N list. Storage lives behind [`LeaderboardPort`] and is owned by the host.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_PLAYER_NAME, MAX_PLAYER_NAME_LEN};

/// Errors a leaderboard store can report
#[derive(Debug, thiserror::Error)]
pub enum LeaderboardError {
    #[error("leaderboard I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("leaderboard data is malformed: {0}")]
    Format(#[from] serde_json::Error),

    #[error("leaderboard unavailable: {0}")]
    Unavailable(String),
}

/// A sanitized player name: 1-20 printable characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct PlayerName(String);

impl PlayerName {
    /// Drop control characters, keep the first 20, trim; empty becomes "Player"
    pub fn new(raw: &str) -> Self {
        let kept: String = raw
            .chars()
            .filter(|c| !c.is_control())
            .take(MAX_PLAYER_NAME_LEN)
            .collect();
        let trimmed = kept.trim();
        if trimmed.is_empty() {
            Self::cancelled()
        } else {
            Self(trimmed.to_string())
        }
    }

    /// Name used when entry is cancelled
    pub fn cancelled() -> Self {
        Self(DEFAULT_PLAYER_NAME.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PlayerName {
    fn default() -> Self {
        Self::cancelled()
    }
}

impl From<String> for PlayerName {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl From<PlayerName> for String {
    fn from(name: PlayerName) -> Self {
        name.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A finished run as stored on the leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub player_name: PlayerName,
    pub score: u64,
}

impl ScoreRecord {
    pub fn new(player_name: PlayerName, score: u64) -> Self {
        Self { player_name, score }
    }
}

/// Narrow interface to wherever scores are kept
pub trait LeaderboardPort {
    /// Store a finished run
    fn record_score(&mut self, record: &ScoreRecord) -> Result<(), LeaderboardError>;

    /// Up to `limit` records, highest score first; ties keep insertion order
    fn top_scores(&self, limit: usize) -> Result<Vec<ScoreRecord>, LeaderboardError>;
}

impl<T: LeaderboardPort + ?Sized> LeaderboardPort for &mut T {
    fn record_score(&mut self, record: &ScoreRecord) -> Result<(), LeaderboardError> {
        (**self).record_score(record)
    }

    fn top_scores(&self, limit: usize) -> Result<Vec<ScoreRecord>, LeaderboardError> {
        (**self).top_scores(limit)
    }
}

impl<T: LeaderboardPort + ?Sized> LeaderboardPort for Box<T> {
    fn record_score(&mut self, record: &ScoreRecord) -> Result<(), LeaderboardError> {
        (**self).record_score(record)
    }

    fn top_scores(&self, limit: usize) -> Result<Vec<ScoreRecord>, LeaderboardError> {
        (**self).top_scores(limit)
    }
}

/// Fetch for display; a failing store reads as an empty board
pub fn top_scores_or_empty(port: &dyn LeaderboardPort, limit: usize) -> Vec<ScoreRecord> {
    match port.top_scores(limit) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("Could not load leaderboard: {e}");
            Vec::new()
        }
    }
}

/// Leaderboard lines as the menu shows them
pub fn format_ranked(entries: &[ScoreRecord]) -> Vec<String> {
    if entries.is_empty() {
        return vec!["No scores yet!".to_string()];
    }
    entries
        .iter()
        .enumerate()
        .map(|(i, e)| format!("{}. {} - {}", i + 1, e.player_name, e.score))
        .collect()
}

/// In-memory leaderboard, kept sorted by score (descending)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<ScoreRecord>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Rank (1-indexed) a score would get if recorded now
    pub fn potential_rank(&self, score: u64) -> usize {
        self.entries
            .iter()
            .position(|e| score > e.score)
            .unwrap_or(self.entries.len())
            + 1
    }

    /// Insert a record after any equal scores; returns its rank (1-indexed)
    pub fn add_score(&mut self, record: ScoreRecord) -> usize {
        let pos = self.potential_rank(record.score) - 1;
        self.entries.insert(pos, record);
        pos + 1
    }

    /// Restore descending order after loading from an untrusted source
    pub fn normalize_order(&mut self) {
        // Stable sort keeps insertion order among ties
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }
}

impl LeaderboardPort for HighScores {
    fn record_score(&mut self, record: &ScoreRecord) -> Result<(), LeaderboardError> {
        self.add_score(record.clone());
        Ok(())
    }

    fn top_scores(&self, limit: usize) -> Result<Vec<ScoreRecord>, LeaderboardError> {
        Ok(self.entries.iter().take(limit).cloned().collect())
    }
}
