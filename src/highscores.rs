//! High score leaderboard
//!
//! Top 10 scores, persisted as plain `score,name,epochMillis` lines. Store
//! I/O is best-effort: a failed read yields an empty table, a failed write
//! drops the save, and malformed lines are skipped one by one. Nothing here
//! is ever fatal to the game.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single leaderboard entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub score: u64,
    pub name: String,
    /// Unix timestamp (ms) when achieved; breaks score ties, newest first
    pub timestamp_ms: u64,
}

impl HighScoreEntry {
    /// Parse one persisted line; `None` for anything malformed
    pub fn parse(line: &str) -> Option<Self> {
        let mut parts = line.trim().splitn(3, ',');
        let score = parts.next()?.parse().ok()?;
        let name = parts.next()?.to_string();
        let timestamp_ms = parts.next()?.parse().ok()?;
        if name.is_empty() {
            return None;
        }
        Some(Self {
            score,
            name,
            timestamp_ms,
        })
    }

    /// The persisted line format
    pub fn to_line(&self) -> String {
        format!("{},{},{}", self.score, self.name, self.timestamp_ms)
    }
}

/// In-memory leaderboard, always sorted and truncated
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a score would make the board
    pub fn qualifies(&self, score: u64) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Merge a record in, keeping the board sorted by score descending with
    /// ties broken by recency. Returns the 1-indexed rank achieved, or
    /// `None` if the record fell off the bottom.
    pub fn insert(&mut self, score: u64, name: &str, timestamp_ms: u64) -> Option<usize> {
        let name = if name.is_empty() { "Player" } else { name };
        self.entries.push(HighScoreEntry {
            score,
            name: name.to_string(),
            timestamp_ms,
        });
        self.normalize();
        self.entries
            .iter()
            .position(|e| e.score == score && e.name == name && e.timestamp_ms == timestamp_ms)
            .map(|i| i + 1)
    }

    /// Re-sort and truncate (idempotent; applied after every mutation)
    fn normalize(&mut self) {
        self.entries
            .sort_by(|a, b| b.score.cmp(&a.score).then(b.timestamp_ms.cmp(&a.timestamp_ms)));
        self.entries.truncate(MAX_HIGH_SCORES);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }

    /// Plain-text listing for menu shells: `rank. score - name`
    pub fn formatted(&self) -> Vec<String> {
        if self.entries.is_empty() {
            return vec!["No scores yet!".to_string()];
        }
        self.entries
            .iter()
            .enumerate()
            .map(|(i, e)| format!("{}. {} - {}", i + 1, e.score, e.name))
            .collect()
    }
}

/// File-backed score store
#[derive(Debug, Clone)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location in the user's home directory
    pub fn default_path() -> PathBuf {
        std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_default()
            .join("lane_hopper_highscores.txt")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the table. A missing or unreadable file is an empty table;
    /// malformed lines are dropped individually.
    pub fn load(&self) -> HighScores {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return HighScores::new(),
            Err(err) => {
                log::warn!("failed to read high scores from {:?}: {err}", self.path);
                return HighScores::new();
            }
        };

        let mut scores = HighScores::new();
        for line in text.lines() {
            if line.trim().is_empty() {
                continue;
            }
            match HighScoreEntry::parse(line) {
                Some(entry) => scores.entries.push(entry),
                None => log::warn!("skipping malformed high score line: {line:?}"),
            }
        }
        scores.normalize();
        scores
    }

    /// Rewrite the whole table. Write failures are logged and dropped.
    pub fn save(&self, scores: &HighScores) {
        let mut text = String::new();
        for entry in &scores.entries {
            text.push_str(&entry.to_line());
            text.push('\n');
        }
        if let Err(err) = fs::write(&self.path, text) {
            log::warn!("failed to save high scores to {:?}: {err}", self.path);
        } else {
            log::info!("saved {} high scores", scores.entries.len());
        }
    }

    /// Merge one record into the persisted table; returns the rank achieved
    pub fn record(&self, score: u64, name: &str, timestamp_ms: u64) -> Option<usize> {
        let mut scores = self.load();
        let rank = scores.insert(score, name, timestamp_ms);
        self.save(&scores);
        rank
    }
}
