//! Append-only score log and the leaderboard built from it.
//!
//! Each finished run appends `username:score` to a text file. The
//! leaderboard keeps only the best score per user.

use std::collections::HashMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreEntry {
    pub username: String,
    pub score: u32,
}

impl ScoreEntry {
    pub fn new(username: impl Into<String>, score: u32) -> Self {
        Self {
            username: username.into(),
            score,
        }
    }
}

/// Parse one `username:score` line. Anything else is `None`.
pub fn parse_line(line: &str) -> Option<ScoreEntry> {
    let (username, score) = line.trim_end_matches('\r').split_once(':')?;
    if username.is_empty() {
        return None;
    }
    let score = score.trim().parse().ok()?;
    Some(ScoreEntry::new(username, score))
}

/// Best score per user, highest first; equal scores are ordered by name.
/// Malformed lines are skipped.
pub fn best_scores<'a, I>(lines: I) -> Vec<ScoreEntry>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: HashMap<String, u32> = HashMap::new();
    for line in lines {
        let Some(entry) = parse_line(line) else {
            if !line.trim().is_empty() {
                log::debug!("skipping malformed score line {:?}", line);
            }
            continue;
        };
        let slot = best.entry(entry.username).or_insert(entry.score);
        *slot = (*slot).max(entry.score);
    }

    let mut scores: Vec<ScoreEntry> = best
        .into_iter()
        .map(|(username, score)| ScoreEntry { username, score })
        .collect();
    scores.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.username.cmp(&b.username)));
    scores
}

#[derive(Clone, Debug)]
pub struct ScoreLog {
    path: PathBuf,
}

impl ScoreLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one result, creating the file if needed.
    pub fn append(&self, username: &str, score: u32) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}:{}", username, score)?;
        log::info!("saved score {} for {}", score, username);
        Ok(())
    }

    /// Best score per user from the log. A missing or unreadable file reads
    /// as empty.
    pub fn best_scores(&self) -> Vec<ScoreEntry> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => best_scores(text.lines()),
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    log::warn!("could not read {}: {}", self.path.display(), e);
                }
                Vec::new()
            }
        }
    }

    /// The top `n` of [`best_scores`](Self::best_scores).
    pub fn leaderboard(&self, n: usize) -> Vec<ScoreEntry> {
        let mut scores = self.best_scores();
        scores.truncate(n);
        scores
    }
}
