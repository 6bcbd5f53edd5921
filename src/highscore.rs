//! Top-N high-score table persisted as `name,score` lines.
//!
//! Loading is forgiving: a missing file is an empty table, and lines that do
//! not parse are skipped with a warning.  Saving overwrites the whole file.

use crate::config::GameConfig;
use crate::error::{GameError, GameResult};
use bevy::prelude::*;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScoreEntry {
    pub name: String,
    pub score: u32,
}

impl HighScoreEntry {
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct HighScores {
    entries: Vec<HighScoreEntry>,
    path: PathBuf,
    capacity: usize,
    max_name_length: usize,
}

impl HighScores {
    /// An empty table backed by `path`.
    pub fn empty(path: impl Into<PathBuf>, config: &GameConfig) -> Self {
        Self {
            entries: Vec::new(),
            path: path.into(),
            capacity: config.top_scores_count,
            max_name_length: config.max_name_length,
        }
    }

    /// Read the table from `path`.  Never fails: unreadable files are logged
    /// and treated as empty.
    pub fn load(path: impl Into<PathBuf>, config: &GameConfig) -> Self {
        let mut scores = Self::empty(path, config);
        match read_file(&scores.path) {
            Ok(Some(contents)) => {
                scores.entries = scores.parse(&contents);
                info!(
                    "Loaded {} high scores from {}",
                    scores.entries.len(),
                    scores.path.display()
                );
            }
            Ok(None) => {}
            Err(err) => warn!("{err}"),
        }
        scores
    }

    /// Parse `name,score` lines, keeping the best `capacity` in descending
    /// order.  Malformed lines are dropped.
    pub fn parse(&self, contents: &str) -> Vec<HighScoreEntry> {
        let mut entries: Vec<HighScoreEntry> = contents
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .filter_map(|(index, line)| match parse_record(index + 1, line) {
                Ok(entry) => Some(entry),
                Err(err) => {
                    warn!("Skipping high score: {err}");
                    None
                }
            })
            .collect();
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(self.capacity);
        entries
    }

    pub fn entries(&self) -> &[HighScoreEntry] {
        &self.entries
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True when `score` would earn a place in the table.
    pub fn is_high_score(&self, score: u32) -> bool {
        if self.entries.len() < self.capacity {
            return true;
        }
        self.entries
            .last()
            .is_some_and(|lowest| score > lowest.score)
    }

    /// Insert without saving.  Ties rank below existing entries.
    pub fn insert(&mut self, name: &str, score: u32) {
        let name = sanitize_name(name, self.max_name_length);
        self.entries.push(HighScoreEntry::new(name, score));
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(self.capacity);
    }

    /// Insert and persist.  Write failures are logged, never raised.
    pub fn add_score(&mut self, name: &str, score: u32) {
        self.insert(name, score);
        match self.save() {
            Ok(()) => info!("Saved high score {score} for {name}"),
            Err(err) => error!("{err}"),
        }
    }

    pub fn save(&self) -> GameResult<()> {
        fs::write(&self.path, self.to_file_contents()).map_err(|source| {
            GameError::HighScoreWrite {
                path: self.path.clone(),
                source,
            }
        })
    }

    /// Numbered table rows, padded with `---: 0` up to capacity.
    pub fn display_lines(&self) -> Vec<String> {
        (0..self.capacity)
            .map(|i| match self.entries.get(i) {
                Some(entry) => format!("{}. {}: {}", i + 1, entry.name, entry.score),
                None => format!("{}. ---: 0", i + 1),
            })
            .collect()
    }

    pub fn to_file_contents(&self) -> String {
        self.entries
            .iter()
            .map(|entry| format!("{},{}\n", entry.name, entry.score))
            .collect()
    }
}

fn read_file(path: &Path) -> GameResult<Option<String>> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(GameError::HighScoreRead {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn parse_record(line_number: usize, line: &str) -> GameResult<HighScoreEntry> {
    let malformed = |reason| GameError::MalformedRecord {
        line: line_number,
        reason,
    };
    let (name, score) = line
        .trim()
        .split_once(',')
        .ok_or_else(|| malformed("missing comma"))?;
    let score = score
        .trim()
        .parse::<u32>()
        .map_err(|_| malformed("score is not a non-negative integer"))?;
    Ok(HighScoreEntry::new(name.trim(), score))
}

/// Commas would break the file format; long names would break the layout.
fn sanitize_name(name: &str, max_len: usize) -> String {
    let kept: String = name.chars().filter(|c| *c != ',').collect();
    kept.trim().chars().take(max_len).collect::<String>().trim_end().to_string()
}
