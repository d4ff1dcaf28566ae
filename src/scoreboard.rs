//! Cumulative match outcome counters and their on-disk form.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ScoreboardError;
use crate::game::{MatchOutcome, Side};

/// Receives exactly one outcome per finished match.
pub trait OutcomeSink {
    fn record_outcome(&mut self, outcome: MatchOutcome);
}

/// Win and draw counts across matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scoreboard {
    pub red_wins: u64,
    pub yellow_wins: u64,
    pub draws: u64,
}

impl Scoreboard {
    pub fn wins(&self, side: Side) -> u64 {
        match side {
            Side::Red => self.red_wins,
            Side::Yellow => self.yellow_wins,
        }
    }

    pub fn total(&self) -> u64 {
        self.red_wins + self.yellow_wins + self.draws
    }

    pub fn load(path: &Path) -> Result<Self, ScoreboardError> {
        let json = fs::read_to_string(path).map_err(|e| ScoreboardError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&json).map_err(|e| ScoreboardError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Load the scoreboard, starting from zero if the file does not exist yet.
    pub fn load_or_default(path: &Path) -> Result<Self, ScoreboardError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Write the scoreboard as JSON, replacing the file atomically.
    pub fn save(&self, path: &Path) -> Result<(), ScoreboardError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(self)?)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }
}

impl OutcomeSink for Scoreboard {
    fn record_outcome(&mut self, outcome: MatchOutcome) {
        match outcome {
            MatchOutcome::Winner(Side::Red) => self.red_wins += 1,
            MatchOutcome::Winner(Side::Yellow) => self.yellow_wins += 1,
            MatchOutcome::Draw => self.draws += 1,
        }
    }
}
