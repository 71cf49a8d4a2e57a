//! Player progression: level, XP, unlocked capabilities and answer history.

use super::constants::XP_PER_LEVEL_STEP;
use super::task::Task;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One answered task in the player's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub task: Task,
    pub correct: bool,
    pub timestamp: DateTime<Utc>,
}

/// Progression data for a single player. Lives for one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    level: u32,
    /// Cumulative XP; never reset on level-up.
    xp: u64,
    capabilities: BTreeSet<String>,
    history: Vec<HistoryEntry>,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}

/// XP at which a player of `level` advances to the next level.
pub fn xp_threshold(level: u32) -> u64 {
    level as u64 * XP_PER_LEVEL_STEP
}

impl PlayerState {
    pub fn new() -> Self {
        Self {
            level: 1,
            xp: 0,
            capabilities: BTreeSet::new(),
            history: Vec::new(),
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Cumulative XP. Only ever grows, through [`Self::add_xp`].
    pub fn xp(&self) -> u64 {
        self.xp
    }

    /// Adds XP and levels up until `xp < level * 100`.
    /// Returns the number of levels gained.
    pub fn add_xp(&mut self, amount: u64) -> u32 {
        self.xp += amount;

        let mut levels_gained = 0;
        while self.xp >= xp_threshold(self.level) {
            self.level += 1;
            levels_gained += 1;
        }
        levels_gained
    }

    /// XP still missing before the next level-up.
    pub fn xp_to_next_level(&self) -> u64 {
        xp_threshold(self.level).saturating_sub(self.xp)
    }

    /// Unlock a capability. Returns true if it was not unlocked before.
    pub fn unlock_capability(&mut self, id: &str) -> bool {
        if self.capabilities.contains(id) {
            return false;
        }
        self.capabilities.insert(id.to_string())
    }

    pub fn has_capability(&self, id: &str) -> bool {
        self.capabilities.contains(id)
    }

    pub fn capabilities(&self) -> &BTreeSet<String> {
        &self.capabilities
    }

    /// Append an answered task to the history.
    pub fn log_task(&mut self, task: Task, correct: bool) {
        self.history.push(HistoryEntry {
            task,
            correct,
            timestamp: Utc::now(),
        });
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }
}
