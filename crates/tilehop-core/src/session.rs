use serde::{Deserialize, Serialize};

/// Session-wide state shared by consecutive runs of a level.
///
/// Owned by the top-level driver and threaded into the scene on every call.
/// The score persists across a restart only until the restart settles it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub score: u32,
    pub music_started: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add points and return the new total.
    pub fn add_points(&mut self, points: u32) -> u32 {
        self.score = self.score.saturating_add(points);
        self.score
    }

    pub fn reset_score(&mut self) {
        self.score = 0;
    }
}
