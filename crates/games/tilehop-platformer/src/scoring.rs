use serde::{Deserialize, Serialize};

use tilehop_core::session::SessionState;
use tilehop_core::storage::HighScoreStore;

use crate::level::CollectibleKind;

/// Points per collectible kind, loadable from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub coin_points: u32,
    pub diamond_points: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            coin_points: 1,
            diamond_points: 5,
        }
    }
}

/// Points awarded for picking up a collectible.
pub fn collectible_points(kind: CollectibleKind, config: &ScoringConfig) -> u32 {
    match kind {
        CollectibleKind::Coin => config.coin_points,
        CollectibleKind::Diamond => config.diamond_points,
    }
}

/// Outcome of settling a session's score at restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestartSummary {
    pub final_score: u32,
    pub high_score: u32,
    pub new_record: bool,
}

/// Record the session score as the high score if it beats the stored one,
/// then reset the session score. The stored high score never decreases.
pub fn settle_session(session: &mut SessionState, store: &mut dyn HighScoreStore) -> RestartSummary {
    let final_score = session.score;
    let previous = store.high_score();
    let new_record = final_score > previous;
    if new_record {
        store.set_high_score(final_score);
        tracing::info!(final_score, previous, "New high score");
    }
    session.reset_score();
    RestartSummary {
        final_score,
        high_score: previous.max(final_score),
        new_record,
    }
}
