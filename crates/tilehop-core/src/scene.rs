use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::session::SessionState;
use crate::storage::HighScoreStore;

/// Core trait that every Tilehop level implements.
///
/// The driver owns the frame loop, input polling, and presentation;
/// the scene only handles level logic. Session state is passed in
/// explicitly so score survives a restart without any global registry.
pub trait LevelScene {
    /// Per-frame control state supplied by the input collaborator.
    type Input;
    /// Events emitted by a frame (presentation triggers, scoring, completion).
    type Event;

    /// Scene metadata for the title screen.
    fn metadata(&self) -> SceneMetadata;

    /// Called once when the level starts. Builds fresh level and player state.
    fn init(&mut self, session: &mut SessionState) -> Vec<Self::Event>;

    /// Called each frame with the elapsed time in milliseconds.
    fn update(
        &mut self,
        session: &mut SessionState,
        dt_ms: f32,
        input: &Self::Input,
    ) -> Vec<Self::Event>;

    /// Tear the level down and start it again. Settles the session score
    /// against the high-score store before resetting it.
    fn restart(
        &mut self,
        session: &mut SessionState,
        store: &mut dyn HighScoreStore,
    ) -> Vec<Self::Event>;

    /// Frame rate the scene expects to be driven at, in Hz.
    fn frame_rate(&self) -> f32 {
        60.0
    }

    /// Whether the level has been finished (end reached).
    fn is_game_over(&self) -> bool;
}

/// Scene metadata for the title screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneMetadata {
    pub name: String,
    pub description: String,
    pub estimated_duration: Duration,
}
