pub mod scene;
pub mod session;
pub mod storage;
pub mod timer;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::scene::LevelScene;
    use crate::session::SessionState;
    use crate::storage::{HighScoreStore, MemoryHighScores};

    /// Frame length in milliseconds at 60 Hz.
    pub const FRAME_MS: f32 = 1000.0 / 60.0;

    /// Run `n` frames with the same input, returning all accumulated events.
    pub fn run_frames<S: LevelScene>(
        scene: &mut S,
        session: &mut SessionState,
        n: usize,
        dt_ms: f32,
        input: &S::Input,
    ) -> Vec<S::Event> {
        let mut all_events = Vec::new();
        for _ in 0..n {
            all_events.extend(scene.update(session, dt_ms, input));
        }
        all_events
    }

    /// Run frames until `done` returns true or `max_frames` elapse.
    /// Returns the number of frames run.
    pub fn run_until<S: LevelScene>(
        scene: &mut S,
        session: &mut SessionState,
        max_frames: usize,
        dt_ms: f32,
        input: &S::Input,
        mut done: impl FnMut(&S) -> bool,
    ) -> usize {
        for frame in 0..max_frames {
            if done(scene) {
                return frame;
            }
            scene.update(session, dt_ms, input);
        }
        max_frames
    }

    // ================================================================
    // Scene Contract Tests
    // ================================================================
    // Every LevelScene implementation should pass these. Game crates call
    // them from their own tests with a concrete scene instance.

    /// restart() must zero the session score and never lower the high score.
    pub fn contract_restart_settles_score<S: LevelScene>(scene: &mut S, earned: u32) {
        let mut session = SessionState::new();
        let mut store = MemoryHighScores::with_score(earned + 10);
        scene.init(&mut session);
        session.add_points(earned);

        scene.restart(&mut session, &mut store);
        assert_eq!(session.score, 0, "restart must reset the session score");
        assert_eq!(
            store.high_score(),
            earned + 10,
            "restart must not lower an existing high score"
        );

        session.add_points(earned + 20);
        scene.restart(&mut session, &mut store);
        assert_eq!(
            store.high_score(),
            earned + 20,
            "restart must record a better score"
        );
    }

    /// init() must leave the level in a not-finished state, even after a
    /// previous run reached game over.
    pub fn contract_init_starts_fresh<S: LevelScene>(scene: &mut S) {
        let mut session = SessionState::new();
        scene.init(&mut session);
        assert!(!scene.is_game_over(), "fresh level must not be game over");
    }

    /// Music starts once per session, not once per restart.
    pub fn contract_music_starts_once<S: LevelScene>(scene: &mut S) {
        let mut session = SessionState::new();
        let mut store = MemoryHighScores::new();
        scene.init(&mut session);
        assert!(session.music_started, "init must start the music");
        let after_first = session.clone();
        scene.restart(&mut session, &mut store);
        assert_eq!(session.music_started, after_first.music_started);
    }
}
