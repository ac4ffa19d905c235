pub mod config;
pub mod level;
pub mod motion;
pub mod physics;
pub mod presentation;
pub mod scoring;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use tilehop_core::scene::{LevelScene, SceneMetadata};
use tilehop_core::session::SessionState;
use tilehop_core::storage::HighScoreStore;

use config::PlatformerConfig;
use level::{CollectibleKind, Level, level_one};
use motion::{Animation, ControlInput, Facing, MotionEvent, PlayerState, TickInput};
use physics::ArcadeBody;
use scoring::{RestartSummary, collectible_points, settle_session};

/// Events emitted by a frame of the platformer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Motion(MotionEvent),
    Collected {
        kind: CollectibleKind,
        points: u32,
        score: u32,
    },
    LevelComplete {
        score: u32,
    },
    MusicStart,
    Restarted(RestartSummary),
}

/// The single-level platformer scene.
pub struct Platformer {
    config: PlatformerConfig,
    /// Pristine copy the live level is rebuilt from.
    template: Level,
    level: Level,
    player: PlayerState,
    body: ArcadeBody,
    animation: Animation,
    walking: bool,
    game_over: bool,
    elapsed_ms: f32,
}

impl Platformer {
    pub fn new(config: PlatformerConfig) -> Self {
        Self::with_level(config, level_one())
    }

    pub fn with_level(config: PlatformerConfig, level: Level) -> Self {
        let player = PlayerState::new(level.spawn_x, level.spawn_y);
        let body = ArcadeBody::new(level.spawn_x, level.spawn_y);
        Self {
            config,
            template: level.clone(),
            level,
            player,
            body,
            animation: Animation::Idle,
            walking: false,
            game_over: false,
            elapsed_ms: 0.0,
        }
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn body(&self) -> &ArcadeBody {
        &self.body
    }

    pub fn config(&self) -> &PlatformerConfig {
        &self.config
    }

    pub fn animation(&self) -> Animation {
        self.animation
    }

    pub fn facing(&self) -> Facing {
        self.player.facing
    }

    /// Walking on the ground this frame (drives footsteps and dust).
    pub fn is_walking(&self) -> bool {
        self.walking
    }

    pub fn elapsed_ms(&self) -> f32 {
        self.elapsed_ms
    }

    fn reset_level(&mut self) {
        self.level = self.template.clone();
        self.player = PlayerState::new(self.level.spawn_x, self.level.spawn_y);
        self.body = ArcadeBody::new(self.level.spawn_x, self.level.spawn_y);
        self.animation = Animation::Idle;
        self.walking = false;
        self.game_over = false;
        self.elapsed_ms = 0.0;
    }

    fn overlaps(&self, x: f32, y: f32) -> bool {
        let reach_x = self.config.physics.body_width / 2.0 + self.level.tile_size / 2.0;
        let reach_y = self.config.physics.body_height / 2.0 + self.level.tile_size / 2.0;
        (self.body.x - x).abs() < reach_x && (self.body.y - y).abs() < reach_y
    }

    fn collect_pickups(&mut self, session: &mut SessionState, events: &mut Vec<GameEvent>) {
        let hits: Vec<usize> = self
            .level
            .collectibles
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.collected && self.overlaps(c.x, c.y))
            .map(|(i, _)| i)
            .collect();

        for i in hits {
            let pickup = &mut self.level.collectibles[i];
            pickup.collected = true;
            let points = collectible_points(pickup.kind, &self.config.scoring);
            let score = session.add_points(points);
            tracing::debug!(kind = ?pickup.kind, points, score, "Collected");
            events.push(GameEvent::Collected {
                kind: pickup.kind,
                points,
                score,
            });
        }
    }

    fn check_end_flag(&mut self, session: &SessionState, events: &mut Vec<GameEvent>) {
        if self.game_over {
            return;
        }
        let Some(flag) = self.level.end_flag else {
            return;
        };
        if self.overlaps(flag.x, flag.y) {
            self.game_over = true;
            tracing::info!(
                score = session.score,
                elapsed_ms = self.elapsed_ms,
                "Reached the end of the level"
            );
            events.push(GameEvent::LevelComplete {
                score: session.score,
            });
        }
    }
}

impl Default for Platformer {
    fn default() -> Self {
        Self::new(PlatformerConfig::default())
    }
}

impl LevelScene for Platformer {
    type Input = ControlInput;
    type Event = GameEvent;

    fn metadata(&self) -> SceneMetadata {
        SceneMetadata {
            name: "Tilehop".to_string(),
            description: "Collect coins and diamonds, then reach the flag.".to_string(),
            estimated_duration: Duration::from_secs(90),
        }
    }

    fn init(&mut self, session: &mut SessionState) -> Vec<GameEvent> {
        self.reset_level();
        let mut events = Vec::new();
        if !session.music_started {
            session.music_started = true;
            events.push(GameEvent::MusicStart);
        }
        tracing::debug!(
            spawn_x = self.level.spawn_x,
            spawn_y = self.level.spawn_y,
            score = session.score,
            "Level started"
        );
        events
    }

    fn update(
        &mut self,
        session: &mut SessionState,
        dt_ms: f32,
        input: &ControlInput,
    ) -> Vec<GameEvent> {
        let dt_ms = if dt_ms.is_finite() && dt_ms > 0.0 {
            dt_ms
        } else {
            0.0
        };
        self.elapsed_ms += dt_ms;

        let snapshot = TickInput {
            dt_ms,
            controls: *input,
            grounded: self.body.blocked_down,
            x: self.body.x,
            y: self.body.y,
            vx: self.body.vx,
            vy: self.body.vy,
            world_height: self.level.world_height(),
        };
        let cmd = motion::tick(&mut self.player, &snapshot, &self.level, &self.config.motion);
        self.animation = cmd.animation;
        self.walking = cmd.walking;

        self.body.apply(&cmd);
        self.body.step(&self.level, &self.config.physics, dt_ms);

        let mut events: Vec<GameEvent> = cmd.events.into_iter().map(GameEvent::Motion).collect();
        self.collect_pickups(session, &mut events);
        self.check_end_flag(session, &mut events);
        events
    }

    fn restart(
        &mut self,
        session: &mut SessionState,
        store: &mut dyn HighScoreStore,
    ) -> Vec<GameEvent> {
        let summary = settle_session(session, store);
        tracing::info!(
            final_score = summary.final_score,
            high_score = summary.high_score,
            "Restarting level"
        );
        let mut events = vec![GameEvent::Restarted(summary)];
        events.extend(self.init(session));
        events
    }

    fn is_game_over(&self) -> bool {
        self.game_over
    }
}
