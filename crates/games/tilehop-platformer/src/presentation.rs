use serde::{Deserialize, Serialize};

use tilehop_core::timer::Countdown;

use crate::GameEvent;
use crate::level::CollectibleKind;
use crate::motion::MotionEvent;

/// Time between footstep sounds while walking.
pub const FOOTSTEP_INTERVAL_MS: f32 = 300.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PresentationConfig {
    pub footstep_interval_ms: f32,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            footstep_interval_ms: FOOTSTEP_INTERVAL_MS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundCue {
    Jump,
    Coin,
    Diamond,
    LevelComplete,
    Footstep,
    UiClick,
    Music,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleCue {
    WalkDustStart,
    WalkDustStop,
    JumpBurst,
    LandBurst,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TweenCue {
    JumpStretch,
    LandSquash,
    RespawnFlash,
    CollectPop,
}

/// Fire-and-forget trigger for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cue {
    Sound(SoundCue),
    Particles(ParticleCue),
    Tween(TweenCue),
}

/// Cues triggered by a single game event.
pub fn cues_for(event: &GameEvent) -> &'static [Cue] {
    match event {
        GameEvent::Motion(motion) => match motion {
            MotionEvent::WalkStart => &[Cue::Particles(ParticleCue::WalkDustStart)],
            MotionEvent::WalkStop => &[Cue::Particles(ParticleCue::WalkDustStop)],
            MotionEvent::Jump => &[
                Cue::Sound(SoundCue::Jump),
                Cue::Particles(ParticleCue::JumpBurst),
                Cue::Tween(TweenCue::JumpStretch),
            ],
            MotionEvent::Land => &[
                Cue::Particles(ParticleCue::LandBurst),
                Cue::Tween(TweenCue::LandSquash),
            ],
            MotionEvent::Respawn { .. } => &[Cue::Tween(TweenCue::RespawnFlash)],
        },
        GameEvent::Collected { kind, .. } => match kind {
            CollectibleKind::Coin => &[Cue::Sound(SoundCue::Coin), Cue::Tween(TweenCue::CollectPop)],
            CollectibleKind::Diamond => &[
                Cue::Sound(SoundCue::Diamond),
                Cue::Tween(TweenCue::CollectPop),
            ],
        },
        GameEvent::LevelComplete { .. } => &[Cue::Sound(SoundCue::LevelComplete)],
        GameEvent::MusicStart => &[Cue::Sound(SoundCue::Music)],
        GameEvent::Restarted(_) => &[Cue::Sound(SoundCue::UiClick)],
    }
}

/// Queue of cues to be processed each frame.
#[derive(Debug, Default)]
pub struct CueQueue {
    cues: Vec<Cue>,
}

impl CueQueue {
    pub fn push(&mut self, cue: Cue) {
        self.cues.push(cue);
    }

    pub fn push_event(&mut self, event: &GameEvent) {
        self.cues.extend_from_slice(cues_for(event));
    }

    pub fn extend_events<'a>(&mut self, events: impl IntoIterator<Item = &'a GameEvent>) {
        for event in events {
            self.push_event(event);
        }
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, Cue> {
        self.cues.drain(..)
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    pub fn clear(&mut self) {
        self.cues.clear();
    }
}

/// Paces footstep sounds: one on the first walking frame, then one per
/// interval for as long as walking continues.
#[derive(Debug, Clone)]
pub struct FootstepGate {
    interval_ms: f32,
    until_next: Countdown,
    walking: bool,
}

impl FootstepGate {
    pub fn new(interval_ms: f32) -> Self {
        Self {
            interval_ms,
            until_next: Countdown::EXPIRED,
            walking: false,
        }
    }

    /// Returns true when a footstep should play this frame.
    pub fn update(&mut self, walking: bool, dt_ms: f32) -> bool {
        if !walking {
            self.walking = false;
            return false;
        }
        if !self.walking {
            self.walking = true;
            self.until_next.reset(self.interval_ms);
            return true;
        }
        self.until_next.tick(dt_ms);
        if self.until_next.is_active() {
            return false;
        }
        self.until_next.reset(self.interval_ms);
        true
    }
}

impl Default for FootstepGate {
    fn default() -> Self {
        Self::new(FOOTSTEP_INTERVAL_MS)
    }
}
