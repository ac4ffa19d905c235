use tilehop_core::scene::LevelScene;
use tilehop_core::session::SessionState;
use tilehop_core::storage::HighScoreStore;
use tilehop_platformer::motion::MotionEvent;
use tilehop_platformer::presentation::{Cue, CueQueue, FootstepGate, SoundCue};
use tilehop_platformer::scoring::RestartSummary;
use tilehop_platformer::{GameEvent, Platformer};

use crate::script::Playback;

/// What happened during a scripted run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub frames: u32,
    pub elapsed_ms: f32,
    pub score: u32,
    pub jumps: u32,
    pub respawns: u32,
    pub collected: u32,
    pub cues: u32,
    pub completed: bool,
    pub restart: RestartSummary,
}

/// Drive the scene at its frame rate until the script runs out, then
/// restart it so the score is settled against the store.
pub fn run(
    game: &mut Platformer,
    session: &mut SessionState,
    store: &mut dyn HighScoreStore,
    mut playback: Playback,
) -> RunReport {
    let dt_ms = 1000.0 / game.frame_rate();
    let mut queue = CueQueue::default();
    let mut footsteps = FootstepGate::new(game.config().presentation.footstep_interval_ms);

    let mut report = RunReport {
        frames: 0,
        elapsed_ms: 0.0,
        score: 0,
        jumps: 0,
        respawns: 0,
        collected: 0,
        cues: 0,
        completed: false,
        restart: RestartSummary {
            final_score: 0,
            high_score: store.high_score(),
            new_record: false,
        },
    };

    let events = game.init(session);
    queue.extend_events(&events);
    report.cues += flush(&mut queue);

    while let Some(controls) = playback.next_frame(dt_ms) {
        let events = game.update(session, dt_ms, &controls);
        report.frames += 1;
        report.elapsed_ms += dt_ms;

        for event in &events {
            match event {
                GameEvent::Motion(MotionEvent::Jump) => report.jumps += 1,
                GameEvent::Motion(MotionEvent::Respawn { x, y }) => {
                    report.respawns += 1;
                    tracing::info!(x, y, frame = report.frames, "Player respawned");
                },
                GameEvent::Collected { kind, score, .. } => {
                    report.collected += 1;
                    tracing::info!(?kind, score, "Collected");
                },
                GameEvent::LevelComplete { score } => {
                    tracing::info!(score, frame = report.frames, "Level complete");
                },
                _ => {},
            }
        }
        queue.extend_events(&events);
        if footsteps.update(game.is_walking(), dt_ms) {
            queue.push(Cue::Sound(SoundCue::Footstep));
        }
        report.cues += flush(&mut queue);

        if game.is_game_over() {
            report.completed = true;
            break;
        }
    }

    report.score = session.score;
    for event in game.restart(session, store) {
        if let GameEvent::Restarted(summary) = event {
            report.restart = summary;
        }
    }
    report
}

fn flush(queue: &mut CueQueue) -> u32 {
    let mut count = 0;
    for cue in queue.drain() {
        tracing::debug!(?cue, "Cue");
        count += 1;
    }
    count
}
