use tracing_subscriber::EnvFilter;

use tilehop_core::scene::LevelScene;
use tilehop_core::session::SessionState;
use tilehop_core::storage::{FileHighScores, HighScoreStore};
use tilehop_platformer::Platformer;
use tilehop_platformer::config::PlatformerConfig;
use tilehop_sim::script::{self, Playback};
use tilehop_sim::{DEFAULT_HIGH_SCORE_PATH, HIGH_SCORE_ENV, runner};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let steps = match std::env::args().nth(1) {
        Some(path) => script::load(&path).inspect(|_| tracing::info!("Playing script {path}")),
        None => script::parse(script::DEMO),
    };
    let steps = match steps {
        Ok(steps) => steps,
        Err(e) => {
            tracing::error!("Invalid input script: {e}");
            std::process::exit(1);
        },
    };

    let config = PlatformerConfig::load();
    let high_score_path =
        std::env::var(HIGH_SCORE_ENV).unwrap_or_else(|_| DEFAULT_HIGH_SCORE_PATH.to_string());
    let mut store = FileHighScores::open(high_score_path);
    let mut game = Platformer::new(config);
    let mut session = SessionState::new();

    let metadata = game.metadata();
    tracing::info!(
        name = %metadata.name,
        high_score = store.high_score(),
        store = %store.path().display(),
        "Tilehop simulation starting"
    );

    let report = runner::run(&mut game, &mut session, &mut store, Playback::new(steps));

    tracing::info!(
        frames = report.frames,
        elapsed_ms = report.elapsed_ms,
        score = report.score,
        jumps = report.jumps,
        respawns = report.respawns,
        collected = report.collected,
        completed = report.completed,
        "Run finished"
    );
    tracing::info!(
        high_score = report.restart.high_score,
        new_record = report.restart.new_record,
        "Session settled"
    );
}
