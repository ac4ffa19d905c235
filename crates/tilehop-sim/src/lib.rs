pub mod runner;
pub mod script;

/// Environment variable naming the high-score file.
pub const HIGH_SCORE_ENV: &str = "TILEHOP_HIGH_SCORE";
/// High-score file used when the environment variable is unset.
pub const DEFAULT_HIGH_SCORE_PATH: &str = "tilehop-highscore.json";
