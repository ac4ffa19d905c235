use serde::{Deserialize, Serialize};

use crate::motion::MotionConfig;
use crate::physics::PhysicsConfig;
use crate::presentation::PresentationConfig;
use crate::scoring::ScoringConfig;

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "TILEHOP_CONFIG";
/// Config file used when the environment variable is unset.
pub const DEFAULT_CONFIG_PATH: &str = "config/platformer.toml";

/// Top-level platformer configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformerConfig {
    pub motion: MotionConfig,
    pub physics: PhysicsConfig,
    pub scoring: ScoringConfig,
    pub presentation: PresentationConfig,
}

impl PlatformerConfig {
    /// Load config from a TOML file. Falls back to defaults if the file is missing
    /// or unparseable.
    pub fn load() -> Self {
        let path =
            std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(&path)
    }

    pub fn load_from(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::parse(&content) {
                Ok(cfg) => {
                    tracing::info!("Loaded platformer config from {path}");
                    cfg
                },
                Err(e) => {
                    tracing::warn!("Failed to parse {path}: {e}, using defaults");
                    PlatformerConfig::default()
                },
            },
            Err(_) => {
                tracing::info!("No config at {path}, using defaults");
                PlatformerConfig::default()
            },
        }
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
