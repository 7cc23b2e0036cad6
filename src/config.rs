use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::error::ConfigError;

/// Sound cue assignments and volumes.
///
/// The win and game-over cues ship unassigned; leaving them `None` keeps
/// those moments silent rather than failing at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioConfig {
    /// Path to the card-flip cue
    pub flip_sound: String,

    /// Path to the successful-match cue
    pub match_sound: String,

    /// Path to the looping background track
    pub music: String,

    /// Optional cue played on winning
    #[serde(default)]
    pub win_sound: Option<String>,

    /// Optional cue played on timeout
    #[serde(default)]
    pub game_over_sound: Option<String>,

    /// Volume for one-shot cues (0.0 to 1.0)
    pub effects_volume: f32,

    /// Volume for background music (0.0 to 1.0)
    pub music_volume: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            flip_sound: "assets/audio/flip-card.mp3".to_string(),
            match_sound: "assets/audio/correct.mp3".to_string(),
            music: "assets/audio/fancy.mp3".to_string(),
            win_sound: None,
            game_over_sound: None,
            effects_volume: 0.4,
            music_volume: 0.1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Session length in seconds
    pub total_time_secs: u32,

    /// Number of card pairs on the board
    pub pairs: usize,

    /// Board columns used when rendering
    pub columns: usize,

    /// Delay between hiding the cards and dealing the shuffled board (ms)
    pub start_delay_ms: u64,

    /// How long a mismatched pair stays face-up (ms)
    pub mismatch_delay_ms: u64,

    /// Fixed shuffle seed for reproducible boards
    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default)]
    pub audio: AudioConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            total_time_secs: 100,
            pairs: 8,
            columns: 4,
            start_delay_ms: 500,
            mismatch_delay_ms: 1000,
            seed: None,
            audio: AudioConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from the platform-specific config directory.
    /// Creates a default config file if none exists.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = fs::read_to_string(&config_path).map_err(|e| {
                ConfigError::LoadFailed {
                    path: config_path.display().to_string(),
                    source: Box::new(e),
                }
            })?;
            let config: Config =
                serde_json::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                    path: config_path.display().to_string(),
                    source: Box::new(e),
                })?;
            config.validate()?;

            tracing::info!("Loaded config from: {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save()?;
            tracing::info!("Created default config at: {}", config_path.display());
            Ok(config)
        }
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::SaveFailed {
                path: config_path.display().to_string(),
                source: Box::new(e),
            })?;
        }

        let json = serde_json::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: config_path.display().to_string(),
            source: Box::new(e),
        })?;
        fs::write(&config_path, json).map_err(|e| ConfigError::SaveFailed {
            path: config_path.display().to_string(),
            source: Box::new(e),
        })?;

        Ok(())
    }

    /// Reject configurations the session cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pairs < 2 {
            return Err(ConfigError::Invalid(
                "pairs must be at least 2".to_string(),
            ));
        }
        if self.total_time_secs == 0 {
            return Err(ConfigError::Invalid(
                "total_time_secs must be positive".to_string(),
            ));
        }
        if self.columns == 0 {
            return Err(ConfigError::Invalid("columns must be positive".to_string()));
        }
        Ok(())
    }

    /// Get the config file path (platform config directory)
    fn config_path() -> Result<PathBuf, ConfigError> {
        let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(base.join("memory-match").join("config.json"))
    }

    /// Get the config directory path (for display purposes)
    pub fn config_dir_display() -> String {
        Self::config_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|_| "unknown".to_string())
    }
}
