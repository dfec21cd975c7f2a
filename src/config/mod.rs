pub mod loader;
pub mod tunables;

use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::game::{
    DEFAULT_VOLUME, FALL_INTERVAL_STEP, FRAME_INTERVAL, INITIAL_FALL_INTERVAL, MIN_FALL_INTERVAL,
    NUM_LEVELS, POINTS_PER_LEVEL, POINTS_PER_LINE, SLIDE_TIME, VOLUME_STEP,
};

/// Everything the player can tune. Every field is optional in the TOML file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub gameplay: GameplayConfig,
    pub audio: AudioConfig,
    pub display: DisplayConfig,
}

/// Scoring and gravity rules. Lives in the game world as a resource.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplayConfig {
    pub points_per_line: u32,
    pub points_per_level: u32,
    /// Frames between forced drops at level 1.
    pub initial_fall_interval: u32,
    /// Frames taken off the fall interval per level.
    pub fall_interval_step: u32,
    /// The fall interval never goes below this.
    pub min_fall_interval: u32,
    /// Grounded frames allowed before the piece locks.
    pub slide_time: u32,
    /// Finishing this many levels wins the game.
    pub num_levels: u32,
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            points_per_line: POINTS_PER_LINE,
            points_per_level: POINTS_PER_LEVEL,
            initial_fall_interval: INITIAL_FALL_INTERVAL,
            fall_interval_step: FALL_INTERVAL_STEP,
            min_fall_interval: MIN_FALL_INTERVAL,
            slide_time: SLIDE_TIME,
            num_levels: NUM_LEVELS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub music_enabled: bool,
    pub sound_enabled: bool,
    pub volume: f32,
    pub volume_step: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            music_enabled: true,
            sound_enabled: true,
            volume: DEFAULT_VOLUME,
            volume_step: VOLUME_STEP,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub show_ghost: bool,
    pub frame_interval_ms: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_ghost: true,
            frame_interval_ms: u64::try_from(FRAME_INTERVAL.as_millis()).unwrap_or(33),
        }
    }
}

impl DisplayConfig {
    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms.max(1))
    }
}
