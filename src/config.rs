//! Game tuning and host settings
//!
//! Every gameplay constant lives here so runs can be reproduced and tuned
//! from a JSON file. Missing fields fall back to the defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Size of the playfield in world units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 200.0,
        }
    }
}

/// The player character's fixed placement and size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterConfig {
    pub x: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for CharacterConfig {
    fn default() -> Self {
        Self {
            x: 50.0,
            width: 44.0,
            height: 47.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObstacleConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for ObstacleConfig {
    fn default() -> Self {
        Self {
            width: 25.0,
            height: 40.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub viewport: Viewport,
    pub character: CharacterConfig,
    pub obstacle: ObstacleConfig,

    // === Physics (units per tick) ===
    /// Added to vertical velocity every airborne tick
    pub gravity: f32,
    /// Vertical velocity set by a jump (negative is up)
    pub jump_impulse: f32,

    // === Difficulty ===
    /// Obstacle speed at the start of every run
    pub base_speed: f32,
    /// Score multiple at which the speed steps up
    pub speed_interval: u32,
    /// Amount added to the speed at each step
    pub speed_increment: f32,
    /// Width of the random range added to the respawn position
    pub gap_jitter: f32,

    // === Host ===
    /// Target frame period in milliseconds
    pub frame_ms: u64,
    /// RNG seed; a random one is drawn when absent
    pub seed: Option<u64>,
    /// Open an audio device
    pub sound: bool,
    /// Draw pixel-art sprites instead of plain rectangles
    pub sprites: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            character: CharacterConfig::default(),
            obstacle: ObstacleConfig::default(),

            gravity: 0.5,
            jump_impulse: -10.0,

            base_speed: 5.0,
            speed_interval: 100,
            speed_increment: 0.5,
            gap_jitter: 200.0,

            frame_ms: 16,
            seed: None,
            sound: true,
            sprites: true,
        }
    }
}

impl Config {
    /// Parse a JSON document. Does not validate.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&text).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        let invalid = |msg: &str| Err(Error::InvalidConfig(msg.to_string()));

        if self.viewport.width <= 0.0 || self.viewport.height <= 0.0 {
            return invalid("viewport must have a positive width and height");
        }
        if self.character.width <= 0.0 || self.character.height <= 0.0 {
            return invalid("character must have a positive width and height");
        }
        if self.obstacle.width <= 0.0 || self.obstacle.height <= 0.0 {
            return invalid("obstacle must have a positive width and height");
        }
        if self.character.height > self.viewport.height
            || self.obstacle.height > self.viewport.height
        {
            return invalid("entities must fit inside the viewport height");
        }
        if self.speed_interval == 0 {
            return invalid("speed_interval must be at least 1");
        }
        if self.base_speed <= 0.0 {
            return invalid("base_speed must be positive");
        }
        if self.gravity <= 0.0 {
            return invalid("gravity must be positive");
        }
        if self.jump_impulse >= 0.0 {
            return invalid("jump_impulse must be negative (upward)");
        }
        if self.speed_increment.is_nan() || self.speed_increment < 0.0 {
            return invalid("speed_increment must not be negative");
        }
        if self.gap_jitter.is_nan() || self.gap_jitter < 0.0 {
            return invalid("gap_jitter must not be negative");
        }
        if self.frame_ms == 0 {
            return invalid("frame_ms must be at least 1");
        }
        Ok(())
    }

    /// Resting y of the character (top edge when standing on the ground).
    pub fn ground_y(&self) -> f32 {
        self.viewport.height - self.character.height
    }

    /// Fixed y of the obstacle, aligned to the ground.
    pub fn obstacle_y(&self) -> f32 {
        self.viewport.height - self.obstacle.height
    }
}
