//! Tuning constants and the optional `dino_rush.toml` overrides.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{GameError, Result};

// ── Fixed tuning ──────────────────────────────────────────────────────────────

/// Scale applied to the player sprite.
pub const PLAYER_SCALE: f32 = 4.0;
/// Scale applied to obstacles and the dust puff.
pub const OBSTACLE_SCALE: f32 = 3.0;
/// Seconds each animation frame stays on screen.
pub const ANIMATION_UPDATE_TIME: f32 = 1.0 / 12.0;

pub const BAT_FRAME_COUNT: u32 = 4;
pub const PTERODACTYL_FRAME_COUNT: u32 = 8;
pub const DUST_FRAME_COUNT: u32 = 5;
/// Frame count assumed for the player sheet until the shop picks one.
pub const DEFAULT_DINO_FRAME_COUNT: u32 = 6;

/// Vertical offsets of the flying obstacles above the ground line.
pub const BAT_Y_OFFSET: f32 = -150.0;
pub const PTERODACTYL_Y_OFFSET: f32 = -260.0;

/// Seconds between dust puffs while the player runs.
pub const DUST_SPAWN_INTERVAL: f32 = 0.3;
/// Dust spawns this far behind the player's left edge.
pub const DUST_X_OFFSET: f32 = -20.0;

/// Leaderboard rows shown on screen.
pub const LEADERBOARD_SIZE: usize = 10;

/// Scroll speeds of the parallax layers, back to ground, in px/s.
pub const PARALLAX_SPEEDS: [f32; 4] = [20.0, 40.0, 60.0, 200.0];

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE: &str = "dino_rush.toml";
/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "DINO_RUSH_CONFIG";

// ── Overridable settings ──────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub physics: PhysicsConfig,
    pub spawn: SpawnConfig,
    pub storage: StorageConfig,
}

/// Logical screen the game lays itself out in. The terminal host scales it
/// down to whatever the terminal offers.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub target_fps: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            target_fps: 30,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Downward acceleration in px/s².
    pub gravity: f32,
    /// Velocity added by a jump (negative is up).
    pub jump_impulse: f32,
    pub max_jumps: u32,
    /// Distance from the bottom of the window to the ground line.
    pub ground_offset: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 1500.0,
            jump_impulse: -700.0,
            max_jumps: 2,
            ground_offset: 65.0,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SpawnConfig {
    pub min_distance: f32,
    pub max_distance: f32,
    /// Horizontal obstacle speed in px/s; negative scrolls left.
    pub obstacle_velocity: f32,
    /// Obstacles left of this x are dropped.
    pub cull_x: f32,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            min_distance: 400.0,
            max_distance: 800.0,
            obstacle_velocity: -200.0,
            cull_x: -200.0,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    pub scores_file: PathBuf,
    pub users_file: PathBuf,
    pub log_file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            scores_file: PathBuf::from("scores.txt"),
            users_file: PathBuf::from("users.txt"),
            log_file: PathBuf::from("dino_rush.log"),
        }
    }
}

impl GameConfig {
    /// Parse a config file. A missing file is not an error and yields the
    /// defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e.into()),
        };
        Self::from_toml(&text).map_err(|source| GameError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Where to look for the config: `$DINO_RUSH_CONFIG`, else
    /// `./dino_rush.toml`.
    pub fn default_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
    }
}
