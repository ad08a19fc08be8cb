//! Tunable game constants
//!
//! One flat table consumed by every simulation module. The host may supply
//! it as a JSON document (missing fields fall back to the defaults); it is
//! validated once, when the engine is built, and never clamped afterwards.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating a [`GameConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config field `{field}` must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },
    #[error("config field `{field}` must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },
    #[error("config field `{field}` must be within [{min}, {max}], got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("degenerate geometry: {0}")]
    Geometry(String),
    #[error("malformed config document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Difficulty presets exposed by the settings screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DifficultyPreset {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl DifficultyPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyPreset::Easy => "Easy",
            DifficultyPreset::Normal => "Normal",
            DifficultyPreset::Hard => "Hard",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(DifficultyPreset::Easy),
            "normal" | "medium" => Some(DifficultyPreset::Normal),
            "hard" => Some(DifficultyPreset::Hard),
            _ => None,
        }
    }

    /// Gap between top and bottom barrier
    fn obstacle_gap(&self) -> f64 {
        match self {
            DifficultyPreset::Easy => 240.0,
            DifficultyPreset::Normal => 200.0,
            DifficultyPreset::Hard => 170.0,
        }
    }

    /// Base scroll speed (px/s)
    fn obstacle_speed(&self) -> f64 {
        match self {
            DifficultyPreset::Easy => 170.0,
            DifficultyPreset::Normal => 200.0,
            DifficultyPreset::Hard => 240.0,
        }
    }

    /// Multiplier ceiling
    fn max_difficulty(&self) -> f64 {
        match self {
            DifficultyPreset::Easy => 1.6,
            DifficultyPreset::Normal => 2.0,
            DifficultyPreset::Hard => 2.5,
        }
    }
}

/// Complete tunable table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Canvas / character ===
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Fixed horizontal position of the character's left edge
    pub character_x: f64,
    /// Side of the square character hitbox
    pub character_size: f64,

    // === Physics ===
    /// Downward acceleration (px/s²)
    pub gravity: f64,
    /// Vertical velocity set by a jump (negative = up)
    pub jump_force: f64,
    /// Maximum downward speed
    pub terminal_velocity: f64,

    // === Obstacles ===
    pub obstacle_speed: f64,
    pub obstacle_gap: f64,
    pub obstacle_width: f64,
    /// Horizontal spacing between consecutive obstacles at difficulty 1.0
    pub obstacle_frequency: f64,
    pub min_obstacle_height: f64,
    pub max_obstacle_height: f64,

    // === Scoring ===
    pub points_per_obstacle: u64,
    pub double_points_multiplier: u64,
    pub power_up_points: u64,
    /// Side of the square pickup box centred in the gap
    pub power_up_size: f64,
    pub score_flash_duration: f64,

    // === Difficulty curve ===
    pub difficulty_increase: f64,
    /// Score interval of the linear step
    pub difficulty_step: u64,
    pub difficulty_exponent_base: f64,
    /// Score interval of the exponential step
    pub difficulty_exponent_step: u64,
    /// Half-width of the uniform jitter band (0 disables jitter)
    pub difficulty_jitter: f64,
    pub max_difficulty: f64,

    // === Power-ups ===
    /// Chance that a fresh obstacle carries a pickup, at difficulty 1.0
    pub power_up_frequency: f64,
    pub max_power_up_frequency: f64,
    /// Seconds of simulation time an effect stays active
    pub power_up_duration: f64,
    /// Whether pickups may roll slow-motion
    pub slow_motion_pickups: bool,
    /// Obstacle speed multiplier while slow-motion is active
    pub slow_motion_factor: f64,

    // === Particles ===
    pub max_particles: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800.0,
            canvas_height: 500.0,
            character_x: 100.0,
            character_size: 40.0,

            gravity: 800.0,
            jump_force: -400.0,
            terminal_velocity: 600.0,

            obstacle_speed: 200.0,
            obstacle_gap: 200.0,
            obstacle_width: 50.0,
            obstacle_frequency: 300.0,
            min_obstacle_height: 50.0,
            max_obstacle_height: 450.0,

            points_per_obstacle: 1,
            double_points_multiplier: 2,
            power_up_points: 5,
            power_up_size: 30.0,
            score_flash_duration: 0.3,

            difficulty_increase: 0.05,
            difficulty_step: 5,
            difficulty_exponent_base: 1.05,
            difficulty_exponent_step: 20,
            difficulty_jitter: 0.025,
            max_difficulty: 2.0,

            power_up_frequency: 0.15,
            max_power_up_frequency: 0.5,
            power_up_duration: 5.0,
            slow_motion_pickups: false,
            slow_motion_factor: 0.5,

            max_particles: 512,
        }
    }
}

impl GameConfig {
    /// Create a config from a difficulty preset (other fields keep defaults)
    pub fn from_preset(preset: DifficultyPreset) -> Self {
        Self {
            obstacle_gap: preset.obstacle_gap(),
            obstacle_speed: preset.obstacle_speed(),
            max_difficulty: preset.max_difficulty(),
            ..Self::default()
        }
    }

    /// Parse and validate a JSON config document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        log::info!("Loaded game config from document");
        Ok(config)
    }

    /// Serialize to a JSON document (for the settings screen)
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Check every invariant the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("character_x", self.character_x),
            ("character_size", self.character_size),
            ("gravity", self.gravity),
            ("terminal_velocity", self.terminal_velocity),
            ("obstacle_speed", self.obstacle_speed),
            ("obstacle_gap", self.obstacle_gap),
            ("obstacle_width", self.obstacle_width),
            ("obstacle_frequency", self.obstacle_frequency),
            ("min_obstacle_height", self.min_obstacle_height),
            ("max_obstacle_height", self.max_obstacle_height),
            ("power_up_size", self.power_up_size),
            ("score_flash_duration", self.score_flash_duration),
            ("difficulty_increase", self.difficulty_increase),
            ("difficulty_exponent_base", self.difficulty_exponent_base),
            ("max_difficulty", self.max_difficulty),
            ("power_up_duration", self.power_up_duration),
            ("slow_motion_factor", self.slow_motion_factor),
        ];
        for (field, value) in positive {
            require_finite(field, value)?;
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        require_finite("jump_force", self.jump_force)?;
        if self.jump_force >= 0.0 {
            return Err(ConfigError::OutOfRange {
                field: "jump_force",
                value: self.jump_force,
                min: f64::NEG_INFINITY,
                max: 0.0,
            });
        }

        let counts = [
            ("points_per_obstacle", self.points_per_obstacle),
            ("double_points_multiplier", self.double_points_multiplier),
            ("power_up_points", self.power_up_points),
            ("difficulty_step", self.difficulty_step),
            ("difficulty_exponent_step", self.difficulty_exponent_step),
        ];
        for (field, value) in counts {
            if value == 0 {
                return Err(ConfigError::NonPositive { field, value: 0.0 });
            }
        }
        if self
            .points_per_obstacle
            .checked_mul(self.double_points_multiplier)
            .is_none()
        {
            return Err(ConfigError::OutOfRange {
                field: "double_points_multiplier",
                value: self.double_points_multiplier as f64,
                min: 1.0,
                max: (u64::MAX / self.points_per_obstacle) as f64,
            });
        }
        if self.max_particles == 0 {
            return Err(ConfigError::NonPositive {
                field: "max_particles",
                value: 0.0,
            });
        }

        require_range("difficulty_jitter", self.difficulty_jitter, 0.0, 0.5)?;
        require_range("power_up_frequency", self.power_up_frequency, 0.0, 1.0)?;
        require_range("max_power_up_frequency", self.max_power_up_frequency, 0.0, 1.0)?;
        require_range("slow_motion_factor", self.slow_motion_factor, 0.0, 1.0)?;
        require_range("max_difficulty", self.max_difficulty, 1.0, f64::MAX)?;

        if self.max_obstacle_height <= self.min_obstacle_height {
            return Err(ConfigError::Geometry(format!(
                "max_obstacle_height ({}) must exceed min_obstacle_height ({})",
                self.max_obstacle_height, self.min_obstacle_height
            )));
        }
        if self.canvas_height <= 2.0 * self.min_obstacle_height {
            return Err(ConfigError::Geometry(format!(
                "canvas_height ({}) must exceed twice min_obstacle_height ({})",
                self.canvas_height, self.min_obstacle_height
            )));
        }
        if self.obstacle_gap >= self.canvas_height {
            return Err(ConfigError::Geometry(format!(
                "obstacle_gap ({}) must be smaller than canvas_height ({})",
                self.obstacle_gap, self.canvas_height
            )));
        }
        if self.character_size >= self.canvas_height {
            return Err(ConfigError::Geometry(format!(
                "character_size ({}) must be smaller than canvas_height ({})",
                self.character_size, self.canvas_height
            )));
        }
        if self.character_x + self.character_size > self.canvas_width {
            return Err(ConfigError::Geometry(format!(
                "character at x={} (size {}) does not fit a canvas {} wide",
                self.character_x, self.character_size, self.canvas_width
            )));
        }

        Ok(())
    }

    /// Lower bound of the gap-centre draw
    pub fn gap_center_min(&self) -> f64 {
        self.min_obstacle_height
    }

    /// Upper bound of the gap-centre draw
    pub fn gap_center_max(&self) -> f64 {
        (self.canvas_height - self.min_obstacle_height).min(self.max_obstacle_height)
    }

    /// Lowest y the character's top edge can take while in bounds
    pub fn floor_y(&self) -> f64 {
        self.canvas_height - self.character_size
    }

    /// Spawn position of the character at session start
    pub fn start_y(&self) -> f64 {
        self.canvas_height / 2.0
    }
}

fn require_finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { field, value })
    }
}

fn require_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), ConfigError> {
    require_finite(field, value)?;
    if value < min || value > max {
        return Err(ConfigError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}
