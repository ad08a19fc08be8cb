//! Game state and core simulation types
//!
//! A `GameState` is a complete snapshot: the host renders it, and the next
//! call to `step` consumes it and returns its successor.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Not yet started
    #[default]
    Idle,
    /// Active gameplay
    Playing,
    /// Run ended; snapshot is frozen
    GameOver,
}

/// Cosmetic identity of the habit the character represents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitTag {
    pub label: String,
    /// CSS-style hex colour, e.g. `#4caf50`
    pub color: String,
}

impl HabitTag {
    pub fn new(label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
        }
    }
}

/// A top/bottom barrier pair with a gap centred at `gap_center_y`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge
    pub x: f64,
    pub gap_center_y: f64,
    /// Trailing edge has crossed the character (scored)
    pub passed: bool,
    pub has_power_up: bool,
    pub power_up_collected: bool,
    /// A shield absorbed a hit on this obstacle; its barriers no longer collide
    #[serde(default)]
    pub shielded: bool,
}

impl Obstacle {
    pub fn new(x: f64, gap_center_y: f64, has_power_up: bool) -> Self {
        Self {
            x,
            gap_center_y,
            passed: false,
            has_power_up,
            power_up_collected: false,
            shielded: false,
        }
    }

    /// Pickup still waiting in the gap
    pub fn power_up_available(&self) -> bool {
        self.has_power_up && !self.power_up_collected
    }

    /// Bottom edge of the top barrier
    pub fn gap_top(&self, gap: f64) -> f64 {
        self.gap_center_y - gap / 2.0
    }

    /// Top edge of the bottom barrier
    pub fn gap_bottom(&self, gap: f64) -> f64 {
        self.gap_center_y + gap / 2.0
    }
}

/// Timed gameplay modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    Shield,
    DoublePoints,
    SlowMotion,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 3] = [
        PowerUpKind::Shield,
        PowerUpKind::DoublePoints,
        PowerUpKind::SlowMotion,
    ];
}

/// Plain on/off view of the active effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PowerUpFlags {
    pub shield: bool,
    pub double_points: bool,
    pub slow_motion: bool,
}

/// Active effects, each stored as the simulation time at which it expires
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PowerUps {
    pub shield: Option<f64>,
    pub double_points: Option<f64>,
    pub slow_motion: Option<f64>,
}

impl PowerUps {
    pub fn expiry(&self, kind: PowerUpKind) -> Option<f64> {
        match kind {
            PowerUpKind::Shield => self.shield,
            PowerUpKind::DoublePoints => self.double_points,
            PowerUpKind::SlowMotion => self.slow_motion,
        }
    }

    pub fn slot_mut(&mut self, kind: PowerUpKind) -> &mut Option<f64> {
        match kind {
            PowerUpKind::Shield => &mut self.shield,
            PowerUpKind::DoublePoints => &mut self.double_points,
            PowerUpKind::SlowMotion => &mut self.slow_motion,
        }
    }

    pub fn is_active(&self, kind: PowerUpKind) -> bool {
        self.expiry(kind).is_some()
    }

    pub fn flags(&self) -> PowerUpFlags {
        PowerUpFlags {
            shield: self.shield.is_some(),
            double_points: self.double_points.is_some(),
            slow_motion: self.slow_motion.is_some(),
        }
    }
}

/// A short-lived decorative particle (never read by gameplay)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: DVec2,
    pub vel: DVec2,
    /// Linear RGBA
    pub color: [f32; 4],
    pub size: f64,
    /// Seconds left to live
    pub life: f64,
}

/// Everything the engine reports to the host besides the snapshot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Jumped,
    ObstaclePassed { points: u64 },
    PowerUpCollected { kind: PowerUpKind, points: u64 },
    ShieldConsumed,
    PowerUpExpired { kind: PowerUpKind },
    /// Emitted exactly once per session, on the Playing -> GameOver edge
    GameOver { final_score: u64 },
}

/// Complete game snapshot (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Character top-left corner; `x` is fixed
    pub position: DVec2,
    pub velocity: DVec2,
    pub score: u64,
    /// Seconds left on the score pulse
    pub score_flash_timer: f64,
    pub phase: GamePhase,
    /// Sorted by ascending x
    pub obstacles: Vec<Obstacle>,
    pub particles: Vec<Particle>,
    pub power_ups: PowerUps,
    pub difficulty: f64,
    /// Jitter factor drawn at the last scoring event
    pub difficulty_jitter: f64,
    /// Simulation clock (seconds), advances only inside `step`
    pub time: f64,
    pub habit: Option<HabitTag>,
}

impl GameState {
    /// Idle snapshot before any session has started
    pub fn idle(config: &GameConfig) -> Self {
        Self {
            position: DVec2::new(config.character_x, config.start_y()),
            velocity: DVec2::ZERO,
            score: 0,
            score_flash_timer: 0.0,
            phase: GamePhase::Idle,
            obstacles: Vec::new(),
            particles: Vec::new(),
            power_ups: PowerUps::default(),
            difficulty: 1.0,
            difficulty_jitter: 0.0,
            time: 0.0,
            habit: None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Centre of the character hitbox
    pub fn character_center(&self, config: &GameConfig) -> DVec2 {
        self.position + DVec2::splat(config.character_size / 2.0)
    }
}
