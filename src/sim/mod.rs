//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only advances through `step`
//! - Seeded RNG only, passed in by the caller
//! - Obstacles kept in ascending x order
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod difficulty;
pub mod obstacles;
pub mod particles;
pub mod physics;
pub mod powerups;
pub mod state;
pub mod tick;

pub use collision::{Aabb, CollisionReport};
pub use particles::BurstKind;
pub use state::{
    GameEvent, GamePhase, GameState, HabitTag, Obstacle, Particle, PowerUpFlags, PowerUpKind,
    PowerUps,
};
pub use tick::{Intent, StepOutcome, start_session, step};
