//! Habit Dash - a one-button side-scroller where the character is a habit
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, scoring, power-ups)
//! - `config`: Data-driven game balance and validation
//! - `engine`: Session owner (config, seeded RNG, current snapshot)
//! - `driver`: Fixed-timestep frame driver for hosts
//! - `view`: Snapshot to vertex-list conversion

pub mod config;
pub mod driver;
pub mod engine;
pub mod sim;
pub mod view;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use config::{ConfigError, DifficultyPreset, GameConfig};
pub use driver::FixedStepDriver;
pub use engine::Engine;
pub use sim::{GameEvent, GamePhase, GameState, HabitTag, Intent, PowerUpKind, StepOutcome};

/// Host loop constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz keeps fast barriers from tunnelling)
    pub const SIM_DT: f64 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest frame delta the driver accepts (tab resumes, debugger pauses)
    pub const MAX_FRAME_DT: f64 = 0.1;
}
