//! Session engine
//!
//! Owns the validated config, the seeded RNG and the current snapshot, and
//! exposes the host-facing calls: `start_game`, `jump`, `step`, `reset`.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::config::{ConfigError, GameConfig};
use crate::sim::state::{GameEvent, GameState, HabitTag};
use crate::sim::tick::{self, Intent, StepOutcome};

/// A deterministic game session driver
#[derive(Debug, Clone)]
pub struct Engine {
    config: GameConfig,
    seed: u64,
    rng: Pcg32,
    state: GameState,
    pending: Vec<Intent>,
}

impl Engine {
    /// Validate the config and build an idle engine
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = GameState::idle(&config);
        Ok(Self {
            config,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            state,
            pending: Vec::new(),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Current snapshot
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Begin a new session for the selected habit (from Idle or GameOver)
    pub fn start_game(&mut self, habit: HabitTag) -> &GameState {
        log::info!("Starting session for habit '{}'", habit.label);
        self.pending.clear();
        self.state = tick::start_session(&self.config, &mut self.rng, habit);
        &self.state
    }

    /// Discard the session and return to Idle
    pub fn reset(&mut self) {
        self.pending.clear();
        self.state = GameState::idle(&self.config);
    }

    /// Queue a jump for the next step. Ignored unless a session is running.
    pub fn jump(&mut self) -> bool {
        if !self.state.is_playing() {
            return false;
        }
        if !self.pending.contains(&Intent::Jump) {
            self.pending.push(Intent::Jump);
        }
        true
    }

    /// Advance by `dt` with the queued intents plus `intents`
    pub fn step(&mut self, dt: f64, intents: &[Intent]) -> Vec<GameEvent> {
        let mut all = std::mem::take(&mut self.pending);
        all.extend_from_slice(intents);
        let StepOutcome { state, events } =
            tick::step(&self.state, dt, &all, &self.config, &mut self.rng);
        self.state = state;
        events
    }
}
