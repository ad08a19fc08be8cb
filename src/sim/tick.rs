//! Simulation step
//!
//! `step` takes a snapshot, a time delta and the player's pending intents and
//! returns the successor snapshot plus the events it produced. The previous
//! snapshot is never modified.

use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision;
use super::difficulty;
use super::obstacles;
use super::particles::{self, BurstKind};
use super::physics;
use super::powerups;
use super::state::{GameEvent, GamePhase, GameState, HabitTag, PowerUpKind};
use crate::config::GameConfig;

/// Player intents delivered by the host for one step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    Jump,
}

/// Successor snapshot and the events emitted while producing it
#[derive(Debug, Clone)]
pub struct StepOutcome {
    pub state: GameState,
    pub events: Vec<GameEvent>,
}

impl StepOutcome {
    /// Final score, if this step ended the session
    pub fn final_score(&self) -> Option<u64> {
        self.events.iter().find_map(|event| match event {
            GameEvent::GameOver { final_score } => Some(*final_score),
            _ => None,
        })
    }
}

/// Fresh session: playing, character centred, one obstacle at the right edge
pub fn start_session<R: Rng>(config: &GameConfig, rng: &mut R, habit: HabitTag) -> GameState {
    let mut state = GameState::idle(config);
    state.phase = GamePhase::Playing;
    state.habit = Some(habit);
    obstacles::maybe_spawn(&mut state.obstacles, rng, state.difficulty, config);
    state
}

/// Advance a snapshot by `dt` seconds
pub fn step<R: Rng>(
    prev: &GameState,
    dt: f64,
    intents: &[Intent],
    config: &GameConfig,
    rng: &mut R,
) -> StepOutcome {
    let mut state = prev.clone();
    let mut events = Vec::new();
    advance(&mut state, &mut events, dt, intents, config, rng);
    StepOutcome { state, events }
}

fn advance<R: Rng>(
    state: &mut GameState,
    events: &mut Vec<GameEvent>,
    dt: f64,
    intents: &[Intent],
    config: &GameConfig,
    rng: &mut R,
) {
    // Idle and GameOver snapshots are frozen; zero, negative and NaN deltas are no-ops
    if !state.is_playing() || dt.is_nan() || dt <= 0.0 {
        return;
    }

    state.time += dt;
    state.score_flash_timer = (state.score_flash_timer - dt).max(0.0);

    // Jump overrides gravity for the step it is applied in
    let jumped = intents.contains(&Intent::Jump);
    if jumped {
        state.velocity = physics::jump_velocity(state.velocity, state.difficulty, config);
        events.push(GameEvent::Jumped);
        let feet = state.character_center(config) + DVec2::new(0.0, config.character_size / 2.0);
        let burst = particles::spawn(rng, BurstKind::Jump, feet);
        particles::emit(&mut state.particles, burst, config.max_particles);
    }

    let gravity = if jumped {
        0.0
    } else {
        difficulty::gravity(state.difficulty, config)
    };
    let (position, velocity) = physics::advance(state.position, state.velocity, gravity, dt, config);
    state.position = position;
    state.velocity = velocity;

    let mut speed = difficulty::obstacle_speed(state.difficulty, config);
    if state.power_ups.is_active(PowerUpKind::SlowMotion) {
        speed *= config.slow_motion_factor;
    }
    obstacles::advance(&mut state.obstacles, speed, dt, config);
    obstacles::maybe_spawn(&mut state.obstacles, rng, state.difficulty, config);

    let report = collision::check(state, config);
    let shield_active = state.power_ups.is_active(PowerUpKind::Shield);

    if report.is_fatal(shield_active) {
        state.phase = GamePhase::GameOver;
        let burst = particles::spawn(rng, BurstKind::Collision, state.character_center(config));
        particles::emit(&mut state.particles, burst, config.max_particles);
        events.push(GameEvent::GameOver {
            final_score: state.score,
        });
        log::info!(
            "Game over at t={:.2}s: score {} (out_of_bounds={})",
            state.time,
            state.score,
            report.out_of_bounds
        );
        return;
    }

    if report.shield_absorbs(shield_active) {
        powerups::consume(&mut state.power_ups, PowerUpKind::Shield);
        for &index in &report.barrier_hits {
            state.obstacles[index].shielded = true;
        }
        events.push(GameEvent::ShieldConsumed);
        let burst = particles::spawn(rng, BurstKind::Collision, state.character_center(config));
        particles::emit(&mut state.particles, burst, config.max_particles);
        log::debug!("Shield absorbed a barrier hit at t={:.2}", state.time);
    }

    let score_before = state.score;

    for &index in &report.passed {
        state.obstacles[index].passed = true;
        let points = if state.power_ups.is_active(PowerUpKind::DoublePoints) {
            config
                .points_per_obstacle
                .saturating_mul(config.double_points_multiplier)
        } else {
            config.points_per_obstacle
        };
        state.score = state.score.saturating_add(points);
        state.score_flash_timer = config.score_flash_duration;
        events.push(GameEvent::ObstaclePassed { points });
        let burst = particles::spawn(rng, BurstKind::Score, state.character_center(config));
        particles::emit(&mut state.particles, burst, config.max_particles);
    }

    for &index in &report.pickups {
        let origin = collision::pickup_box(&state.obstacles[index], config).center();
        state.obstacles[index].power_up_collected = true;
        state.score = state.score.saturating_add(config.power_up_points);
        let kind = powerups::choose_kind(rng, config);
        powerups::activate(&mut state.power_ups, kind, state.time, config.power_up_duration);
        events.push(GameEvent::PowerUpCollected {
            kind,
            points: config.power_up_points,
        });
        let burst = particles::spawn(rng, BurstKind::PowerUp, origin);
        particles::emit(&mut state.particles, burst, config.max_particles);
    }

    if state.score != score_before {
        state.difficulty_jitter = difficulty::sample_jitter(rng, config);
    }
    state.difficulty = difficulty::compute(state.score, state.difficulty_jitter, config);

    particles::advance(&mut state.particles, dt);
    for kind in powerups::expire(&mut state.power_ups, state.time) {
        events.push(GameEvent::PowerUpExpired { kind });
    }
}
