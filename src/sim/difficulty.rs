//! Score-driven difficulty multiplier
//!
//! The multiplier is recomputed from the score every step rather than
//! accumulated. The random jitter is drawn once per scoring event and kept
//! in the snapshot, so between scoring events the value is stable.

use rand::Rng;

use crate::config::GameConfig;

/// Difficulty multiplier for a score and jitter factor.
///
/// `(1 + floor(score/step)*increase) * jitter * base^floor(score/exp_step)`,
/// clamped to `[1.0, max_difficulty]`.
pub fn compute(score: u64, jitter: f64, config: &GameConfig) -> f64 {
    let linear_steps = (score / config.difficulty_step) as f64;
    let exponent_steps = (score / config.difficulty_exponent_step) as f64;

    let linear = 1.0 + linear_steps * config.difficulty_increase;
    let exponential = config.difficulty_exponent_base.powf(exponent_steps);
    let raw = linear * (1.0 + jitter) * exponential;

    if raw.is_finite() {
        raw.clamp(1.0, config.max_difficulty)
    } else {
        config.max_difficulty
    }
}

/// Draw a fresh jitter factor in `[-difficulty_jitter, difficulty_jitter]`
pub fn sample_jitter<R: Rng>(rng: &mut R, config: &GameConfig) -> f64 {
    if config.difficulty_jitter <= 0.0 {
        return 0.0;
    }
    rng.random_range(-config.difficulty_jitter..=config.difficulty_jitter)
}

/// Gravity at a difficulty
#[inline]
pub fn gravity(difficulty: f64, config: &GameConfig) -> f64 {
    config.gravity * difficulty
}

/// Obstacle scroll speed at a difficulty
#[inline]
pub fn obstacle_speed(difficulty: f64, config: &GameConfig) -> f64 {
    config.obstacle_speed * difficulty
}
