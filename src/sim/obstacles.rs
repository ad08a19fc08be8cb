//! Obstacle scrolling and generation
//!
//! New obstacles always enter at the right edge and existing ones scroll at
//! the same speed, so the list stays sorted by ascending x without sorting.

use rand::Rng;

use super::state::Obstacle;
use crate::config::GameConfig;

/// Horizontal spacing between obstacles at a given difficulty
pub fn spacing(difficulty: f64, config: &GameConfig) -> f64 {
    config.obstacle_frequency / difficulty
}

/// Chance that a fresh obstacle carries a pickup
pub fn power_up_chance(difficulty: f64, config: &GameConfig) -> f64 {
    (config.power_up_frequency * difficulty)
        .min(config.max_power_up_frequency)
        .clamp(0.0, 1.0)
}

/// Scroll every obstacle left and drop the ones fully off-screen
pub fn advance(obstacles: &mut Vec<Obstacle>, speed: f64, dt: f64, config: &GameConfig) {
    let scroll = speed * dt;
    for obstacle in obstacles.iter_mut() {
        obstacle.x -= scroll;
    }
    obstacles.retain(|o| o.x >= -config.obstacle_width);
}

/// Whether the right-most obstacle has scrolled far enough to make room
pub fn should_spawn(obstacles: &[Obstacle], difficulty: f64, config: &GameConfig) -> bool {
    match obstacles.last() {
        None => true,
        Some(last) => last.x < config.canvas_width - spacing(difficulty, config),
    }
}

/// Build a new obstacle at the right edge
pub fn spawn<R: Rng>(rng: &mut R, difficulty: f64, config: &GameConfig) -> Obstacle {
    let gap_center_y = rng.random_range(config.gap_center_min()..=config.gap_center_max());
    let has_power_up = rng.random_bool(power_up_chance(difficulty, config));
    Obstacle::new(config.canvas_width, gap_center_y, has_power_up)
}

/// Append an obstacle if there is room. Returns true when one was added.
pub fn maybe_spawn<R: Rng>(
    obstacles: &mut Vec<Obstacle>,
    rng: &mut R,
    difficulty: f64,
    config: &GameConfig,
) -> bool {
    if !should_spawn(obstacles, difficulty, config) {
        return false;
    }
    let obstacle = spawn(rng, difficulty, config);
    log::trace!(
        "Spawned obstacle gap_y={:.1} power_up={}",
        obstacle.gap_center_y,
        obstacle.has_power_up
    );
    obstacles.push(obstacle);
    true
}
