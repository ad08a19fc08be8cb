//! Collision and scoring detection
//!
//! Everything here is axis-aligned: the character, both barriers of each
//! obstacle, and the pickup floating in the gap are plain rectangles. The
//! detector only reads the snapshot; the game loop applies the results.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::state::{GameState, Obstacle};
use crate::config::GameConfig;

/// Axis-aligned bounding box (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Aabb {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Box of the given size centred on a point
    pub fn centered(center: DVec2, w: f64, h: f64) -> Self {
        Self::new(center.x - w / 2.0, center.y - h / 2.0, w, h)
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Strict overlap; touching edges do not count
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}

/// The character's hitbox
pub fn character_box(position: DVec2, config: &GameConfig) -> Aabb {
    Aabb::new(
        config.character_x,
        position.y,
        config.character_size,
        config.character_size,
    )
}

/// Top and bottom barrier of an obstacle
pub fn barrier_boxes(obstacle: &Obstacle, config: &GameConfig) -> [Aabb; 2] {
    let gap_top = obstacle.gap_top(config.obstacle_gap);
    let gap_bottom = obstacle.gap_bottom(config.obstacle_gap);
    [
        Aabb::new(obstacle.x, 0.0, config.obstacle_width, gap_top),
        Aabb::new(
            obstacle.x,
            gap_bottom,
            config.obstacle_width,
            config.canvas_height - gap_bottom,
        ),
    ]
}

/// Pickup box centred in the obstacle's gap
pub fn pickup_box(obstacle: &Obstacle, config: &GameConfig) -> Aabb {
    Aabb::centered(
        DVec2::new(
            obstacle.x + config.obstacle_width / 2.0,
            obstacle.gap_center_y,
        ),
        config.power_up_size,
        config.power_up_size,
    )
}

/// Touching or leaving the top or bottom of the canvas
#[inline]
pub fn out_of_bounds(y: f64, config: &GameConfig) -> bool {
    y <= 0.0 || y >= config.floor_y()
}

/// Whether an obstacle's trailing edge is behind the character
#[inline]
pub fn trailing_edge_cleared(obstacle: &Obstacle, config: &GameConfig) -> bool {
    obstacle.x + config.obstacle_width < config.character_x
}

/// Result of one detection pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionReport {
    pub out_of_bounds: bool,
    /// Character overlaps a barrier (reported even when a shield will absorb it)
    pub barrier_hit: bool,
    /// Indices of the obstacles whose barriers were hit
    pub barrier_hits: Vec<usize>,
    /// Indices of obstacles whose `passed` flag flips this step
    pub passed: Vec<usize>,
    /// Indices of obstacles whose pickup is touched this step
    pub pickups: Vec<usize>,
}

impl CollisionReport {
    pub fn collided(&self) -> bool {
        self.out_of_bounds || self.barrier_hit
    }

    pub fn scored(&self) -> bool {
        !self.passed.is_empty()
    }

    /// Whether the collision ends the run. The shield only covers barriers.
    pub fn is_fatal(&self, shield_active: bool) -> bool {
        self.out_of_bounds || (self.barrier_hit && !shield_active)
    }

    /// Whether a barrier hit is absorbed by the shield
    pub fn shield_absorbs(&self, shield_active: bool) -> bool {
        shield_active && self.barrier_hit && !self.out_of_bounds
    }
}

/// Run the detector against a snapshot
pub fn check(state: &GameState, config: &GameConfig) -> CollisionReport {
    let character = character_box(state.position, config);
    let mut report = CollisionReport {
        out_of_bounds: out_of_bounds(state.position.y, config),
        ..Default::default()
    };

    for (index, obstacle) in state.obstacles.iter().enumerate() {
        if !obstacle.shielded
            && barrier_boxes(obstacle, config)
                .iter()
                .any(|barrier| barrier.overlaps(&character))
        {
            report.barrier_hit = true;
            report.barrier_hits.push(index);
        }

        if !obstacle.passed && trailing_edge_cleared(obstacle, config) {
            report.passed.push(index);
        }

        if obstacle.power_up_available() && pickup_box(obstacle, config).overlaps(&character) {
            report.pickups.push(index);
        }
    }

    report
}
