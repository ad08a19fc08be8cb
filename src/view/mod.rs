//! Render-props boundary
//!
//! Turns a snapshot into a flat, GPU-ready triangle list. The builder only
//! reads the snapshot; drawing, compositing and audio belong to the host.

pub mod shapes;
pub mod vertex;

use glam::{DVec2, Vec2};

use crate::config::GameConfig;
use crate::sim::collision;
use crate::sim::state::{GameState, PowerUpKind};
pub use vertex::{Vertex, colors, parse_hex_color};

const CIRCLE_SEGMENTS: u32 = 16;
const PARTICLE_SEGMENTS: u32 = 6;

#[inline]
fn v2(p: DVec2) -> Vec2 {
    p.as_vec2()
}

/// Builds the vertex list for one frame
pub struct FrameBuilder<'a> {
    config: &'a GameConfig,
    state: &'a GameState,
    vertices: Vec<Vertex>,
}

impl<'a> FrameBuilder<'a> {
    pub fn new(config: &'a GameConfig, state: &'a GameState) -> Self {
        Self {
            config,
            state,
            vertices: Vec::new(),
        }
    }

    pub fn background(mut self) -> Self {
        self.vertices.extend(shapes::rect(
            Vec2::ZERO,
            Vec2::new(self.config.canvas_width as f32, self.config.canvas_height as f32),
            colors::BACKGROUND,
        ));
        self
    }

    /// Barriers plus any uncollected pickups
    pub fn obstacles(mut self) -> Self {
        for obstacle in &self.state.obstacles {
            let color = if obstacle.shielded {
                colors::BARRIER_SHIELDED
            } else {
                colors::BARRIER
            };
            for barrier in collision::barrier_boxes(obstacle, self.config) {
                self.vertices.extend(shapes::rect(
                    v2(DVec2::new(barrier.x, barrier.y)),
                    v2(DVec2::new(barrier.w, barrier.h)),
                    color,
                ));
            }
            if obstacle.power_up_available() {
                let pickup = collision::pickup_box(obstacle, self.config);
                self.vertices.extend(shapes::circle(
                    v2(pickup.center()),
                    (pickup.w / 2.0) as f32,
                    colors::PICKUP,
                    CIRCLE_SEGMENTS,
                ));
            }
        }
        self
    }

    /// Character tinted by the habit colour, with effect rings and score pulse
    pub fn character(mut self) -> Self {
        let size = self.config.character_size;
        let mut color = self
            .state
            .habit
            .as_ref()
            .and_then(|h| parse_hex_color(&h.color))
            .unwrap_or(colors::CHARACTER);

        if self.state.score_flash_timer > 0.0 {
            let t = (self.state.score_flash_timer / self.config.score_flash_duration).clamp(0.0, 1.0) as f32;
            for (c, f) in color.iter_mut().zip(colors::FLASH) {
                *c += (f - *c) * t * 0.6;
            }
        }

        self.vertices.extend(shapes::rect(
            v2(self.state.position),
            Vec2::splat(size as f32),
            color,
        ));

        let center = v2(self.state.character_center(self.config));
        let radius = (size * 0.75) as f32;
        if self.state.power_ups.is_active(PowerUpKind::Shield) {
            self.vertices.extend(shapes::ring(
                center,
                radius,
                radius + 4.0,
                colors::SHIELD_RING,
                CIRCLE_SEGMENTS,
            ));
        }
        if self.state.power_ups.is_active(PowerUpKind::DoublePoints) {
            self.vertices.extend(shapes::ring(
                center,
                radius + 6.0,
                radius + 8.0,
                colors::DOUBLE_POINTS_RING,
                CIRCLE_SEGMENTS,
            ));
        }
        self
    }

    pub fn particles(mut self) -> Self {
        for particle in &self.state.particles {
            // Fade out over the final half second
            let mut color = particle.color;
            color[3] *= particle.life.min(0.5) as f32 * 2.0;
            self.vertices.extend(shapes::circle(
                v2(particle.pos),
                (particle.size / 2.0) as f32,
                color,
                PARTICLE_SEGMENTS,
            ));
        }
        self
    }

    pub fn build(self) -> Vec<Vertex> {
        self.vertices
    }
}

/// Full frame in the usual back-to-front order
pub fn build_frame(config: &GameConfig, state: &GameState) -> Vec<Vertex> {
    FrameBuilder::new(config, state)
        .background()
        .obstacles()
        .character()
        .particles()
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{HabitTag, Obstacle};

    #[test]
    fn test_idle_frame() {
        let config = GameConfig::default();
        let state = GameState::idle(&config);
        // Background + character
        assert_eq!(build_frame(&config, &state).len(), 12);
    }

    #[test]
    fn test_obstacles_and_pickups() {
        let config = GameConfig::default();
        let mut state = GameState::idle(&config);
        state.obstacles = vec![
            Obstacle::new(300.0, 250.0, false),
            Obstacle::new(600.0, 250.0, true),
        ];
        let vertices = FrameBuilder::new(&config, &state).obstacles().build();
        // Two barriers each, one pickup circle
        assert_eq!(vertices.len(), 4 * 6 + CIRCLE_SEGMENTS as usize * 3);
    }

    #[test]
    fn test_character_uses_habit_color() {
        let config = GameConfig::default();
        let mut state = GameState::idle(&config);
        state.habit = Some(HabitTag::new("Run", "#0000ff"));
        let vertices = FrameBuilder::new(&config, &state).character().build();
        assert_eq!(vertices[0].color, [0.0, 0.0, 1.0, 1.0]);
        assert_eq!(vertices[0].position, [100.0, 250.0]);

        state.habit = Some(HabitTag::new("Run", "blue"));
        let vertices = FrameBuilder::new(&config, &state).character().build();
        assert_eq!(vertices[0].color, colors::CHARACTER);
    }

    #[test]
    fn test_shield_ring_drawn() {
        let config = GameConfig::default();
        let mut state = GameState::idle(&config);
        let plain = FrameBuilder::new(&config, &state).character().build().len();
        state.power_ups.shield = Some(3.0);
        let shielded = FrameBuilder::new(&config, &state).character().build().len();
        assert_eq!(shielded - plain, CIRCLE_SEGMENTS as usize * 6);
    }

    #[test]
    fn test_builder_does_not_touch_state() {
        let config = GameConfig::default();
        let state = GameState::idle(&config);
        let copy = state.clone();
        let _ = build_frame(&config, &state);
        assert_eq!(state, copy);
    }
}
