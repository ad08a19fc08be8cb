//! Vertical character physics
//!
//! Only the y axis is integrated; horizontal motion is the world scrolling.

use glam::DVec2;

use crate::config::GameConfig;

/// Integrate one step under gravity.
///
/// Velocity is capped at terminal velocity (downward only). Position is
/// clamped to the canvas so the value stays sane for one frame; touching
/// either bound is reported as a collision by the detector, not absorbed here.
pub fn advance(
    position: DVec2,
    velocity: DVec2,
    gravity: f64,
    dt: f64,
    config: &GameConfig,
) -> (DVec2, DVec2) {
    let vy = (velocity.y + gravity * dt).min(config.terminal_velocity);
    let y = (position.y + vy * dt).clamp(0.0, config.floor_y());
    (DVec2::new(position.x, y), DVec2::new(velocity.x, vy))
}

/// Velocity after a jump at the given difficulty
#[inline]
pub fn jump_velocity(velocity: DVec2, difficulty: f64, config: &GameConfig) -> DVec2 {
    DVec2::new(velocity.x, config.jump_force * difficulty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gravity_accelerates() {
        let config = GameConfig::default();
        let (pos, vel) = advance(
            DVec2::new(100.0, 250.0),
            DVec2::ZERO,
            config.gravity,
            0.1,
            &config,
        );
        assert!((vel.y - 80.0).abs() < 1e-9);
        assert!((pos.y - 258.0).abs() < 1e-9);
        assert_eq!(pos.x, 100.0);
    }

    #[test]
    fn test_terminal_velocity_cap() {
        let config = GameConfig::default();
        let (_, vel) = advance(
            DVec2::new(100.0, 100.0),
            DVec2::new(0.0, 590.0),
            config.gravity,
            0.1,
            &config,
        );
        assert_eq!(vel.y, config.terminal_velocity);
    }

    #[test]
    fn test_upward_speed_not_capped() {
        let config = GameConfig::default();
        let (_, vel) = advance(
            DVec2::new(100.0, 250.0),
            DVec2::new(0.0, -900.0),
            config.gravity,
            0.01,
            &config,
        );
        assert!((vel.y - -892.0).abs() < 1e-9);
    }

    #[test]
    fn test_position_clamped_to_canvas() {
        let config = GameConfig::default();
        let (pos, _) = advance(
            DVec2::new(100.0, 455.0),
            DVec2::new(0.0, 600.0),
            config.gravity,
            0.1,
            &config,
        );
        assert_eq!(pos.y, config.floor_y());

        let (pos, _) = advance(
            DVec2::new(100.0, 5.0),
            DVec2::new(0.0, -600.0),
            config.gravity,
            0.1,
            &config,
        );
        assert_eq!(pos.y, 0.0);
    }

    #[test]
    fn test_jump_scales_with_difficulty() {
        let config = GameConfig::default();
        let vel = jump_velocity(DVec2::new(0.0, 300.0), 1.5, &config);
        assert_eq!(vel.y, -600.0);
    }
}
