//! Decorative particle bursts
//!
//! Particles live in the snapshot so the renderer can draw them, but no
//! gameplay code reads them back.

use glam::DVec2;
use rand::Rng;

use super::state::Particle;

/// Gameplay event that triggers a burst
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BurstKind {
    Jump,
    Score,
    PowerUp,
    Collision,
}

/// Shape of one batch of particles
struct BurstSpec {
    count: usize,
    speed: (f64, f64),
    size: (f64, f64),
    life: (f64, f64),
    color: [f32; 4],
    /// Angular window for velocities (radians, centre, half-width)
    cone: (f64, f64),
}

const FULL_CIRCLE: (f64, f64) = (0.0, std::f64::consts::PI);
/// Straight down in screen space
const DOWNWARD: (f64, f64) = (std::f64::consts::FRAC_PI_2, 0.6);

pub mod colors {
    pub const JUMP_PUFF: [f32; 4] = [1.0, 1.0, 1.0, 0.35];
    pub const SCORE_GOLD: [f32; 4] = [1.0, 0.84, 0.0, 1.0];
    pub const POWER_UP: [f32; 4] = [0.35, 0.75, 1.0, 0.9];
    pub const SPARKLE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const COLLISION_RED: [f32; 4] = [1.0, 0.2, 0.15, 1.0];
}

fn batches(kind: BurstKind) -> &'static [BurstSpec] {
    match kind {
        BurstKind::Jump => &[BurstSpec {
            count: 5,
            speed: (30.0, 80.0),
            size: (2.0, 4.0),
            life: (0.2, 0.4),
            color: colors::JUMP_PUFF,
            cone: DOWNWARD,
        }],
        BurstKind::Score => &[BurstSpec {
            count: 10,
            speed: (60.0, 140.0),
            size: (3.0, 6.0),
            life: (0.5, 0.8),
            color: colors::SCORE_GOLD,
            cone: FULL_CIRCLE,
        }],
        BurstKind::PowerUp => &[
            BurstSpec {
                count: 30,
                speed: (80.0, 200.0),
                size: (4.0, 8.0),
                life: (0.8, 1.4),
                color: colors::POWER_UP,
                cone: FULL_CIRCLE,
            },
            BurstSpec {
                count: 15,
                speed: (20.0, 60.0),
                size: (1.5, 3.0),
                life: (1.0, 1.6),
                color: colors::SPARKLE,
                cone: FULL_CIRCLE,
            },
        ],
        BurstKind::Collision => &[BurstSpec {
            count: 25,
            speed: (100.0, 260.0),
            size: (3.0, 7.0),
            life: (0.6, 1.0),
            color: colors::COLLISION_RED,
            cone: FULL_CIRCLE,
        }],
    }
}

/// Number of particles a burst produces
pub fn burst_size(kind: BurstKind) -> usize {
    batches(kind).iter().map(|b| b.count).sum()
}

/// Spawn a burst of particles around `origin`
pub fn spawn<R: Rng>(rng: &mut R, kind: BurstKind, origin: DVec2) -> Vec<Particle> {
    let mut particles = Vec::with_capacity(burst_size(kind));
    for batch in batches(kind) {
        let (center, spread) = batch.cone;
        for _ in 0..batch.count {
            let angle = center + rng.random_range(-spread..=spread);
            let speed = rng.random_range(batch.speed.0..=batch.speed.1);
            particles.push(Particle {
                pos: origin,
                vel: DVec2::new(angle.cos(), angle.sin()) * speed,
                color: batch.color,
                size: rng.random_range(batch.size.0..=batch.size.1),
                life: rng.random_range(batch.life.0..=batch.life.1),
            });
        }
    }
    particles
}

/// Append a burst, evicting the oldest particles past `max`
pub fn emit(particles: &mut Vec<Particle>, burst: Vec<Particle>, max: usize) {
    particles.extend(burst);
    if particles.len() > max {
        let excess = particles.len() - max;
        particles.drain(..excess);
    }
}

/// Linear integration and lifetime decay; dead particles are removed
pub fn advance(particles: &mut Vec<Particle>, dt: f64) {
    for particle in particles.iter_mut() {
        particle.pos += particle.vel * dt;
        particle.life -= dt;
    }
    particles.retain(|p| p.life > 0.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_burst_sizes() {
        assert_eq!(burst_size(BurstKind::Jump), 5);
        assert_eq!(burst_size(BurstKind::Score), 10);
        assert_eq!(burst_size(BurstKind::PowerUp), 45);
        assert_eq!(burst_size(BurstKind::Collision), 25);
    }

    #[test]
    fn test_spawn_from_origin() {
        let mut rng = Pcg32::seed_from_u64(5);
        let origin = DVec2::new(120.0, 250.0);
        let burst = spawn(&mut rng, BurstKind::PowerUp, origin);
        assert_eq!(burst.len(), 45);
        assert!(burst.iter().all(|p| p.pos == origin && p.life > 0.0));
        assert_eq!(
            burst.iter().filter(|p| p.color == colors::SPARKLE).count(),
            15
        );
    }

    #[test]
    fn test_jump_puff_goes_down() {
        let mut rng = Pcg32::seed_from_u64(5);
        let burst = spawn(&mut rng, BurstKind::Jump, DVec2::ZERO);
        assert!(burst.iter().all(|p| p.vel.y > 0.0));
    }

    #[test]
    fn test_advance_moves_linearly() {
        let mut particles = vec![Particle {
            pos: DVec2::new(0.0, 0.0),
            vel: DVec2::new(10.0, -20.0),
            color: colors::SCORE_GOLD,
            size: 3.0,
            life: 1.0,
        }];
        advance(&mut particles, 0.5);
        assert_eq!(particles[0].pos, DVec2::new(5.0, -10.0));
        assert_eq!(particles[0].life, 0.5);
        advance(&mut particles, 0.5);
        assert!(particles.is_empty());
    }

    #[test]
    fn test_emit_caps_oldest_first() {
        let mut rng = Pcg32::seed_from_u64(9);
        let mut particles = spawn(&mut rng, BurstKind::Score, DVec2::ZERO);
        let burst = spawn(&mut rng, BurstKind::Collision, DVec2::ONE);
        emit(&mut particles, burst, 30);
        assert_eq!(particles.len(), 30);
        assert_eq!(
            particles
                .iter()
                .filter(|p| p.color == colors::COLLISION_RED)
                .count(),
            25
        );
    }

    proptest! {
        #[test]
        fn prop_lifecycle(seed in any::<u64>(), dt in 0.001f64..2.0) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut particles = spawn(&mut rng, BurstKind::PowerUp, DVec2::ZERO);
            let doomed: Vec<f64> = particles.iter().map(|p| p.life).filter(|l| *l <= dt).collect();
            let before = particles.len();
            advance(&mut particles, dt);
            prop_assert!(particles.iter().all(|p| p.life > 0.0));
            prop_assert_eq!(particles.len(), before - doomed.len());
        }
    }
}
