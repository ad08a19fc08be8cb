//! Timed power-up effects
//!
//! Expiry is measured on the simulation clock, which only advances inside
//! `step`, so pausing the host pauses every effect with it.

use rand::Rng;

use super::state::{PowerUpKind, PowerUps};
use crate::config::GameConfig;

/// Pick the effect granted by a pickup
pub fn choose_kind<R: Rng>(rng: &mut R, config: &GameConfig) -> PowerUpKind {
    let pool: &[PowerUpKind] = if config.slow_motion_pickups {
        &PowerUpKind::ALL
    } else {
        &[PowerUpKind::Shield, PowerUpKind::DoublePoints]
    };
    pool[rng.random_range(0..pool.len())]
}

/// Activate (or refresh) an effect until `now + duration`.
///
/// Re-picking an active kind resets its expiry; durations never stack.
pub fn activate(power_ups: &mut PowerUps, kind: PowerUpKind, now: f64, duration: f64) {
    *power_ups.slot_mut(kind) = Some(now + duration);
    log::debug!("Power-up {:?} active until t={:.2}", kind, now + duration);
}

/// Remove an effect immediately (shield absorbing a hit)
pub fn consume(power_ups: &mut PowerUps, kind: PowerUpKind) -> bool {
    power_ups.slot_mut(kind).take().is_some()
}

/// Clear every effect whose expiry is at or before `now`; returns the cleared kinds
pub fn expire(power_ups: &mut PowerUps, now: f64) -> Vec<PowerUpKind> {
    let mut expired = Vec::new();
    for kind in PowerUpKind::ALL {
        let slot = power_ups.slot_mut(kind);
        if matches!(*slot, Some(until) if now >= until) {
            *slot = None;
            log::debug!("Power-up {:?} expired at t={:.2}", kind, now);
            expired.push(kind);
        }
    }
    expired
}

/// Seconds of effect left, zero when inactive
pub fn remaining(power_ups: &PowerUps, kind: PowerUpKind, now: f64) -> f64 {
    power_ups
        .expiry(kind)
        .map(|until| (until - now).max(0.0))
        .unwrap_or(0.0)
}
