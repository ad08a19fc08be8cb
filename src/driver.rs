//! Host-side frame driver
//!
//! The engine accepts any delta as-is. Hosts that feed it raw frame times
//! (a tab coming back from the background can report seconds) should go
//! through this driver, which clamps the frame delta and splits it into
//! fixed substeps so a fast character cannot tunnel through a barrier.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::engine::Engine;
use crate::sim::state::GameEvent;
use crate::sim::tick::Intent;

/// Fixed-timestep accumulator
#[derive(Debug, Clone)]
pub struct FixedStepDriver {
    accumulator: f64,
    step_dt: f64,
    max_substeps: u32,
    max_frame_dt: f64,
}

impl Default for FixedStepDriver {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS, MAX_FRAME_DT)
    }
}

impl FixedStepDriver {
    pub fn new(step_dt: f64, max_substeps: u32, max_frame_dt: f64) -> Self {
        Self {
            accumulator: 0.0,
            step_dt,
            max_substeps,
            max_frame_dt,
        }
    }

    /// Leftover time not yet simulated
    pub fn pending_time(&self) -> f64 {
        self.accumulator
    }

    /// Interpolation factor in `[0, 1]` for rendering between substeps
    pub fn alpha(&self) -> f64 {
        (self.accumulator / self.step_dt).clamp(0.0, 1.0)
    }

    pub fn clear(&mut self) {
        self.accumulator = 0.0;
    }

    /// Feed one rendered frame.
    ///
    /// Intents are queued on the engine and delivered to the next substep that
    /// runs, which may fall in a later frame when this one is shorter than a step.
    pub fn frame(&mut self, engine: &mut Engine, frame_dt: f64, intents: &[Intent]) -> Vec<GameEvent> {
        if frame_dt.is_nan() || frame_dt <= 0.0 {
            return Vec::new();
        }
        for intent in intents {
            match intent {
                Intent::Jump => {
                    engine.jump();
                }
            }
        }
        self.accumulator += frame_dt.min(self.max_frame_dt);

        let mut events = Vec::new();
        let mut substeps = 0;
        while self.accumulator >= self.step_dt && substeps < self.max_substeps {
            events.extend(engine.step(self.step_dt, &[]));
            self.accumulator -= self.step_dt;
            substeps += 1;
        }

        // Drop backlog we could not simulate this frame
        if substeps == self.max_substeps && self.accumulator >= self.step_dt {
            let kept = self.accumulator % self.step_dt;
            log::warn!(
                "Frame driver dropped {:.3}s of backlog",
                self.accumulator - kept
            );
            self.accumulator = kept;
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::state::HabitTag;

    fn engine() -> Engine {
        let mut engine = Engine::new(GameConfig::default(), 3).expect("valid config");
        engine.start_game(HabitTag::new("Walk", "#ff9800"));
        engine
    }

    #[test]
    fn test_accumulates_fixed_steps() {
        let mut engine = engine();
        let mut driver = FixedStepDriver::new(0.01, 8, 0.1);

        driver.frame(&mut engine, 0.025, &[]);
        assert!((engine.state().time - 0.02).abs() < 1e-9);
        assert!((driver.pending_time() - 0.005).abs() < 1e-9);

        driver.frame(&mut engine, 0.0075, &[]);
        assert!((engine.state().time - 0.03).abs() < 1e-9);
    }

    #[test]
    fn test_clamps_huge_delta() {
        let mut engine = engine();
        let mut driver = FixedStepDriver::new(0.01, 100, 0.1);
        driver.frame(&mut engine, 30.0, &[]);
        assert!(engine.state().time <= 0.1 + 1e-9);
    }

    #[test]
    fn test_substep_cap_drops_backlog() {
        let mut engine = engine();
        let mut driver = FixedStepDriver::new(0.01, 2, 0.1);
        driver.frame(&mut engine, 0.1, &[]);
        assert!((engine.state().time - 0.02).abs() < 1e-9);
        assert!(driver.pending_time() < 0.01);
    }

    #[test]
    fn test_intents_only_on_first_substep() {
        let mut engine = engine();
        let mut driver = FixedStepDriver::new(0.01, 8, 0.1);
        let events = driver.frame(&mut engine, 0.05, &[Intent::Jump]);
        assert_eq!(
            events.iter().filter(|e| **e == GameEvent::Jumped).count(),
            1
        );
    }

    #[test]
    fn test_short_frames_keep_jump_for_next_substep() {
        let mut engine = engine();
        let mut driver = FixedStepDriver::default();
        let frame_dt = 1.0 / 144.0;

        let first = driver.frame(&mut engine, frame_dt, &[Intent::Jump]);
        assert!(first.is_empty());
        assert_eq!(engine.state().time, 0.0);

        let second = driver.frame(&mut engine, frame_dt, &[]);
        assert_eq!(
            second.iter().filter(|e| **e == GameEvent::Jumped).count(),
            1
        );
        assert!(engine.state().velocity.y < 0.0);
    }

    #[test]
    fn test_ignores_non_positive_frames() {
        let mut engine = engine();
        let mut driver = FixedStepDriver::default();
        assert!(driver.frame(&mut engine, 0.0, &[Intent::Jump]).is_empty());
        assert!(driver.frame(&mut engine, -1.0, &[]).is_empty());
        assert_eq!(engine.state().time, 0.0);
    }
}
