//! Attract-mode controller
//!
//! Plays the game on the host's behalf (demo screen, headless runs). It only
//! reads the snapshot and answers with intents, like a human player would.

use super::collision;
use super::state::GameState;
use super::tick::Intent;
use crate::config::GameConfig;

/// Pixels below the target the character's centre may sink before jumping
const JUMP_MARGIN: f64 = 18.0;

/// Vertical centre the character should aim for
pub fn target_y(state: &GameState, config: &GameConfig) -> f64 {
    state
        .obstacles
        .iter()
        .find(|o| !collision::trailing_edge_cleared(o, config))
        .map(|o| o.gap_center_y)
        .unwrap_or(config.canvas_height / 2.0)
}

/// Intents for the next step
pub fn decide(state: &GameState, config: &GameConfig) -> Vec<Intent> {
    if !state.is_playing() {
        return Vec::new();
    }
    let center_y = state.character_center(config).y;
    let falling = state.velocity.y >= 0.0;
    if falling && center_y > target_y(state, config) + JUMP_MARGIN {
        vec![Intent::Jump]
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{GamePhase, Obstacle};

    fn playing(config: &GameConfig) -> GameState {
        let mut state = GameState::idle(config);
        state.phase = GamePhase::Playing;
        state
    }

    #[test]
    fn test_targets_next_unpassed_gap() {
        let config = GameConfig::default();
        let mut state = playing(&config);
        state.obstacles = vec![
            Obstacle::new(0.0, 100.0, false),
            Obstacle::new(300.0, 320.0, false),
        ];
        assert_eq!(target_y(&state, &config), 320.0);

        state.obstacles.clear();
        assert_eq!(target_y(&state, &config), 250.0);
    }

    #[test]
    fn test_jumps_when_low_and_falling() {
        let config = GameConfig::default();
        let mut state = playing(&config);
        state.obstacles = vec![Obstacle::new(300.0, 150.0, false)];
        state.position.y = 250.0;
        state.velocity.y = 50.0;
        assert_eq!(decide(&state, &config), vec![Intent::Jump]);

        // Already rising
        state.velocity.y = -200.0;
        assert!(decide(&state, &config).is_empty());

        // Above the gap centre
        state.velocity.y = 50.0;
        state.position.y = 100.0;
        assert!(decide(&state, &config).is_empty());
    }

    #[test]
    fn test_idle_never_jumps() {
        let config = GameConfig::default();
        let mut state = GameState::idle(&config);
        state.position.y = 400.0;
        assert!(decide(&state, &config).is_empty());
    }
}
