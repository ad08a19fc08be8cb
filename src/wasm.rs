//! Browser bindings
//!
//! The page owns the canvas, input and audio. It calls `frame` once per
//! animation frame, reads back events and vertices, and draws them.

use wasm_bindgen::prelude::*;

use crate::config::GameConfig;
use crate::driver::FixedStepDriver;
use crate::engine::Engine;
use crate::sim::state::HabitTag;
use crate::view;

#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // Already initialised by an earlier module instance
        return;
    }
    log::info!("Habit Dash starting...");
}

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Game instance handed to JavaScript
#[wasm_bindgen]
pub struct WasmGame {
    engine: Engine,
    driver: FixedStepDriver,
}

#[wasm_bindgen]
impl WasmGame {
    /// Build an idle game. `config_json` overrides individual defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64, config_json: Option<String>) -> Result<WasmGame, JsValue> {
        let config = match config_json {
            Some(json) => GameConfig::from_json(&json).map_err(js_error)?,
            None => GameConfig::default(),
        };
        let engine = Engine::new(config, seed).map_err(js_error)?;
        Ok(Self {
            engine,
            driver: FixedStepDriver::default(),
        })
    }

    pub fn start_game(&mut self, label: String, color: String) {
        self.driver.clear();
        self.engine.start_game(HabitTag::new(label, color));
    }

    /// Queue a jump; `false` when no session is running
    pub fn jump(&mut self) -> bool {
        self.engine.jump()
    }

    /// Advance by one rendered frame and return the emitted events as JSON
    pub fn frame(&mut self, dt: f64) -> Result<String, JsValue> {
        let events = self.driver.frame(&mut self.engine, dt, &[]);
        serde_json::to_string(&events).map_err(js_error)
    }

    pub fn reset(&mut self) {
        self.driver.clear();
        self.engine.reset();
    }

    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.engine.state()).map_err(js_error)
    }

    /// Interleaved `x, y, r, g, b, a` floats, three vertices per triangle
    pub fn vertices(&self) -> Vec<f32> {
        let vertices = view::build_frame(self.engine.config(), self.engine.state());
        bytemuck::cast_slice::<_, f32>(&vertices).to_vec()
    }

    pub fn is_game_over(&self) -> bool {
        self.engine.state().is_game_over()
    }

    /// Score of the finished run, if the session has ended
    pub fn final_score(&self) -> Option<u64> {
        let state = self.engine.state();
        state.is_game_over().then_some(state.score)
    }
}
