//! Habit Dash entry point
//!
//! Natively this runs a headless attract-mode session and reports the score.
//! The browser build is driven from JavaScript through `habit_dash::wasm`.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use habit_dash::sim::{GameEvent, autopilot};
    use habit_dash::{DifficultyPreset, Engine, FixedStepDriver, GameConfig, HabitTag};

    /// Simulated seconds before the demo gives up
    const TIME_LIMIT: f64 = 300.0;
    const FRAME_DT: f64 = 1.0 / 60.0;

    env_logger::init();
    log::info!("Habit Dash (native) starting...");

    let mut args = std::env::args().skip(1);
    let seed = match args.next() {
        Some(arg) => arg.parse().unwrap_or_else(|_| {
            log::warn!("Invalid seed '{arg}', using 0");
            0
        }),
        None => 0,
    };
    let preset = args
        .next()
        .and_then(|arg| DifficultyPreset::parse(&arg))
        .unwrap_or_default();

    let mut engine = match Engine::new(GameConfig::from_preset(preset), seed) {
        Ok(engine) => engine,
        Err(err) => {
            log::error!("Invalid configuration: {err}");
            std::process::exit(1);
        }
    };
    let mut driver = FixedStepDriver::default();
    engine.start_game(HabitTag::new("Demo", "#4caf50"));
    log::info!("Seed {seed}, preset {}", preset.as_str());

    while engine.state().is_playing() && engine.state().time < TIME_LIMIT {
        let intents = autopilot::decide(engine.state(), engine.config());
        for event in driver.frame(&mut engine, FRAME_DT, &intents) {
            match event {
                GameEvent::Jumped => {}
                GameEvent::GameOver { final_score } => {
                    log::info!("Game over at {:.1}s", engine.state().time);
                    println!("Final score: {final_score}");
                }
                other => log::debug!("{other:?}"),
            }
        }
    }

    if engine.state().is_playing() {
        println!(
            "Still alive after {TIME_LIMIT}s, score: {}",
            engine.state().score
        );
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is habit_dash::wasm::wasm_main, this is just to satisfy the compiler
}
