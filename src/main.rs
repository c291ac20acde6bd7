//! Gem Dodge entry point
//!
//! Headless native runner: drives a session at the configured tick rate
//! with the autopilot at the controls, then prints a JSON summary.
//!
//! Usage: `gem-dodge [settings.json] [seconds]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::Path;
    use std::time::{Duration, Instant};

    use gem_dodge::renderer::VertexPresenter;
    use gem_dodge::{Driver, Session, Settings, autopilot};

    env_logger::init();

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load_from(Path::new(&path)),
        None => Settings::default(),
    };
    let seconds: f32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(30.0);

    log::info!("Gem Dodge (native) starting, running for up to {seconds}s");

    let frame_time = Duration::from_secs_f32(settings.sim_dt());
    let mut driver = Driver::new(
        Session::with_system_clock(settings),
        VertexPresenter::default(),
    );

    let start = Instant::now();
    let mut last = start;
    while driver.is_running() && start.elapsed().as_secs_f32() < seconds {
        // Input lands between ticks, never during one
        if let Some(direction) = autopilot::choose(driver.session().state()) {
            driver.handle_direction(direction);
        }

        let now = Instant::now();
        driver.frame((now - last).as_secs_f32());
        last = now;

        std::thread::sleep(frame_time);
    }

    let state = driver.session().state();
    let summary = serde_json::json!({
        "score": state.score,
        "frames": state.frame,
        "game_over": state.is_game_over(),
        "squares_on_screen": state.squares.len(),
        "vertex_bytes": driver.presenter().bytes().len(),
        "elapsed_secs": start.elapsed().as_secs_f32(),
    });
    log::info!("Run finished with score {}", state.score);
    println!("{summary:#}");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web hosts drive `gem_dodge::Driver` directly
}
