//! Breaker entry point
//!
//! There is no bundled window backend: a graphical host implements
//! [`breaker::input::InputSource`] and [`breaker::render::Surface`] over
//! its windowing library and drives `sample` / `tick` / `draw_frame` once
//! per 60 Hz display frame. This binary wires up logging and settings,
//! then exercises the core headlessly so the whole loop can be run and
//! inspected from a terminal.

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use glam::IVec2;

use breaker::consts::TICK_RATE;
use breaker::input::{self, InputSource, Key};
use breaker::render::{Color, Surface, draw_frame};
use breaker::settings::Settings;
use breaker::sim::geom::{Circle, Rect};
use breaker::sim::{GamePhase, GameState, tick};

/// No keys held; the demo paddle just sits at center
struct IdleInput;

impl InputSource for IdleInput {
    fn is_down(&self, _key: Key) -> bool {
        false
    }
}

/// Discards every draw call
struct NullSurface;

impl Surface for NullSurface {
    fn begin_frame(&mut self) {}
    fn clear(&mut self, _color: Color) {}
    fn fill_rect(&mut self, _rect: Rect, _color: Color) {}
    fn fill_circle(&mut self, _circle: Circle, _color: Color) {}
    fn draw_text(&mut self, _text: &str, _pos: IVec2, _size: i32, _color: Color) {}
    fn end_frame(&mut self) {}
}

fn main() {
    env_logger::init();

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or_else(clock_seed);
    log::info!("Breaker starting with seed {seed}");

    let mut state = GameState::new(seed);

    // Headless smoke run: up to ten simulated minutes with an idle paddle,
    // unpaced. A real host would sleep out the remainder of each frame.
    let started = Instant::now();
    let max_ticks = TICK_RATE as u64 * 600;
    let mut frames = 0u64;

    while frames < max_ticks {
        let input = input::sample(&IdleInput);
        tick(&mut state, &input);
        draw_frame(&state, &settings, &mut NullSurface);
        frames += 1;

        if state.phase == GamePhase::GameOver {
            break;
        }
    }

    if settings.log_fps {
        let elapsed = started.elapsed().as_secs_f64();
        log::info!(
            "Simulated {frames} frames in {elapsed:.3}s ({:.0} frames/s)",
            frames as f64 / elapsed.max(f64::EPSILON)
        );
    }

    match state.phase {
        GamePhase::GameOver => log::info!(
            "Game over after {}s: {} points, {} bricks left",
            state.elapsed_secs(),
            state.score,
            state.bricks.len()
        ),
        GamePhase::Playing => log::info!(
            "Still rallying after {}s: {} points, {} bricks left",
            state.elapsed_secs(),
            state.score,
            state.bricks.len()
        ),
    }
}

/// Millisecond clock seed for hosts that do not pin one in settings
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
