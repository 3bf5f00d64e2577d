//! Per-frame game state update
//!
//! One [`tick`] call advances the session by exactly one host frame. The
//! host samples input, calls `tick`, then renders; pacing (60 Hz) is the
//! host's job.

use super::collision;
use super::state::{GamePhase, GameState, HorizontalDir, VerticalDir};
use crate::consts::*;

/// Held-key snapshot for a single frame
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    pub restart: bool,
}

/// Advance the game state by one frame.
///
/// Frame order, matching the session rules exactly: restart transition,
/// paddle control and clamp, ball/wall, ball/paddle, loss check, brick
/// scan, integration. The paddle stays controllable after a loss; the
/// ball and bricks freeze until a restart.
pub fn tick(state: &mut GameState, input: &TickInput) {
    // Restart takes priority over everything else on a game-over frame.
    // The rest of this frame then runs against the fresh session.
    if state.phase == GamePhase::GameOver && input.restart {
        state.start_session();
    }

    move_paddle(state, input);

    if state.phase == GamePhase::GameOver {
        return;
    }

    state.time_ticks += 1;

    collision::resolve_wall_collision(&mut state.ball);
    collision::resolve_paddle_collision(&mut state.ball, &state.paddle);

    if collision::ball_out_of_bounds(&state.ball) {
        state.phase = GamePhase::GameOver;
    }

    // The loss frame still finishes its brick scan and integration.
    strike_bricks(state);
    integrate_ball(state);
}

/// Apply held movement keys, then clamp the paddle to the screen.
/// A full step from just inside an edge can overshoot; the clamp snaps it
/// back so both edges always stay on screen.
fn move_paddle(state: &mut GameState, input: &TickInput) {
    let paddle = &mut state.paddle;

    if input.move_left && paddle.left() > 0 {
        paddle.pos.x -= PADDLE_STEP;
    }

    if input.move_right && paddle.right() < SCREEN_W {
        paddle.pos.x += PADDLE_STEP;
    }

    if paddle.left() < 0 {
        paddle.pos.x = 0;
    }

    if paddle.right() > SCREEN_W {
        paddle.pos.x = SCREEN_W - paddle.width;
    }
}

/// Remove every brick whose interior contains the ball's center.
///
/// Survivor scan over an immutable ball snapshot: when two bricks are hit
/// on the same frame, both are removed and both score. The vertical
/// direction is forced down on any hit.
fn strike_bricks(state: &mut GameState) {
    let ball = state.ball;
    let before = state.bricks.len();

    state
        .bricks
        .retain(|brick| !collision::ball_hits_brick(&ball, brick));

    let destroyed = (before - state.bricks.len()) as u32;
    if destroyed > 0 {
        state.ball.dir_y = VerticalDir::Down;
        state.score += destroyed;
    }
}

/// Apply the fixed per-axis step along the current direction state
fn integrate_ball(state: &mut GameState) {
    let ball = &mut state.ball;

    match ball.dir_y {
        VerticalDir::Down => ball.pos.y += BALL_STEP,
        VerticalDir::Up => ball.pos.y -= BALL_STEP,
    }

    match ball.dir_x {
        HorizontalDir::Right => ball.pos.x += BALL_STEP,
        HorizontalDir::Left => ball.pos.x -= BALL_STEP,
    }
}
