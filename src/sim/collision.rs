//! Collision detection and response
//!
//! All tests are axis-aligned and integer-exact. Response is limited to
//! position snaps and per-axis direction forcing; the ball never changes
//! speed.

use super::state::{Ball, Brick, HorizontalDir, Paddle, VerticalDir};
use crate::consts::{SCREEN_H, SCREEN_W};

/// Bounce the ball off the playfield walls.
///
/// Left and top contacts snap the ball back inside before forcing the
/// direction. A right-wall contact only flips the direction: the ball may
/// interpenetrate the wall for one frame. The bottom edge is open; falling
/// past it is the loss condition, not a bounce.
pub fn resolve_wall_collision(ball: &mut Ball) {
    if ball.left() < 0 {
        ball.pos.x = ball.radius;
        ball.dir_x = HorizontalDir::Right;
    }

    if ball.right() > SCREEN_W {
        ball.dir_x = HorizontalDir::Left;
    }

    if ball.top() < 0 {
        ball.pos.y = ball.radius;
        ball.dir_y = VerticalDir::Down;
    }
}

/// Bounce the ball off the paddle.
///
/// In y-down screen coordinates `ball.pos.y > paddle.pos.y` reads
/// "the ball's center has dropped past the paddle's top edge"; combined
/// with the strict horizontal span check that is the whole rebound test.
/// The ball is snapped so its bottom edge rests on the paddle top.
pub fn resolve_paddle_collision(ball: &mut Ball, paddle: &Paddle) {
    if ball.pos.y > paddle.pos.y && ball.pos.x > paddle.left() && ball.pos.x < paddle.right() {
        ball.pos.y = paddle.pos.y - ball.radius;
        ball.dir_y = VerticalDir::Up;
    }
}

/// True when the ball has fallen below the playfield
pub fn ball_out_of_bounds(ball: &Ball) -> bool {
    ball.pos.y > SCREEN_H
}

/// A brick is hit when the ball's center point lies strictly inside it.
/// The ball's radius is deliberately ignored here.
pub fn ball_hits_brick(ball: &Ball, brick: &Brick) -> bool {
    brick.rect.contains_interior(ball.pos)
}
