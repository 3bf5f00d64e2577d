//! Brick field generation
//!
//! Layout is fully deterministic: a 10x5 grid below the HUD, cells advancing
//! by brick size plus padding. Only the colors are random, drawn uniformly
//! from the palette one brick at a time.

use glam::IVec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::geom::Rect;
use super::state::{Brick, PALETTE};
use crate::consts::*;

/// Build the opening brick field for a session.
///
/// The start column centers the unpadded row width, so the grid sits a
/// padding's worth left of true center. Kept as-is; every layout test and
/// the collision grid downstream assume these exact positions.
pub fn generate_field(rng: &mut Pcg32) -> Vec<Brick> {
    let start_x = (SCREEN_W - BRICK_W * BRICKS_PER_ROW as i32) / 2;
    let mut row_y = FIELD_TOP;

    let total = BRICKS_PER_ROW * BRICK_ROWS;
    let mut bricks = Vec::with_capacity(total);

    for i in 0..total {
        if i > 0 && i.is_multiple_of(BRICKS_PER_ROW) {
            row_y += BRICK_H + BRICK_PAD;
        }

        let col = (i % BRICKS_PER_ROW) as i32;
        let pos = IVec2::new(start_x + col * (BRICK_W + BRICK_PAD), row_y);
        let color = PALETTE[rng.random_range(0..PALETTE.len())];

        bricks.push(Brick {
            rect: Rect::new(pos, BRICK_W, BRICK_H),
            color,
        });
    }

    bricks
}
