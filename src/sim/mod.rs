//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per host frame
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod field;
pub mod geom;
pub mod state;
pub mod tick;

pub use field::generate_field;
pub use geom::{Circle, Rect};
pub use state::{
    Ball, Brick, BrickColor, GamePhase, GameState, HorizontalDir, Paddle, VerticalDir, PALETTE,
};
pub use tick::{TickInput, tick};
