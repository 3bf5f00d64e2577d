//! Game state and core simulation types
//!
//! The whole session lives in [`GameState`]; nothing is process-global.

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::field;
use super::geom::{Circle, Rect};
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Ball fell below the playfield; waiting for a restart
    GameOver,
}

/// Horizontal travel direction of the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalDir {
    Left,
    Right,
}

/// Vertical travel direction of the ball (y-down screen coordinates)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalDir {
    Up,
    Down,
}

/// Brick color tag; the render layer maps these to actual RGBA values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrickColor {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
}

/// The fixed palette bricks draw their color from
pub const PALETTE: [BrickColor; 5] = [
    BrickColor::Red,
    BrickColor::Blue,
    BrickColor::Green,
    BrickColor::Yellow,
    BrickColor::Purple,
];

/// The player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    /// Top-left corner
    pub pos: IVec2,
    pub width: i32,
    pub height: i32,
}

impl Paddle {
    /// Canonical starting paddle: horizontally centered, near the bottom edge
    pub fn reset() -> Self {
        Self {
            pos: IVec2::new((SCREEN_W - PADDLE_W) / 2, SCREEN_H - PADDLE_H * 3),
            width: PADDLE_W,
            height: PADDLE_H,
        }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.pos.x + self.width
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.width, self.height)
    }
}

/// The ball: a circle with one discrete travel direction per axis
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    /// Center position
    pub pos: IVec2,
    pub radius: i32,
    pub dir_x: HorizontalDir,
    pub dir_y: VerticalDir,
}

impl Ball {
    /// Canonical starting ball: screen center, moving right and down
    pub fn reset() -> Self {
        Self {
            pos: IVec2::new(SCREEN_W / 2, SCREEN_H / 2),
            radius: BALL_RADIUS,
            dir_x: HorizontalDir::Right,
            dir_y: VerticalDir::Down,
        }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.pos.x - self.radius
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.pos.x + self.radius
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.pos.y - self.radius
    }

    pub fn circle(&self) -> Circle {
        Circle::new(self.pos, self.radius)
    }
}

/// A brick; position and color never change after generation
#[derive(Debug, Clone, Copy)]
pub struct Brick {
    pub rect: Rect,
    pub color: BrickColor,
}

/// Complete session state owned by the update loop
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducible brick colors
    pub seed: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Bricks destroyed this session
    pub score: u32,
    /// Playing frames elapsed this session (display only)
    pub time_ticks: u64,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Live brick field; bricks are removed as they are destroyed
    pub bricks: Vec<Brick>,
    rng: Pcg32,
}

impl GameState {
    /// Create a fresh session with the given seed
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            phase: GamePhase::Playing,
            score: 0,
            time_ticks: 0,
            paddle: Paddle::reset(),
            ball: Ball::reset(),
            bricks: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        };
        state.start_session();
        state
    }

    /// Reinitialize for a new play-through: centered paddle, centered ball
    /// moving right+down, a fresh brick field, zeroed score and timer.
    ///
    /// Colors are drawn from the live RNG stream, so each restart gets a
    /// fresh shuffle while the whole run stays reproducible from `seed`.
    pub fn start_session(&mut self) {
        self.paddle = Paddle::reset();
        self.ball = Ball::reset();
        self.bricks = field::generate_field(&mut self.rng);
        self.score = 0;
        self.time_ticks = 0;
        self.phase = GamePhase::Playing;
    }

    /// Elapsed session time in whole seconds, rounded to nearest
    pub fn elapsed_secs(&self) -> u64 {
        (self.time_ticks + TICK_RATE as u64 / 2) / TICK_RATE as u64
    }
}
