//! Logical input surface
//!
//! The sim never talks to a keyboard. A host implements [`InputSource`]
//! over its windowing library ("is this key currently held") and [`sample`]
//! turns that into the per-frame [`TickInput`] snapshot.

use crate::sim::TickInput;

/// The game's logical key set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    MoveLeft,
    MoveRight,
    Restart,
}

/// Host-side key state query
pub trait InputSource {
    /// Whether the physical key bound to `key` is currently held
    fn is_down(&self, key: Key) -> bool;
}

/// Snapshot the held keys for one frame
pub fn sample<S: InputSource>(source: &S) -> TickInput {
    TickInput {
        move_left: source.is_down(Key::MoveLeft),
        move_right: source.is_down(Key::MoveRight),
        restart: source.is_down(Key::Restart),
    }
}
