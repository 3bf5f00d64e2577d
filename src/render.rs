//! Frame composition against a host drawing surface
//!
//! The sim produces state; this module turns one state snapshot into draw
//! calls on a [`Surface`] the host implements. Nothing here mutates game
//! state.

use glam::IVec2;

use crate::consts::{SCREEN_H, SCREEN_W};
use crate::settings::Settings;
use crate::sim::geom::{Circle, Rect};
use crate::sim::state::{BrickColor, GamePhase, GameState};

/// Plain RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(230, 41, 55);
    pub const BLUE: Color = Color::rgb(0, 121, 241);
    pub const GREEN: Color = Color::rgb(0, 228, 48);
    pub const YELLOW: Color = Color::rgb(253, 249, 0);
    pub const PURPLE: Color = Color::rgb(200, 122, 255);
}

/// RGBA value for a brick's palette tag
pub fn brick_color(color: BrickColor) -> Color {
    match color {
        BrickColor::Red => Color::RED,
        BrickColor::Blue => Color::BLUE,
        BrickColor::Green => Color::GREEN,
        BrickColor::Yellow => Color::YELLOW,
        BrickColor::Purple => Color::PURPLE,
    }
}

/// Imperative draw primitives a host provides.
///
/// Calls arrive bracketed by `begin_frame`/`end_frame`, one bracket per
/// display frame.
pub trait Surface {
    fn begin_frame(&mut self);
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn fill_circle(&mut self, circle: Circle, color: Color);
    fn draw_text(&mut self, text: &str, pos: IVec2, size: i32, color: Color);
    fn end_frame(&mut self);
}

/// Compose one frame from the current state.
///
/// A game-over frame draws only the GAME OVER banner, leaving the last
/// playfield image beneath it untouched.
pub fn draw_frame<S: Surface>(state: &GameState, settings: &Settings, surface: &mut S) {
    surface.begin_frame();

    match state.phase {
        GamePhase::GameOver => {
            surface.draw_text(
                "GAME OVER",
                IVec2::new(SCREEN_W / 2 - 100, SCREEN_H / 2),
                36,
                Color::WHITE,
            );
        }
        GamePhase::Playing => {
            surface.clear(Color::BLACK);

            surface.draw_text(
                &format!("Points: {}", state.score),
                IVec2::new(10, 10),
                14,
                Color::WHITE,
            );
            if settings.show_timer {
                surface.draw_text(
                    &format!("Time: {}s", state.elapsed_secs()),
                    IVec2::new(10, 30),
                    14,
                    Color::WHITE,
                );
            }

            surface.fill_rect(state.paddle.rect(), Color::WHITE);
            surface.fill_circle(state.ball.circle(), Color::WHITE);

            for brick in &state.bricks {
                surface.fill_rect(brick.rect, brick_color(brick.color));
            }
        }
    }

    surface.end_frame();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Call {
        Begin,
        Clear(Color),
        Rect(Rect, Color),
        Circle(Circle, Color),
        Text(String, IVec2, i32, Color),
        End,
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl Surface for Recorder {
        fn begin_frame(&mut self) {
            self.calls.push(Call::Begin);
        }
        fn clear(&mut self, color: Color) {
            self.calls.push(Call::Clear(color));
        }
        fn fill_rect(&mut self, rect: Rect, color: Color) {
            self.calls.push(Call::Rect(rect, color));
        }
        fn fill_circle(&mut self, circle: Circle, color: Color) {
            self.calls.push(Call::Circle(circle, color));
        }
        fn draw_text(&mut self, text: &str, pos: IVec2, size: i32, color: Color) {
            self.calls
                .push(Call::Text(text.to_string(), pos, size, color));
        }
        fn end_frame(&mut self) {
            self.calls.push(Call::End);
        }
    }

    #[test]
    fn test_playing_frame_draws_everything() {
        let state = GameState::new(5);
        let mut surface = Recorder::default();
        draw_frame(&state, &Settings::default(), &mut surface);

        assert_eq!(surface.calls.first(), Some(&Call::Begin));
        assert_eq!(surface.calls.last(), Some(&Call::End));
        assert!(surface.calls.contains(&Call::Clear(Color::BLACK)));

        let rects = surface
            .calls
            .iter()
            .filter(|c| matches!(c, Call::Rect(..)))
            .count();
        // Paddle plus 50 bricks
        assert_eq!(rects, 51);

        let circles = surface
            .calls
            .iter()
            .filter(|c| matches!(c, Call::Circle(..)))
            .count();
        assert_eq!(circles, 1);

        assert!(surface.calls.iter().any(
            |c| matches!(c, Call::Text(text, pos, 14, _) if text == "Points: 0" && *pos == IVec2::new(10, 10))
        ));
        assert!(surface.calls.iter().any(
            |c| matches!(c, Call::Text(text, pos, 14, _) if text == "Time: 0s" && *pos == IVec2::new(10, 30))
        ));
    }

    #[test]
    fn test_timer_line_respects_settings() {
        let state = GameState::new(5);
        let settings = Settings {
            show_timer: false,
            ..Default::default()
        };
        let mut surface = Recorder::default();
        draw_frame(&state, &settings, &mut surface);

        assert!(
            !surface
                .calls
                .iter()
                .any(|c| matches!(c, Call::Text(text, ..) if text.starts_with("Time:")))
        );
    }

    #[test]
    fn test_game_over_frame_is_banner_only() {
        let mut state = GameState::new(5);
        state.phase = GamePhase::GameOver;
        let mut surface = Recorder::default();
        draw_frame(&state, &Settings::default(), &mut surface);

        assert_eq!(surface.calls.len(), 3);
        assert_eq!(surface.calls[0], Call::Begin);
        assert_eq!(
            surface.calls[1],
            Call::Text(
                "GAME OVER".to_string(),
                IVec2::new(300, 300),
                36,
                Color::WHITE
            )
        );
        assert_eq!(surface.calls[2], Call::End);
    }

    #[test]
    fn test_palette_mapping_is_distinct() {
        use crate::sim::PALETTE;
        let mut colors: Vec<_> = PALETTE.iter().map(|&c| brick_color(c)).collect();
        colors.dedup();
        assert_eq!(colors.len(), PALETTE.len());
    }
}
