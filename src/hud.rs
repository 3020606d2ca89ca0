//! What the renderer should draw
//!
//! The renderer is owned by the host; this module only derives draw data from
//! [`GameState`] so every frontend shows the same layout, colours and text.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{GamePhase, GameState, Rect};

/// RGBA colour
pub type Color = [u8; 4];

pub const BACKGROUND_COLOR: Color = [0, 0, 0, 255];
pub const PADDLE_COLOR: Color = [0, 255, 0, 255];
pub const BALL_COLOR: Color = [255, 255, 255, 255];

/// A filled rectangle to draw
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    pub rect: Rect,
    pub color: Color,
}

/// A line of overlay text at a screen position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLine {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

impl TextLine {
    fn new(text: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            text: text.into(),
            x,
            y,
        }
    }
}

/// Block colour for a row: green at the top fading to magenta at the bottom
pub fn block_color(row: usize) -> Color {
    let t = row as f64 / BLOCK_ROWS as f64;
    let rb = (t * 255.0) as u8;
    let g = ((1.0 - t) * 255.0) as u8;
    [rb, g, rb, 255]
}

/// Every rectangle for this frame, back to front
pub fn sprites(state: &GameState) -> Vec<Sprite> {
    let mut sprites = Vec::with_capacity(state.blocks.alive_count() + 2);
    sprites.push(Sprite {
        rect: state.paddle_rect(),
        color: PADDLE_COLOR,
    });
    sprites.push(Sprite {
        rect: state.ball_rect(),
        color: BALL_COLOR,
    });
    sprites.extend(state.blocks.alive_cells().map(|(row, _, cell)| Sprite {
        rect: cell.inset(BLOCK_RENDER_MARGIN),
        color: block_color(row),
    }));
    sprites
}

pub fn score_line(state: &GameState) -> TextLine {
    TextLine::new(format!("Score: {}", state.score), 0.0, 0.0)
}

/// Phase-dependent prompts
pub fn overlay_lines(state: &GameState) -> Vec<TextLine> {
    match state.phase {
        GamePhase::NotStarted => vec![TextLine::new("Press SPACE to start", 300.0, 250.0)],
        GamePhase::Playing => Vec::new(),
        GamePhase::GameOver => vec![
            TextLine::new("GAME OVER!", 350.0, 250.0),
            TextLine::new("Press R to restart", 350.0, 270.0),
        ],
        GamePhase::Won => vec![
            TextLine::new("YOU WIN!", 370.0, 250.0),
            TextLine::new("Press R to restart", 350.0, 270.0),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_colors() {
        assert_eq!(block_color(0), [0, 255, 0, 255]);
        assert_eq!(block_color(1), [51, 204, 51, 255]);
    }

    #[test]
    fn test_sprites_for_new_game() {
        let state = GameState::new();
        let sprites = sprites(&state);
        assert_eq!(sprites.len(), 2 + BLOCK_ROWS * (BLOCK_COLS - 2));
        assert_eq!(sprites[0].color, PADDLE_COLOR);
        assert_eq!(sprites[1].rect, Rect::new(770.0, 10.0, BALL_SIZE, BALL_SIZE));

        // First block carries the render margin
        assert_eq!(sprites[2].rect, Rect::new(0.0, 0.0, 78.0, 28.0));
    }

    #[test]
    fn test_overlay_follows_phase() {
        let mut state = GameState::new();
        assert_eq!(overlay_lines(&state).len(), 1);

        state.phase = GamePhase::Playing;
        assert!(overlay_lines(&state).is_empty());

        state.phase = GamePhase::Won;
        let lines = overlay_lines(&state);
        assert_eq!(lines[0].text, "YOU WIN!");
        assert!(lines[1].text.contains("restart"));

        state.score = 40;
        assert_eq!(score_line(&state).text, "Score: 40");
    }
}
