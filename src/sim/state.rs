//! Game state and core simulation types
//!
//! One exclusively-owned record holds everything the simulation mutates.
//! Restart replaces the whole value rather than resetting fields.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::collision::{Rect, cell_rect};
use crate::consts::*;
use crate::settings::Settings;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for launch; only the paddle moves
    NotStarted,
    /// Active gameplay
    Playing,
    /// Ball fell past the bottom edge
    GameOver,
    /// Every block destroyed
    Won,
}

impl GamePhase {
    /// Run has finished (restart is the only accepted input)
    pub fn is_ended(&self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::Won)
    }
}

/// What the ball bounced off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Surface {
    Wall,
    Ceiling,
    Paddle,
    Block,
}

/// Gameplay events produced by a single tick (for effects, never read by physics)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Launched,
    Bounced(Surface),
    BlockDestroyed { row: usize, col: usize },
    GameOver,
    Won,
    Restarted,
}

/// The ball (square)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: DVec2,
    /// Position at the start of the current tick (swept tests and wall rollback)
    pub prev_pos: DVec2,
    pub vel: DVec2,
}

impl Ball {
    pub fn new(pos: DVec2, vel: DVec2) -> Self {
        Self {
            pos,
            prev_pos: pos,
            vel,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::square(self.pos, BALL_SIZE)
    }

    pub fn prev_rect(&self) -> Rect {
        Rect::square(self.prev_pos, BALL_SIZE)
    }

    /// Remember where the ball was before moving
    pub fn snapshot(&mut self) {
        self.prev_pos = self.pos;
    }

    /// Move by one tick of velocity, then accelerate downward
    pub fn integrate(&mut self, gravity: f64) {
        self.pos += self.vel;
        self.vel.y += gravity;
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new(
            DVec2::new(BALL_START_X, BALL_START_Y),
            DVec2::new(-BALL_START_SPEED_X, 0.0),
        )
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner; `y` never changes
    pub pos: DVec2,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            pos: DVec2::new(
                (SCREEN_WIDTH - PADDLE_WIDTH) / 2.0,
                SCREEN_HEIGHT - PADDLE_BOTTOM_GAP,
            ),
        }
    }
}

impl Paddle {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, PADDLE_WIDTH, PADDLE_HEIGHT)
    }

    pub fn center_x(&self) -> f64 {
        self.pos.x + PADDLE_WIDTH / 2.0
    }

    /// Slide by `dx`, clamped to the screen
    pub fn shift(&mut self, dx: f64) {
        self.pos.x = (self.pos.x + dx).clamp(0.0, SCREEN_WIDTH - PADDLE_WIDTH);
    }
}

/// Fixed grid of destructible blocks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockGrid {
    cells: [[bool; BLOCK_COLS]; BLOCK_ROWS],
}

impl BlockGrid {
    /// Every cell alive
    pub fn full() -> Self {
        Self {
            cells: [[true; BLOCK_COLS]; BLOCK_ROWS],
        }
    }

    /// The level layout: full grid minus the rightmost columns
    pub fn initial_layout() -> Self {
        let mut grid = Self::full();
        for row in grid.cells.iter_mut() {
            for cell in row.iter_mut().skip(BLOCK_COLS - CLEARED_RIGHT_COLS) {
                *cell = false;
            }
        }
        grid
    }

    /// Out-of-range cells read as dead
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false)
    }

    /// Kill a cell. Returns `true` only if it was alive; dead cells stay dead.
    pub fn destroy(&mut self, row: usize, col: usize) -> bool {
        match self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) if *cell => {
                *cell = false;
                true
            }
            _ => false,
        }
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&alive| alive).count()
    }

    pub fn all_destroyed(&self) -> bool {
        self.cells.iter().flatten().all(|&alive| !alive)
    }

    /// Alive matrix, row by row
    pub fn rows(&self) -> &[[bool; BLOCK_COLS]; BLOCK_ROWS] {
        &self.cells
    }

    /// Alive cells with their screen rectangles, in row-major order
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize, Rect)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cols)| {
            cols.iter()
                .enumerate()
                .filter(|&(_, &alive)| alive)
                .map(move |(col, _)| (row, col, cell_rect(row, col)))
        })
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Feel options, carried across restarts
    pub settings: Settings,
    /// Current phase
    pub phase: GamePhase,
    /// Player paddle
    pub paddle: Paddle,
    /// The ball
    pub ball: Ball,
    /// Block grid
    pub blocks: BlockGrid,
    /// Score
    pub score: u32,
    /// Vertical energy every bounce is corrected back to
    pub initial_energy: f64,
    /// Height the baseline energy was measured at
    pub initial_height: f64,
    /// Playing ticks simulated so far
    pub time_ticks: u64,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Create a fresh game with default settings
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Create a fresh game
    pub fn with_settings(settings: Settings) -> Self {
        let ball = Ball::default();
        let initial_height = ball.pos.y;

        Self {
            settings,
            phase: GamePhase::NotStarted,
            paddle: Paddle::default(),
            ball,
            blocks: BlockGrid::initial_layout(),
            score: 0,
            initial_energy: GRAVITY * initial_height,
            initial_height,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Replace everything with a fresh game, keeping settings
    pub fn restart(&mut self) {
        *self = Self::with_settings(self.settings.clone());
        self.events.push(GameEvent::Restarted);
    }

    pub fn paddle_rect(&self) -> Rect {
        self.paddle.rect()
    }

    pub fn ball_rect(&self) -> Rect {
        self.ball.rect()
    }

    pub fn game_started(&self) -> bool {
        self.phase != GamePhase::NotStarted
    }

    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn game_won(&self) -> bool {
        self.phase == GamePhase::Won
    }

    /// Current vertical energy of the ball
    pub fn ball_energy(&self) -> f64 {
        super::energy::vertical_energy(self.ball.pos.y, self.ball.vel.y)
    }
}
