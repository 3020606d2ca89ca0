//! Block Breaker - A single-screen block breaking arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (gravity, collisions, energy correction, game state)
//! - `platform`: Host-side helpers (edge-triggered input, fixed-step frame driver)
//! - `hud`: What the renderer should draw, derived from the simulation state
//! - `settings`: Feel options that are not compiled-in constants

pub mod hud;
pub mod platform;
pub mod settings;
pub mod sim;

pub use settings::{PaddleDeflection, Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Host tick rate. Physics advances in fixed per-tick increments, never scaled by wall time.
    pub const TICK_RATE: u32 = 60;
    /// Seconds per tick for the frame driver
    pub const SIM_DT: f64 = 1.0 / TICK_RATE as f64;
    /// Maximum ticks per rendered frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Screen dimensions
    pub const SCREEN_WIDTH: f64 = 800.0;
    pub const SCREEN_HEIGHT: f64 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f64 = 100.0;
    pub const PADDLE_HEIGHT: f64 = 20.0;
    /// Paddle rides this far above the bottom edge
    pub const PADDLE_BOTTOM_GAP: f64 = 50.0;
    /// Horizontal paddle movement per tick while a direction key is held
    pub const PADDLE_STEP: f64 = 5.0;

    /// Ball defaults (square)
    pub const BALL_SIZE: f64 = 10.0;
    /// Start position: top-right corner, clear of the two empty columns
    pub const BALL_START_X: f64 = SCREEN_WIDTH - BALL_SIZE - 20.0;
    pub const BALL_START_Y: f64 = 10.0;
    /// Initial horizontal speed (ball starts moving left)
    pub const BALL_START_SPEED_X: f64 = 1.5;

    /// Block grid
    pub const BLOCK_WIDTH: f64 = 80.0;
    pub const BLOCK_HEIGHT: f64 = 30.0;
    pub const BLOCK_ROWS: usize = 5;
    pub const BLOCK_COLS: usize = 10;
    /// Rightmost columns left empty in the fixed layout
    pub const CLEARED_RIGHT_COLS: usize = 2;
    /// Render-only gap between neighbouring blocks
    pub const BLOCK_RENDER_MARGIN: f64 = 2.0;
    /// Points per destroyed block
    pub const BLOCK_SCORE: u32 = 10;

    /// Downward acceleration (px/tick²)
    pub const GRAVITY: f64 = 0.1;
    /// Allowed drift from the reference energy before a bounce is corrected
    pub const ENERGY_TOLERANCE: f64 = 0.01;
    /// Horizontal speed per pixel of offset from paddle centre (angled deflection only)
    pub const DEFLECTION_FACTOR: f64 = 0.1;
}
