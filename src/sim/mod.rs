//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-tick increments only (no wall-clock scaling)
//! - No randomness
//! - Row-major, first-hit-wins block scanning
//! - No rendering or platform dependencies

pub mod collision;
pub mod energy;
pub mod state;
pub mod tick;

pub use collision::{BlockHit, CellRange, HitAxis, Rect, cell_rect, find_block_hit};
pub use energy::{enforce_energy_conservation, vertical_energy};
pub use state::{Ball, BlockGrid, GameEvent, GamePhase, GameState, Paddle, Surface};
pub use tick::{TickInput, advance};
