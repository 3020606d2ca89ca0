//! Platform abstraction layer
//!
//! Host-side helpers that sit between a windowing framework and the simulation:
//! - Input: raw key levels to edge-triggered tick input
//! - Time: wall-clock frame time to a whole number of fixed ticks

pub mod input;
pub mod time;

pub use input::{KeyState, KeyTracker};
pub use time::FixedStep;
