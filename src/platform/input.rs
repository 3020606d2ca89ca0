//! Keyboard state tracking
//!
//! Hosts report which keys are down every frame. Movement keys are
//! level-triggered; launch and restart fire only on the frame the key goes
//! down, so holding them never relaunches or restarts repeatedly.

use crate::sim::TickInput;

/// Raw key levels sampled by the host this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub left: bool,
    pub right: bool,
    pub launch: bool,
    pub restart: bool,
}

/// Turns per-frame key levels into tick input
#[derive(Debug, Clone, Default)]
pub struct KeyTracker {
    previous: KeyState,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sample this frame's keys
    pub fn update(&mut self, keys: KeyState) -> TickInput {
        let input = TickInput {
            left: keys.left,
            right: keys.right,
            launch: keys.launch && !self.previous.launch,
            restart: keys.restart && !self.previous.restart,
        };
        self.previous = keys;
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_is_edge_triggered() {
        let mut tracker = KeyTracker::new();
        let held = KeyState {
            launch: true,
            ..Default::default()
        };

        assert!(tracker.update(held).launch);
        assert!(!tracker.update(held).launch);
        assert!(!tracker.update(held).launch);

        // Release and press again
        assert!(!tracker.update(KeyState::default()).launch);
        assert!(tracker.update(held).launch);
    }

    #[test]
    fn test_restart_is_edge_triggered() {
        let mut tracker = KeyTracker::new();
        let held = KeyState {
            restart: true,
            ..Default::default()
        };
        assert!(tracker.update(held).restart);
        assert!(!tracker.update(held).restart);
    }

    #[test]
    fn test_movement_is_level_triggered() {
        let mut tracker = KeyTracker::new();
        let held = KeyState {
            left: true,
            right: true,
            ..Default::default()
        };
        for _ in 0..3 {
            let input = tracker.update(held);
            assert!(input.left && input.right);
        }
    }
}
