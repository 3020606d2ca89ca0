//! Post-bounce energy correction
//!
//! Repeated velocity negation under gravity drifts the ball's vertical energy.
//! After every bounce the vertical speed is rescaled so that
//! `GRAVITY * y + 0.5 * vy²` matches the baseline captured at construction.
//! Horizontal speed is conserved separately and never feeds into the budget.

use glam::DVec2;

use crate::consts::{ENERGY_TOLERANCE, GRAVITY};

/// Vertical mechanical energy (potential + vertical kinetic) per unit mass
#[inline]
pub fn vertical_energy(y: f64, vy: f64) -> f64 {
    GRAVITY * y + 0.5 * vy * vy
}

/// Restore the ball's vertical energy to `initial_energy`.
///
/// Only `vy`'s magnitude is touched; its direction is kept (zero counts as
/// downward-positive). When the baseline is below the potential energy at `y`
/// there is no real speed that satisfies it and `vy` is left alone. Returns
/// `true` if `vy` was rescaled.
pub fn enforce_energy_conservation(pos: DVec2, vel: &mut DVec2, initial_energy: f64) -> bool {
    let original_vx = vel.x;

    let mut corrected = false;
    let drift = initial_energy - vertical_energy(pos.y, vel.y);
    if drift.abs() > ENERGY_TOLERANCE {
        let required_kinetic = initial_energy - GRAVITY * pos.y;
        if required_kinetic > 0.0 {
            let sign = if vel.y < 0.0 { -1.0 } else { 1.0 };
            vel.y = sign * (2.0 * required_kinetic).sqrt();
            corrected = true;
            log::trace!("Energy drift {:.4} at y={:.2}, vy -> {:.4}", drift, pos.y, vel.y);
        }
    }

    if original_vx != 0.0 {
        vel.x = original_vx.abs().copysign(original_vx);
    }

    corrected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rescales_vy_keeping_direction() {
        // Baseline of a ball resting at y = 10
        let initial = GRAVITY * 10.0;

        let mut vel = DVec2::new(-1.5, -3.0);
        let corrected = enforce_energy_conservation(DVec2::new(100.0, 5.0), &mut vel, initial);
        assert!(corrected);
        assert!((vel.y - (-1.0)).abs() < 1e-12);
        assert_eq!(vel.x, -1.5);
        assert!((vertical_energy(5.0, vel.y) - initial).abs() <= ENERGY_TOLERANCE);

        let mut vel = DVec2::new(2.0, 3.0);
        enforce_energy_conservation(DVec2::new(100.0, 5.0), &mut vel, initial);
        assert!((vel.y - 1.0).abs() < 1e-12);
        assert_eq!(vel.x, 2.0);
    }

    #[test]
    fn test_zero_vy_treated_as_positive() {
        let initial = GRAVITY * 10.0;
        let mut vel = DVec2::new(1.0, 0.0);
        enforce_energy_conservation(DVec2::new(0.0, 2.0), &mut vel, initial);
        assert!(vel.y > 0.0);
        assert!((vertical_energy(2.0, vel.y) - initial).abs() <= ENERGY_TOLERANCE);
    }

    #[test]
    fn test_within_tolerance_is_untouched() {
        let initial = GRAVITY * 10.0;
        let vy = (2.0 * (initial - GRAVITY * 8.0)).sqrt() + 0.001;
        let mut vel = DVec2::new(1.0, vy);
        let corrected = enforce_energy_conservation(DVec2::new(0.0, 8.0), &mut vel, initial);
        assert!(!corrected);
        assert_eq!(vel.y, vy);
    }

    #[test]
    fn test_unreachable_baseline_leaves_vy() {
        // Deep below the start height the potential term alone exceeds the baseline
        let initial = GRAVITY * 10.0;
        let mut vel = DVec2::new(-1.5, 9.0);
        let corrected = enforce_energy_conservation(DVec2::new(300.0, 540.0), &mut vel, initial);
        assert!(!corrected);
        assert_eq!(vel, DVec2::new(-1.5, 9.0));
    }

    #[test]
    fn test_zero_vx_guarded() {
        let initial = GRAVITY * 10.0;
        let mut vel = DVec2::new(0.0, -4.0);
        enforce_energy_conservation(DVec2::new(0.0, 5.0), &mut vel, initial);
        assert_eq!(vel.x, 0.0);
        assert!(!vel.x.is_nan());
    }
}
