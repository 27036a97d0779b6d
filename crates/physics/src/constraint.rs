//! # Distance Constraint Relaxation
//!
//! The rig is held together by a single rigid stick. Instead of solving the
//! constraint analytically, the free end is nudged back onto the sphere of
//! radius `rest_length` around the anchor a fixed number of times per tick.
//! Only the free end ever moves: the anchor is treated as infinitely heavy,
//! which keeps a dragged anchor glued to the pointer.

use crate::types::Vec3;

/// Default number of relaxation passes per tick.
pub const DEFAULT_SOLVER_ITERATIONS: u32 = 50;

/// Run `iterations` relaxation passes and return the corrected free end.
///
/// Each pass measures the current separation, takes the absolute error
/// against `rest_length` and moves the free end by that error towards the
/// anchor (stick too long) or away from it (stick too short). Coincident
/// points have no defined direction, so such a pass leaves the free end
/// where it is rather than producing NaN.
#[must_use]
pub fn relax(anchor: Vec3, free_end: Vec3, rest_length: f32, iterations: u32) -> Vec3 {
    let mut free_end = free_end;
    for _ in 0..iterations {
        let separation = anchor.distance(free_end);
        let error = (separation - rest_length).abs();

        let direction = if separation > rest_length {
            (anchor - free_end).normalize_or_zero()
        } else if separation < rest_length {
            (free_end - anchor).normalize_or_zero()
        } else {
            Vec3::ZERO
        };

        let correction = direction * error;
        if correction.is_finite() {
            free_end += correction;
        }
    }
    free_end
}

/// How far the stick currently is from its rest length.
#[must_use]
pub fn residual(anchor: Vec3, free_end: Vec3, rest_length: f32) -> f32 {
    (anchor.distance(free_end) - rest_length).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stretched_stick_pulls_free_end_toward_anchor() {
        let anchor = Vec3::ZERO;
        let free_end = relax(anchor, Vec3::new(3.0, 0.0, 0.0), 1.0, 1);
        assert!((free_end.x - 1.0).abs() < 1e-6);
        assert_eq!(free_end.y, 0.0);
    }

    #[test]
    fn compressed_stick_pushes_free_end_away() {
        let anchor = Vec3::new(0.0, 1.0, 0.0);
        let free_end = relax(anchor, Vec3::new(0.0, 0.5, 0.0), 2.0, 1);
        assert!((free_end.y - (-1.0)).abs() < 1e-6);
    }

    #[test]
    fn anchor_is_never_moved() {
        let anchor = Vec3::new(0.25, -4.0, 0.0);
        let before = anchor;
        let _ = relax(anchor, Vec3::new(9.0, 9.0, 0.0), 1.0, 50);
        assert_eq!(anchor, before);
    }

    #[test]
    fn satisfied_stick_is_left_alone() {
        let anchor = Vec3::ZERO;
        let free_end = Vec3::new(0.0, -2.0, 0.0);
        assert_eq!(relax(anchor, free_end, 2.0, 10), free_end);
    }

    #[test]
    fn zero_iterations_is_a_no_op() {
        let free_end = Vec3::new(5.0, 5.0, 5.0);
        assert_eq!(relax(Vec3::ZERO, free_end, 1.0, 0), free_end);
    }

    #[test]
    fn coincident_points_stay_finite() {
        let p = Vec3::new(1.0, 1.0, 0.0);
        let free_end = relax(p, p, 1.67, 50);
        assert!(free_end.is_finite());
        assert_eq!(free_end, p);
    }
}
