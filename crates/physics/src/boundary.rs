//! Freezes the rig once it has been flung out of view.

use crate::particles::ParticleSystem;
use crate::types::Vec3;

/// Visible region of the working plane in world units.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViewportBounds {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl ViewportBounds {
    /// Bounds centred on the origin for a window of `width` x `height`
    /// pixels, with `scale` world units per pixel.
    #[must_use]
    pub fn from_window(width: u32, height: u32, scale: f32) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let (w, h) = (width as f32 * scale, height as f32 * scale);
        Self {
            left: -w,
            right: w,
            top: h,
            bottom: -h,
        }
    }

    /// Whether `point` lies within the bounds; edges count as inside.
    #[must_use]
    pub fn contains(&self, point: Vec3) -> bool {
        !(point.x > self.right
            || point.x < self.left
            || point.y > self.top
            || point.y < self.bottom)
    }
}

/// Checks the rig midpoint against the viewport once per tick.
#[derive(Copy, Clone, Debug, Default)]
pub struct BoundaryMonitor;

impl BoundaryMonitor {
    /// Freeze `particles` if their midpoint is outside `bounds`.
    ///
    /// Returns `true` only on the tick the rig gets frozen.
    pub fn check(particles: &mut ParticleSystem, bounds: &ViewportBounds) -> bool {
        if particles.is_frozen() {
            return false;
        }
        let midpoint = particles.midpoint();
        if bounds.contains(midpoint) {
            return false;
        }
        tracing::info!(
            "Rig left the viewport at ({:.3}, {:.3}); freezing",
            midpoint.x,
            midpoint.y
        );
        particles.freeze();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_bounds_scale_with_size() {
        let bounds = ViewportBounds::from_window(800, 600, 0.005);
        assert!((bounds.right - 4.0).abs() < 1e-6);
        assert!((bounds.left + 4.0).abs() < 1e-6);
        assert!((bounds.top - 3.0).abs() < 1e-6);
        assert!((bounds.bottom + 3.0).abs() < 1e-6);
    }

    #[test]
    fn edges_are_inside() {
        let bounds = ViewportBounds::from_window(200, 200, 0.005);
        assert!(bounds.contains(Vec3::new(1.0, 1.0, 0.0)));
        assert!(bounds.contains(Vec3::new(-1.0, -1.0, 0.0)));
        assert!(!bounds.contains(Vec3::new(1.01, 0.0, 0.0)));
    }
}
