//! Orthographic camera looking down -Z at the rig's working plane
//!
//! The visible region grows with the window: every logical pixel covers a
//! fixed number of world units, so resizing reveals more of the plane rather
//! than stretching the sword. The same camera unprojects pointer positions
//! for the rig's interaction controller.

use glam::{Mat4, Vec2, Vec3};
use physics::{Unproject, ViewportBounds};
use winit::dpi::{PhysicalPosition, PhysicalSize};

/// Near clipping plane distance
const ZNEAR: f32 = 0.1;
/// Far clipping plane distance
const ZFAR: f32 = 100.0;

pub struct OrthoCamera {
    /// Window width in logical pixels
    pub width: f32,
    /// Window height in logical pixels
    pub height: f32,
    /// World units per logical pixel
    pub scale: f32,
    /// Distance of the eye from the plane z = 0
    pub distance: f32,
}

impl OrthoCamera {
    pub fn new(width: f32, height: f32, scale: f32, distance: f32) -> Self {
        Self {
            width,
            height,
            scale,
            distance,
        }
    }

    /// Update the visible extent after a resize. Zero sizes (minimised
    /// windows) are ignored.
    pub fn resize(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.width = width;
            self.height = height;
        }
    }

    /// World-space region visible on the working plane.
    pub fn bounds(&self) -> ViewportBounds {
        ViewportBounds {
            left: -self.width * self.scale,
            right: self.width * self.scale,
            top: self.height * self.scale,
            bottom: -self.height * self.scale,
        }
    }

    pub fn eye(&self) -> Vec3 {
        Vec3::new(0.0, 0.0, self.distance)
    }

    /// Computes a view projection matrix from the camera parameters
    pub fn build_view_projection_matrix(&self) -> Mat4 {
        let bounds = self.bounds();
        let view = Mat4::look_at_rh(self.eye(), Vec3::ZERO, Vec3::Y);
        let proj = Mat4::orthographic_rh(
            bounds.left,
            bounds.right,
            bounds.bottom,
            bounds.top,
            ZNEAR,
            ZFAR,
        );
        proj * view
    }
}

impl Unproject for OrthoCamera {
    fn unproject(&self, ndc: Vec2) -> Vec3 {
        let inverse = self.build_view_projection_matrix().inverse();
        inverse.project_point3(Vec3::new(ndc.x, ndc.y, 0.5))
    }
}

/// Convert a cursor position in physical pixels to normalized device
/// coordinates, with +Y pointing up.
pub fn cursor_to_ndc(position: PhysicalPosition<f64>, size: PhysicalSize<u32>) -> Vec2 {
    let width = f64::from(size.width.max(1));
    let height = f64::from(size.height.max(1));
    #[allow(clippy::cast_possible_truncation)]
    Vec2::new(
        (position.x / width * 2.0 - 1.0) as f32,
        (-(position.y / height) * 2.0 + 1.0) as f32,
    )
}
