//! Procedural sword and particle marker geometry
//!
//! The sword is built in model space with the hilt (the anchor) at the
//! origin and the blade hanging along -Y, ending at the free end one stick
//! length below. Every frame the model is pushed through the rig's pose
//! matrix, so the CPU emits world-space triangles and the shader only applies
//! the camera.

use glam::{Mat4, Vec3};
use physics::transform::{marker_matrix, pose_matrix};
use physics::RigPose;

use crate::gpu_types::Vertex;

const BLADE: [f32; 3] = [0.78, 0.80, 0.84];
const EDGE: [f32; 3] = [0.55, 0.58, 0.63];
const GUARD: [f32; 3] = [0.83, 0.66, 0.22];
const GRIP: [f32; 3] = [0.36, 0.20, 0.12];
const MARKER: [f32; 3] = [1.0, 1.0, 1.0];

/// Radius of the optional particle markers
pub const MARKER_RADIUS: f32 = 0.2;
const MARKER_SEGMENTS: usize = 16;

/// Sword triangles in model space for a stick of `length`.
pub fn sword_model(length: f32) -> Vec<(Vec3, [f32; 3])> {
    let half_blade = 0.08 * length;
    let blade_start = -0.06 * length;
    let tip_start = -0.88 * length;
    let tip = -length;
    let guard_half = 0.3 * length;
    let guard_height = 0.05 * length;
    let grip_half = 0.04 * length;
    let grip_top = 0.22 * length;

    let mut triangles = Vec::with_capacity(24);
    let mut quad = |a: Vec3, b: Vec3, c: Vec3, d: Vec3, color: [f32; 3]| {
        triangles.extend([(a, color), (b, color), (c, color)]);
        triangles.extend([(a, color), (c, color), (d, color)]);
    };

    // Blade: a bright left half and a darker right half give it an edge.
    quad(
        Vec3::new(-half_blade, blade_start, 0.0),
        Vec3::new(-half_blade, tip_start, 0.0),
        Vec3::new(0.0, tip_start, 0.0),
        Vec3::new(0.0, blade_start, 0.0),
        BLADE,
    );
    quad(
        Vec3::new(0.0, blade_start, 0.0),
        Vec3::new(0.0, tip_start, 0.0),
        Vec3::new(half_blade, tip_start, 0.0),
        Vec3::new(half_blade, blade_start, 0.0),
        EDGE,
    );
    quad(
        Vec3::new(-guard_half, -guard_height, 0.0),
        Vec3::new(guard_half, -guard_height, 0.0),
        Vec3::new(guard_half, 0.0, 0.0),
        Vec3::new(-guard_half, 0.0, 0.0),
        GUARD,
    );
    quad(
        Vec3::new(-grip_half, 0.0, 0.0),
        Vec3::new(grip_half, 0.0, 0.0),
        Vec3::new(grip_half, grip_top, 0.0),
        Vec3::new(-grip_half, grip_top, 0.0),
        GRIP,
    );

    triangles.extend([
        (Vec3::new(-half_blade, tip_start, 0.0), BLADE),
        (Vec3::new(0.0, tip, 0.0), BLADE),
        (Vec3::new(0.0, tip_start, 0.0), BLADE),
        (Vec3::new(0.0, tip_start, 0.0), EDGE),
        (Vec3::new(0.0, tip, 0.0), EDGE),
        (Vec3::new(half_blade, tip_start, 0.0), EDGE),
    ]);
    triangles
}

/// Unit disc as a triangle fan, scaled by [`marker_matrix`].
fn marker_model() -> Vec<Vec3> {
    let mut fan = Vec::with_capacity(MARKER_SEGMENTS * 3);
    #[allow(clippy::cast_precision_loss)]
    let step = std::f32::consts::TAU / MARKER_SEGMENTS as f32;
    for i in 0..MARKER_SEGMENTS {
        #[allow(clippy::cast_precision_loss)]
        let (a, b) = (i as f32 * step, (i + 1) as f32 * step);
        fan.push(Vec3::ZERO);
        fan.push(Vec3::new(a.cos(), a.sin(), 0.0));
        fan.push(Vec3::new(b.cos(), b.sin(), 0.0));
    }
    fan
}

fn push_transformed(out: &mut Vec<Vertex>, transform: Mat4, model: &[(Vec3, [f32; 3])]) {
    out.extend(model.iter().map(|(position, color)| Vertex {
        position: transform.transform_point3(*position).to_array(),
        color: *color,
    }));
}

/// Builds the per-frame vertex list for a pose.
pub struct SceneMesh {
    sword: Vec<(Vec3, [f32; 3])>,
    marker: Vec<(Vec3, [f32; 3])>,
}

impl SceneMesh {
    pub fn new(stick_length: f32) -> Self {
        Self {
            sword: sword_model(stick_length),
            marker: marker_model().into_iter().map(|p| (p, MARKER)).collect(),
        }
    }

    /// World-space triangles for `pose`, optionally with particle markers.
    pub fn vertices(&self, pose: &RigPose, show_markers: bool) -> Vec<Vertex> {
        let mut out = Vec::with_capacity(self.sword.len() + 2 * self.marker.len());
        push_transformed(&mut out, pose_matrix(pose), &self.sword);
        if show_markers {
            for position in [pose.anchor, pose.free_end] {
                push_transformed(&mut out, marker_matrix(position, MARKER_RADIUS), &self.marker);
            }
        }
        out
    }

    /// Upper bound on vertices emitted per frame.
    pub fn max_vertices(&self) -> usize {
        self.sword.len() + 2 * self.marker.len()
    }
}
