//! Transform matrix utilities for the rig
//!
//! This module converts a [`RigPose`] into the 4x4 model matrices the
//! renderer uploads: one for the sword mesh and one per particle marker.

use glam::{Mat4, Quat};

use crate::types::{RigPose, Vec3};

/// Model matrix for the mesh: rotate about the view axis, then move to the anchor.
#[must_use]
pub fn pose_matrix(pose: &RigPose) -> Mat4 {
    Mat4::from_rotation_translation(Quat::from_rotation_z(pose.rotation), pose.anchor)
}

/// Same as [`pose_matrix`] in column-major array form for GPU upload.
#[must_use]
pub fn to_transform_matrix(pose: &RigPose) -> [[f32; 4]; 4] {
    pose_matrix(pose).to_cols_array_2d()
}

/// Uniformly scaled, unrotated marker placed on a particle.
#[must_use]
pub fn marker_matrix(position: Vec3, radius: f32) -> Mat4 {
    Mat4::from_scale_rotation_translation(Vec3::splat(radius), Quat::IDENTITY, position)
}
