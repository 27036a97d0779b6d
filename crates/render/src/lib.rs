//! Windowed presentation of the sword rig: an orthographic camera over the
//! working plane, a flat-shaded sword mesh and the winit frame loop that
//! feeds pointer input and frame deltas into [`physics::RigSim`].

pub mod camera;
pub mod gpu_types;
pub mod mesh;
pub mod pipeline;
pub mod run;
pub mod state;

pub use camera::OrthoCamera;
pub use run::{run, RunSettings};
