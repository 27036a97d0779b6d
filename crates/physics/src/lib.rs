#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Sword Rig Physics
//!
//! The simulation core behind the swinging sword: two point masses joined by
//! a rigid stick, advanced with Verlet-style position-based dynamics.
//!
//! ## Key Components
//!
//! -   **Particles:** [`ParticleSystem`] owns the anchor and the free end and
//!     integrates them each tick. Each particle is [`ParticleState::Free`],
//!     [`ParticleState::Pinned`] or [`ParticleState::Frozen`].
//! -   **Constraint:** [`constraint::relax`] pulls the free end back to the
//!     rest length with a fixed number of anchor-biased passes.
//! -   **Interaction:** [`InteractionController`] turns pointer events into
//!     pin/release transitions, unprojecting through any [`Unproject`].
//! -   **Boundary:** [`BoundaryMonitor`] freezes the rig once its midpoint
//!     leaves the [`ViewportBounds`].
//! -   **Simulation:** [`RigSim`] composes the above behind a single
//!     [`RigSim::tick`] and returns the [`RigPose`] to draw.
//!
//! ## Usage
//!
//! ```rust
//! use physics::{RigConfig, RigSim, ViewportBounds};
//!
//! let mut sim = RigSim::from_config(&RigConfig::default()).unwrap();
//! let bounds = ViewportBounds::from_window(800, 600, 0.005);
//! let pose = sim.tick(1.0 / 60.0, &bounds);
//! assert!(!pose.frozen);
//! ```

pub mod boundary;
pub mod clock;
pub mod config;
pub mod constraint;
pub mod error;
pub mod interaction;
pub mod particles;
pub mod simulation;
pub mod transform;
pub mod types;

pub use boundary::{BoundaryMonitor, ViewportBounds};
pub use clock::FrameClock;
pub use config::{Gravity, RigConfig, GRAVITY_RANGE};
pub use error::RigError;
pub use interaction::{InteractionController, PointerEvent, Unproject};
pub use particles::ParticleSystem;
pub use simulation::{orientation_angle, RigSim};
pub use types::{
    Particle, ParticleState, RigDebugInfo, RigPose, Vec3, ANCHOR, FREE_END,
};
