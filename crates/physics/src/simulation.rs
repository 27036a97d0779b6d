//! # Rig Simulation Core
//!
//! [`RigSim`] is the single-threaded entry point the frame loop drives. One
//! call to [`RigSim::tick`] runs to completion:
//!
//! 1. integrate both particles and relax the stick ([`ParticleSystem::step`])
//! 2. freeze the rig if its midpoint left the viewport ([`BoundaryMonitor`])
//! 3. derive the pose the presentation layer draws ([`RigPose`])
//!
//! Pointer events are applied between ticks through [`RigSim::handle_pointer`].
//! The simulation never schedules itself; stopping is simply not calling
//! `tick` again.

use std::f32::consts::{FRAC_PI_2, TAU};

use crate::boundary::{BoundaryMonitor, ViewportBounds};
use crate::config::{Gravity, RigConfig};
use crate::error::RigError;
use crate::interaction::{InteractionController, PointerEvent, Unproject};
use crate::particles::ParticleSystem;
use crate::types::{RigDebugInfo, RigPose, Vec3};

/// Main rig simulation container
pub struct RigSim {
    pub particles: ParticleSystem,
    pub controller: InteractionController,
    pub gravity: Gravity,
    initial_anchor: Vec3,
    ticks: u64,
}

impl RigSim {
    /// Create a rig hanging from `anchor`.
    #[must_use]
    pub fn new(anchor: Vec3, rest_length: f32, solver_iterations: u32, gravity: Gravity) -> Self {
        Self {
            particles: ParticleSystem::new(anchor, rest_length, solver_iterations),
            controller: InteractionController::new(),
            gravity,
            initial_anchor: anchor,
            ticks: 0,
        }
    }

    /// Create a rig from a config, validating it first.
    ///
    /// # Errors
    ///
    /// Returns the validation error if `config` is out of range.
    pub fn from_config(config: &RigConfig) -> Result<Self, RigError> {
        config.validate()?;
        tracing::info!(
            "Building rig: anchor {:?}, rest length {}, {} solver iterations",
            config.anchor,
            config.rest_length,
            config.solver_iterations
        );
        Ok(Self::new(
            config.anchor(),
            config.rest_length,
            config.solver_iterations,
            config.gravity(),
        ))
    }

    /// Advance one frame and return the pose to draw.
    pub fn tick(&mut self, delta_time: f32, bounds: &ViewportBounds) -> RigPose {
        self.particles.step(delta_time, self.gravity.get());
        BoundaryMonitor::check(&mut self.particles, bounds);
        self.ticks += 1;
        self.pose()
    }

    /// Apply a pointer event. Returns `true` if the rig state changed.
    pub fn handle_pointer(&mut self, event: PointerEvent, camera: &dyn Unproject) -> bool {
        self.controller.handle(event, &mut self.particles, camera)
    }

    /// Current pose without advancing the simulation.
    #[must_use]
    pub fn pose(&self) -> RigPose {
        let anchor = self.particles.anchor().position;
        let free_end = self.particles.free_end().position;
        RigPose {
            anchor,
            free_end,
            rotation: orientation_angle(anchor, free_end),
            frozen: self.particles.is_frozen(),
        }
    }

    /// Rebuild the rig at its initial anchor, keeping the tuned gravity.
    pub fn reset(&mut self) {
        tracing::info!("Resetting rig after {} ticks", self.ticks);
        self.particles = ParticleSystem::new(
            self.initial_anchor,
            self.particles.rest_length(),
            self.particles.solver_iterations(),
        );
        self.controller = InteractionController::new();
        self.ticks = 0;
    }

    /// Whether `config` describes the rig that is running: same start anchor,
    /// rest length and solver iterations. Gravity and view settings are
    /// ignored since they apply live.
    #[must_use]
    pub fn matches_shape(&self, config: &RigConfig) -> bool {
        config.anchor() == self.initial_anchor
            && (config.rest_length - self.particles.rest_length()).abs() <= f32::EPSILON
            && config.solver_iterations == self.particles.solver_iterations()
    }

    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Get debug information
    #[must_use]
    pub fn get_debug_info(&self) -> RigDebugInfo {
        RigDebugInfo {
            anchor: self.particles.anchor().position,
            free_end: self.particles.free_end().position,
            anchor_state: self.particles.anchor().state,
            free_end_state: self.particles.free_end().state,
            separation: self.particles.separation(),
            rest_length: self.particles.rest_length(),
            holding: self.controller.is_holding(),
            gravity: self.gravity.get(),
        }
    }
}

impl Default for RigSim {
    fn default() -> Self {
        let config = RigConfig::default();
        Self::new(
            config.anchor(),
            config.rest_length,
            config.solver_iterations,
            config.gravity(),
        )
    }
}

/// Rotation of the displayed mesh about the view axis.
///
/// The angle of the stick (pointing from the free end up to the anchor) is
/// normalized into `[0, 2π)` and offset by `-π/2`, so a rig hanging straight
/// down yields zero: the mesh is authored with its blade along `-Y`.
#[must_use]
pub fn orientation_angle(anchor: Vec3, free_end: Vec3) -> f32 {
    let stick = anchor - free_end;
    let mut angle = stick.y.atan2(stick.x);
    if angle < 0.0 {
        angle += TAU;
    }
    angle - FRAC_PI_2
}
