//! # Particle System
//!
//! Owns the two points of the rig and advances them with position-based
//! (Verlet-style) dynamics. Velocity is never stored: each simulated particle
//! carries over the displacement it made during the previous tick and then
//! receives an explicit gravity term. After integration the distance
//! constraint is relaxed by [`crate::constraint::relax`].

use crate::constraint;
use crate::types::{Particle, ParticleState, Vec3, ANCHOR, FREE_END};

/// The two constrained points of the rig.
#[derive(Clone, Debug)]
pub struct ParticleSystem {
    particles: [Particle; 2],
    rest_length: f32,
    solver_iterations: u32,
}

impl ParticleSystem {
    /// Build the rig hanging straight down from `anchor`.
    ///
    /// The anchor starts pinned and the free end starts simulated,
    /// `rest_length` below the anchor.
    #[must_use]
    pub fn new(anchor: Vec3, rest_length: f32, solver_iterations: u32) -> Self {
        let free_end = anchor - Vec3::new(0.0, rest_length, 0.0);
        Self {
            particles: [
                Particle::new(anchor, ParticleState::Pinned),
                Particle::new(free_end, ParticleState::Free),
            ],
            rest_length,
            solver_iterations,
        }
    }

    /// Advance one tick: integrate every particle, then relax the stick.
    ///
    /// Particles that are not simulated keep their position, but their
    /// previous position is reset to it so that re-arming them later does not
    /// inject a velocity built up while they were held. Relaxation is skipped
    /// only once the whole rig is frozen; a free anchor always drags the free
    /// end along, even while the free end itself is frozen.
    pub fn step(&mut self, delta_time: f32, gravity: f32) {
        let gravity_step = Vec3::NEG_Y * gravity * delta_time;
        for particle in &mut self.particles {
            let snapshot = particle.position;
            if particle.state.is_simulated() {
                if let Some(previous) = particle.previous_position {
                    particle.position += snapshot - previous;
                }
                particle.position += gravity_step;
            }
            particle.previous_position = Some(snapshot);
        }

        if !self.is_frozen() {
            self.particles[FREE_END].position = constraint::relax(
                self.particles[ANCHOR].position,
                self.particles[FREE_END].position,
                self.rest_length,
                self.solver_iterations,
            );
        }
    }

    /// # Panics
    ///
    /// Panics if `index` is not [`ANCHOR`] or [`FREE_END`].
    #[must_use]
    pub fn position(&self, index: usize) -> Vec3 {
        self.particle(index).position
    }

    /// Overwrite a particle's position, e.g. to pin the anchor to the pointer.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not [`ANCHOR`] or [`FREE_END`].
    pub fn set_position(&mut self, index: usize, position: Vec3) {
        self.particle_mut(index).position = position;
    }

    /// # Panics
    ///
    /// Panics if `index` is not [`ANCHOR`] or [`FREE_END`].
    pub fn set_state(&mut self, index: usize, state: ParticleState) {
        self.particle_mut(index).state = state;
    }

    /// Hand the anchor to the pointer and let the free end swing.
    pub fn pin_anchor(&mut self) {
        self.particles[ANCHOR].state = ParticleState::Pinned;
        self.particles[FREE_END].state = ParticleState::Free;
    }

    /// Let go of the anchor; it falls with whatever motion the drag gave it.
    pub fn release_anchor(&mut self) {
        self.particles[ANCHOR].state = ParticleState::Free;
    }

    /// Stop all motion until the next pin.
    pub fn freeze(&mut self) {
        for particle in &mut self.particles {
            particle.state = ParticleState::Frozen;
        }
    }

    /// # Panics
    ///
    /// Panics if `index` is not [`ANCHOR`] or [`FREE_END`].
    #[must_use]
    pub fn particle(&self, index: usize) -> &Particle {
        assert!(index <= FREE_END, "particle index {index} out of range");
        &self.particles[index]
    }

    fn particle_mut(&mut self, index: usize) -> &mut Particle {
        assert!(index <= FREE_END, "particle index {index} out of range");
        &mut self.particles[index]
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle; 2] {
        &self.particles
    }

    #[must_use]
    pub fn anchor(&self) -> &Particle {
        &self.particles[ANCHOR]
    }

    #[must_use]
    pub fn free_end(&self) -> &Particle {
        &self.particles[FREE_END]
    }

    #[must_use]
    pub fn rest_length(&self) -> f32 {
        self.rest_length
    }

    #[must_use]
    pub fn solver_iterations(&self) -> u32 {
        self.solver_iterations
    }

    #[must_use]
    pub fn midpoint(&self) -> Vec3 {
        (self.particles[ANCHOR].position + self.particles[FREE_END].position) / 2.0
    }

    #[must_use]
    pub fn separation(&self) -> f32 {
        self.particles[ANCHOR]
            .position
            .distance(self.particles[FREE_END].position)
    }

    /// Both particles are frozen.
    #[must_use]
    pub fn is_frozen(&self) -> bool {
        self.particles
            .iter()
            .all(|p| p.state == ParticleState::Frozen)
    }
}
