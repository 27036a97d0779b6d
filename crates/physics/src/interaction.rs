//! # Pointer Interaction
//!
//! Turns pointer press/move/release into pin transitions on the rig. The
//! controller never knows about windows or cameras: pointer positions arrive
//! in normalized device coordinates and are mapped into the world through an
//! [`Unproject`] implementation supplied with each event.

use glam::Vec2;

use crate::particles::ParticleSystem;
use crate::types::{Vec3, ANCHOR};

/// Maps normalized device coordinates (`x`, `y` in `[-1, 1]`) into world space.
pub trait Unproject {
    fn unproject(&self, ndc: Vec2) -> Vec3;
}

/// A pointer event in normalized device coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PointerEvent {
    Down(Vec2),
    Move(Vec2),
    Up,
}

/// Tracks whether the pointer currently owns the anchor.
#[derive(Copy, Clone, Debug, Default)]
pub struct InteractionController {
    holding: bool,
}

impl InteractionController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_holding(&self) -> bool {
        self.holding
    }

    /// Dispatch a pointer event. Returns `true` if the rig state changed.
    pub fn handle(
        &mut self,
        event: PointerEvent,
        particles: &mut ParticleSystem,
        camera: &dyn Unproject,
    ) -> bool {
        match event {
            PointerEvent::Down(ndc) => self.pointer_down(ndc, particles, camera),
            PointerEvent::Move(ndc) => self.pointer_move(ndc, particles, camera),
            PointerEvent::Up => self.pointer_up(particles),
        }
    }

    /// Grab the anchor if the pointer lands within one stick length of it.
    pub fn pointer_down(
        &mut self,
        ndc: Vec2,
        particles: &mut ParticleSystem,
        camera: &dyn Unproject,
    ) -> bool {
        let pointer = pointer_on_plane(ndc, camera);
        let reach = pointer.distance(particles.position(ANCHOR));
        if reach >= particles.rest_length() {
            tracing::debug!("Pointer down {reach:.3} from anchor, out of reach");
            return false;
        }
        self.holding = true;
        particles.pin_anchor();
        tracing::debug!("Anchor grabbed at ({:.3}, {:.3})", pointer.x, pointer.y);
        true
    }

    /// Drag the anchor along with the pointer while holding.
    pub fn pointer_move(
        &mut self,
        ndc: Vec2,
        particles: &mut ParticleSystem,
        camera: &dyn Unproject,
    ) -> bool {
        if !self.holding {
            return false;
        }
        let pointer = pointer_on_plane(ndc, camera);
        particles.pin_anchor();
        particles.set_position(ANCHOR, pointer);
        true
    }

    /// Let go of the anchor. Releasing while idle does nothing.
    pub fn pointer_up(&mut self, particles: &mut ParticleSystem) -> bool {
        if !self.holding {
            return false;
        }
        self.holding = false;
        particles.release_anchor();
        tracing::debug!("Anchor released");
        true
    }
}

/// Unproject and collapse onto the rig's working plane (z = 0).
fn pointer_on_plane(ndc: Vec2, camera: &dyn Unproject) -> Vec3 {
    let mut pointer = camera.unproject(ndc);
    pointer.z = 0.0;
    pointer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ParticleState, FREE_END};

    /// NDC scaled straight onto the plane, with some depth to collapse.
    struct Flat(f32);

    impl Unproject for Flat {
        fn unproject(&self, ndc: Vec2) -> Vec3 {
            Vec3::new(ndc.x * self.0, ndc.y * self.0, 2.5)
        }
    }

    fn rig() -> ParticleSystem {
        ParticleSystem::new(Vec3::new(0.0, 3.0, 0.0), 1.67, 50)
    }

    #[test]
    fn pointer_depth_is_collapsed() {
        let p = pointer_on_plane(Vec2::new(0.5, 0.5), &Flat(4.0));
        assert_eq!(p, Vec3::new(2.0, 2.0, 0.0));
    }

    #[test]
    fn move_without_grab_is_ignored() {
        let mut rig = rig();
        let mut controller = InteractionController::new();
        assert!(!controller.pointer_move(Vec2::ZERO, &mut rig, &Flat(4.0)));
        assert_eq!(rig.position(ANCHOR), Vec3::new(0.0, 3.0, 0.0));
    }

    #[test]
    fn up_without_grab_is_ignored() {
        let mut rig = rig();
        rig.freeze();
        let mut controller = InteractionController::new();
        assert!(!controller.pointer_up(&mut rig));
        assert_eq!(rig.particle(ANCHOR).state, ParticleState::Frozen);
        assert_eq!(rig.particle(FREE_END).state, ParticleState::Frozen);
    }
}
