pub use glam::Vec3;

/// Index of the anchor particle (pinned to the attach point or the pointer).
pub const ANCHOR: usize = 0;
/// Index of the free end (simulated, hangs `rest_length` from the anchor).
pub const FREE_END: usize = 1;

/// Motion state of a single particle.
///
/// Replaces a pair of independently settable `locked`/`physics` flags, so
/// only the meaningful combinations can be represented.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum ParticleState {
    /// Integrated every tick: inertia and gravity apply.
    #[default]
    Free,
    /// Position is driven from outside (the pointer); never integrated.
    Pinned,
    /// Rig left the viewport; nothing moves until a pointer re-arms it.
    Frozen,
}

impl ParticleState {
    /// Whether gravity and inertia apply to the particle this tick.
    #[must_use]
    pub const fn is_simulated(self) -> bool {
        matches!(self, Self::Free)
    }

    /// Whether the particle is held in place by something other than physics.
    #[must_use]
    pub const fn is_locked(self) -> bool {
        !self.is_simulated()
    }
}

/// A Verlet point mass. Velocity is implied by `position - previous_position`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    /// Position at the start of the previous tick; `None` until the first tick.
    pub previous_position: Option<Vec3>,
    pub state: ParticleState,
}

impl Particle {
    #[must_use]
    pub const fn new(position: Vec3, state: ParticleState) -> Self {
        Self {
            position,
            previous_position: None,
            state,
        }
    }

    /// Displacement carried over from the last tick, zero before the first one.
    #[must_use]
    pub fn velocity_raw(&self) -> Vec3 {
        self.previous_position
            .map_or(Vec3::ZERO, |previous| self.position - previous)
    }
}

/// Output of one tick, consumed by the presentation layer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RigPose {
    /// Anchor position; the displayed mesh is placed here.
    pub anchor: Vec3,
    /// Free end position, used for optional debug markers.
    pub free_end: Vec3,
    /// Rotation about the view axis (radians) applied to the mesh.
    pub rotation: f32,
    /// Both particles frozen after leaving the viewport.
    pub frozen: bool,
}

/// Snapshot of the rig for logging and debugging overlays.
#[derive(Clone, Debug)]
pub struct RigDebugInfo {
    pub anchor: Vec3,
    pub free_end: Vec3,
    pub anchor_state: ParticleState,
    pub free_end_state: ParticleState,
    pub separation: f32,
    pub rest_length: f32,
    pub holding: bool,
    pub gravity: f32,
}
