//! # Rig Configuration
//!
//! Everything about the rig that is fixed at construction time, plus the
//! starting value of the one live-tunable parameter (gravity). Configs are
//! plain JSON; every field is optional and falls back to the defaults below.
//!
//! ```json
//! { "anchor": [0.0, 3.0, 0.0], "rest_length": 1.67, "gravity": 0.42 }
//! ```

use std::ops::RangeInclusive;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constraint::DEFAULT_SOLVER_ITERATIONS;
use crate::error::RigError;
use crate::types::Vec3;

/// Range the gravity tunable is clamped to.
pub const GRAVITY_RANGE: RangeInclusive<f32> = 0.0..=5.0;

/// Downward acceleration applied to free particles, kept inside [`GRAVITY_RANGE`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Gravity(f32);

impl Gravity {
    /// Clamp `value` into [`GRAVITY_RANGE`]. NaN falls back to zero.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self(*GRAVITY_RANGE.start());
        }
        Self(value.clamp(*GRAVITY_RANGE.start(), *GRAVITY_RANGE.end()))
    }

    #[must_use]
    pub fn get(self) -> f32 {
        self.0
    }

    pub fn set(&mut self, value: f32) {
        *self = Self::new(value);
    }

    /// Shift by `step` (may be negative), staying inside the range.
    pub fn nudge(&mut self, step: f32) {
        self.set(self.0 + step);
    }
}

impl Default for Gravity {
    fn default() -> Self {
        Self(RigConfig::default().gravity)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RigConfig {
    /// Where the anchor (the sword's hilt) starts, in world units.
    pub anchor: [f32; 3],
    /// Length of the stick between the two particles.
    pub rest_length: f32,
    /// Relaxation passes per tick.
    pub solver_iterations: u32,
    /// Initial gravity, must lie in [`GRAVITY_RANGE`].
    pub gravity: f32,
    /// World units per window pixel for the orthographic view.
    pub pixels_to_world: f32,
    /// Distance of the camera from the working plane.
    pub camera_distance: f32,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            anchor: [0.0, 3.0, 0.0],
            rest_length: 1.67,
            solver_iterations: DEFAULT_SOLVER_ITERATIONS,
            gravity: 0.42,
            pixels_to_world: 0.005,
            camera_distance: 3.0,
        }
    }
}

impl RigConfig {
    /// Parse and validate a JSON config.
    ///
    /// # Errors
    ///
    /// Returns [`RigError::Parse`] for malformed JSON, or the validation
    /// error for out-of-range values.
    pub fn from_json_str(json: &str) -> Result<Self, RigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    ///
    /// # Errors
    ///
    /// Returns [`RigError::Io`] if the file cannot be read, otherwise as
    /// [`RigConfig::from_json_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| RigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        tracing::info!("Loaded rig config from {:?}", path);
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns the first invalid field found.
    pub fn validate(&self) -> Result<(), RigError> {
        if !(self.rest_length.is_finite() && self.rest_length > 0.0) {
            return Err(RigError::InvalidRestLength(self.rest_length));
        }
        if self.solver_iterations == 0 {
            return Err(RigError::NoSolverIterations);
        }
        if !GRAVITY_RANGE.contains(&self.gravity) {
            return Err(RigError::GravityOutOfRange(self.gravity));
        }
        if self.anchor.iter().any(|c| !c.is_finite()) {
            return Err(RigError::NonFiniteAnchor(self.anchor));
        }
        for (name, value) in [
            ("pixels_to_world", self.pixels_to_world),
            ("camera_distance", self.camera_distance),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(RigError::InvalidScale(name, value));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn anchor(&self) -> Vec3 {
        Vec3::from_array(self.anchor)
    }

    #[must_use]
    pub fn gravity(&self) -> Gravity {
        Gravity::new(self.gravity)
    }
}
