//! Global configuration constants and the scene configuration block.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SceneError};

/// Default gravity vector applied in the scene (no gravity).
pub const DEFAULT_GRAVITY: [f32; 2] = [0.0, 0.0];

/// Default fixed integration timestep (in time units).
pub const DEFAULT_TIME_STEP: f32 = 0.01;

/// Relative rounding allowance when counting whole steps in the accumulator.
/// A count within this fraction below an integer is rounded up.
pub const STEP_TOLERANCE: f64 = 1e-6;

/// Tunables for a [`Scene`](crate::scene::Scene).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub time_step: f32,
    pub gravity: Vec2,
    /// Upper bound on fixed steps run by one `update` call. `None` never caps.
    pub max_steps_per_update: Option<usize>,
    /// Integrate actors on the rayon pool (needs the `parallel` feature).
    pub parallel: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            time_step: DEFAULT_TIME_STEP,
            gravity: Vec2::from_array(DEFAULT_GRAVITY),
            max_steps_per_update: None,
            parallel: false,
        }
    }
}

impl SceneConfig {
    pub fn with_time_step(mut self, time_step: f32) -> Self {
        self.time_step = time_step;
        self
    }

    pub fn with_gravity(mut self, gravity: Vec2) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_max_steps_per_update(mut self, max_steps: usize) -> Self {
        self.max_steps_per_update = Some(max_steps);
        self
    }

    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Checks every field, returning the first offending one.
    pub fn validate(&self) -> Result<()> {
        validate_time_step(self.time_step)?;
        if !self.gravity.is_finite() {
            return Err(SceneError::InvalidGravity);
        }
        if self.max_steps_per_update == Some(0) {
            return Err(SceneError::InvalidStepCap);
        }
        Ok(())
    }
}

pub(crate) fn validate_time_step(time_step: f32) -> Result<()> {
    if time_step.is_finite() && time_step > 0.0 {
        Ok(())
    } else {
        Err(SceneError::InvalidTimeStep(time_step))
    }
}
