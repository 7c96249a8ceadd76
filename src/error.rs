//! Error types for scene configuration.
//!
//! The simulation loop itself never fails; only configuring a scene can.

use std::fmt;

/// Errors raised while building or reconfiguring a [`Scene`](crate::scene::Scene).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneError {
    /// The fixed timestep must be finite and strictly positive.
    InvalidTimeStep(f32),
    /// Gravity must have finite components.
    InvalidGravity,
    /// A step cap, when present, must allow at least one step.
    InvalidStepCap,
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidTimeStep(step) => write!(f, "Invalid time step: {step}"),
            Self::InvalidGravity => write!(f, "Invalid gravity: components must be finite"),
            Self::InvalidStepCap => write!(f, "Invalid step cap: must be at least 1"),
        }
    }
}

impl std::error::Error for SceneError {}

/// Convenient Result type alias for scene operations.
pub type Result<T> = std::result::Result<T, SceneError>;
