use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Linear kinematic state shared by every movable shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RigidBody {
    pub position: Vec2,
    pub velocity: Vec2,
    pub mass: f32,
    /// Impulse-style force accumulated since the last fixed step.
    pub force: Vec2,
}

impl RigidBody {
    pub fn new(position: Vec2, velocity: Vec2, mass: f32) -> Self {
        Self {
            position,
            velocity,
            mass,
            force: Vec2::ZERO,
        }
    }

    pub fn apply_force(&mut self, force: Vec2) {
        self.force += force;
    }

    /// Zero for massless or negative-mass bodies so they ignore applied forces.
    pub fn inverse_mass(&self) -> f32 {
        if self.mass <= f32::EPSILON {
            0.0
        } else {
            1.0 / self.mass
        }
    }
}
