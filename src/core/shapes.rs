use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rigidbody::RigidBody;
use crate::dynamics::integrator::Integrator;

/// Circle primitive with linear dynamics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    body: RigidBody,
    radius: f32,
}

impl Sphere {
    pub fn new(position: Vec2, velocity: Vec2, mass: f32, radius: f32) -> Self {
        Self {
            body: RigidBody::new(position, velocity, mass),
            radius,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.body.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.body.position = position;
    }

    pub fn velocity(&self) -> Vec2 {
        self.body.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.body.velocity = velocity;
    }

    pub fn mass(&self) -> f32 {
        self.body.mass
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Force accumulated since the last fixed step.
    pub fn force(&self) -> Vec2 {
        self.body.force
    }

    pub fn apply_force(&mut self, force: Vec2) {
        self.body.apply_force(force);
    }

    pub fn fixed_update(&mut self, gravity: Vec2, time_step: f32) {
        Integrator::integrate(&mut self.body, gravity, time_step);
    }
}

/// Infinite line: a point `p` lies on it iff `dot(p, normal) == distance`.
///
/// Planes are immovable and never receive a collision response.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    normal: Vec2,
    distance: f32,
}

impl Plane {
    /// The normal is stored as given; keeping it unit length is up to the caller.
    pub fn new(normal: Vec2, distance: f32) -> Self {
        Self { normal, distance }
    }

    /// Plane through `point` facing `normal`.
    pub fn from_point(normal: Vec2, point: Vec2) -> Self {
        Self::new(normal, point.dot(normal))
    }

    pub fn normal(&self) -> Vec2 {
        self.normal
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Positive in front of the plane, zero on it, negative behind it.
    pub fn signed_distance(&self, point: Vec2) -> f32 {
        point.dot(self.normal) - self.distance
    }
}

/// Axis-aligned box. It moves and draws, but has no collision tests yet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxShape {
    body: RigidBody,
    half_extents: Vec2,
}

impl BoxShape {
    pub fn new(position: Vec2, velocity: Vec2, mass: f32, half_extents: Vec2) -> Self {
        Self {
            body: RigidBody::new(position, velocity, mass),
            half_extents,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.body.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.body.velocity
    }

    pub fn mass(&self) -> f32 {
        self.body.mass
    }

    pub fn half_extents(&self) -> Vec2 {
        self.half_extents
    }

    pub fn apply_force(&mut self, force: Vec2) {
        self.body.apply_force(force);
    }

    pub fn fixed_update(&mut self, gravity: Vec2, time_step: f32) {
        Integrator::integrate(&mut self.body, gravity, time_step);
    }
}
