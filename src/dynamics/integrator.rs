use glam::Vec2;

use crate::core::rigidbody::RigidBody;

/// Semi-implicit Euler stepping of linear state.
///
/// The accumulated force is consumed as an impulse: a force of
/// `-velocity * mass` brings the body to rest on the next step.
#[derive(Debug, Clone, Copy, Default)]
pub struct Integrator;

impl Integrator {
    pub fn integrate_velocity(body: &mut RigidBody, gravity: Vec2, dt: f32) {
        body.velocity += gravity * dt + body.force * body.inverse_mass();
        body.force = Vec2::ZERO;
    }

    pub fn integrate_position(body: &mut RigidBody, dt: f32) {
        body.position += body.velocity * dt;
    }

    pub fn integrate(body: &mut RigidBody, gravity: Vec2, dt: f32) {
        Self::integrate_velocity(body, gravity, dt);
        Self::integrate_position(body, dt);
    }
}
