use glam::Vec2;
use rayon::prelude::*;

use crate::{core::object::PhysicsObject, utils::allocator::Arena};

/// Runs `fixed_update` for every actor on the rayon pool.
///
/// Each actor only touches its own state, so the result matches the
/// sequential pass exactly.
pub struct ParallelIntegrator {
    pub gravity: Vec2,
    pub dt: f32,
}

impl ParallelIntegrator {
    pub fn new(gravity: Vec2, dt: f32) -> Self {
        Self { gravity, dt }
    }

    pub fn step(&self, actors: &mut Arena<PhysicsObject>) {
        actors
            .par_iter_mut()
            .for_each(|actor| actor.fixed_update(self.gravity, self.dt));
    }
}
