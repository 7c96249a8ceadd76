//! Physics Scene – a fixed-timestep 2D simulation core.
//!
//! A [`Scene`] owns spheres, planes and (reserved) boxes, integrates them in
//! fixed increments fed by an accumulator, and resolves contacts between
//! every pair with a velocity-cancelling response.

pub mod collision;
pub mod config;
pub mod core;
pub mod dynamics;
pub mod error;
pub mod render;
pub mod scene;
pub mod utils;

pub use glam::Vec2;

pub use collision::{CollisionOutcome, NarrowPhase};
pub use config::SceneConfig;
pub use crate::core::{
    object::{PhysicsObject, ShapeKind},
    rigidbody::RigidBody,
    shapes::{BoxShape, Plane, Sphere},
};
pub use dynamics::Integrator;
pub use error::SceneError;
pub use render::{NoopRenderer, ShapeRenderer};
pub use scene::Scene;
pub use utils::{
    allocator::{ActorId, Arena},
    profiling::UpdateStats,
};
