//! Narrow-phase collision tests and shape-pair dispatch.

pub mod narrowphase;

pub use narrowphase::{
    box_to_box, box_to_plane, box_to_sphere, plane_to_box, plane_to_plane, plane_to_sphere,
    sphere_plane_separation, sphere_to_box, sphere_to_plane, sphere_to_sphere, spheres_overlap,
    CollisionOutcome, NarrowPhase,
};
