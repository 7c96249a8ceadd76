use serde::{Deserialize, Serialize};

use crate::core::{
    object::{PhysicsObject, ShapeKind},
    shapes::{BoxShape, Plane, Sphere},
};

/// Result of running the narrow phase on one pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollisionOutcome {
    Collided,
    Separated,
    /// No test exists for this pair of shapes.
    Unsupported,
}

impl CollisionOutcome {
    pub fn is_collision(self) -> bool {
        self == Self::Collided
    }

    fn from_hit(hit: bool) -> Self {
        if hit {
            Self::Collided
        } else {
            Self::Separated
        }
    }

    fn from_stub(hit: bool) -> Self {
        if hit {
            Self::Collided
        } else {
            Self::Unsupported
        }
    }
}

/// Strict overlap: touching spheres do not collide.
pub fn spheres_overlap(a: &Sphere, b: &Sphere) -> bool {
    a.position().distance(b.position()) < a.radius() + b.radius()
}

/// Distance from the sphere's surface to the plane; `<= 0` means contact.
pub fn sphere_plane_separation(sphere: &Sphere, plane: &Plane) -> f32 {
    plane.signed_distance(sphere.position()) - sphere.radius()
}

// Contact response: brings the velocity the sphere will have on the next
// step to zero, counting forces already queued by earlier contacts.
fn stop(sphere: &mut Sphere) {
    if sphere.mass() <= f32::EPSILON {
        return;
    }
    sphere.apply_force(-(sphere.velocity() * sphere.mass() + sphere.force()));
}

pub fn sphere_to_sphere(a: &mut Sphere, b: &mut Sphere) -> bool {
    if !spheres_overlap(a, b) {
        return false;
    }
    stop(a);
    stop(b);
    true
}

/// Touching counts as contact here, unlike [`sphere_to_sphere`].
pub fn sphere_to_plane(sphere: &mut Sphere, plane: &Plane) -> bool {
    if sphere_plane_separation(sphere, plane) > 0.0 {
        return false;
    }
    stop(sphere);
    true
}

pub fn plane_to_sphere(plane: &Plane, sphere: &mut Sphere) -> bool {
    sphere_to_plane(sphere, plane)
}

pub fn plane_to_plane(_a: &Plane, _b: &Plane) -> bool {
    false
}

pub fn plane_to_box(_plane: &Plane, _cuboid: &mut BoxShape) -> bool {
    false
}

pub fn sphere_to_box(_sphere: &mut Sphere, _cuboid: &mut BoxShape) -> bool {
    false
}

pub fn box_to_plane(_cuboid: &mut BoxShape, _plane: &Plane) -> bool {
    false
}

pub fn box_to_sphere(_cuboid: &mut BoxShape, _sphere: &mut Sphere) -> bool {
    false
}

pub fn box_to_box(_a: &mut BoxShape, _b: &mut BoxShape) -> bool {
    false
}

/// Narrow phase dispatcher routing each pair to its shape-specific test.
pub struct NarrowPhase;

impl NarrowPhase {
    pub fn collide(a: &mut PhysicsObject, b: &mut PhysicsObject) -> CollisionOutcome {
        use PhysicsObject as Obj;

        match (a, b) {
            (Obj::Sphere(a), Obj::Sphere(b)) => CollisionOutcome::from_hit(sphere_to_sphere(a, b)),
            (Obj::Sphere(sphere), Obj::Plane(plane)) => {
                CollisionOutcome::from_hit(sphere_to_plane(sphere, plane))
            }
            (Obj::Plane(plane), Obj::Sphere(sphere)) => {
                CollisionOutcome::from_hit(plane_to_sphere(plane, sphere))
            }
            (Obj::Plane(a), Obj::Plane(b)) => CollisionOutcome::from_stub(plane_to_plane(a, b)),
            (Obj::Plane(plane), Obj::Box(cuboid)) => {
                CollisionOutcome::from_stub(plane_to_box(plane, cuboid))
            }
            (Obj::Sphere(sphere), Obj::Box(cuboid)) => {
                CollisionOutcome::from_stub(sphere_to_box(sphere, cuboid))
            }
            (Obj::Box(cuboid), Obj::Plane(plane)) => {
                CollisionOutcome::from_stub(box_to_plane(cuboid, plane))
            }
            (Obj::Box(cuboid), Obj::Sphere(sphere)) => {
                CollisionOutcome::from_stub(box_to_sphere(cuboid, sphere))
            }
            (Obj::Box(a), Obj::Box(b)) => CollisionOutcome::from_stub(box_to_box(a, b)),
        }
    }

    pub fn is_supported(a: ShapeKind, b: ShapeKind) -> bool {
        matches!(
            (a, b),
            (ShapeKind::Sphere, ShapeKind::Sphere)
                | (ShapeKind::Sphere, ShapeKind::Plane)
                | (ShapeKind::Plane, ShapeKind::Sphere)
        )
    }

    /// Geometric test only, no response. `None` for unsupported pairs.
    pub fn overlaps(a: &PhysicsObject, b: &PhysicsObject) -> Option<bool> {
        match (a, b) {
            (PhysicsObject::Sphere(a), PhysicsObject::Sphere(b)) => Some(spheres_overlap(a, b)),
            (PhysicsObject::Sphere(sphere), PhysicsObject::Plane(plane))
            | (PhysicsObject::Plane(plane), PhysicsObject::Sphere(sphere)) => {
                Some(sphere_plane_separation(sphere, plane) <= 0.0)
            }
            _ => None,
        }
    }
}
