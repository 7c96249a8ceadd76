//! Shape primitives and the object enum the scene simulates.

pub mod object;
pub mod rigidbody;
pub mod shapes;

pub use object::{PhysicsObject, ShapeKind};
pub use rigidbody::RigidBody;
pub use shapes::{BoxShape, Plane, Sphere};
