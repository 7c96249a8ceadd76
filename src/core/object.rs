use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::shapes::{BoxShape, Plane, Sphere};
use crate::render::ShapeRenderer;

/// Closed set of shape kinds the collision dispatcher knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Sphere,
    Plane,
    Box,
}

/// Anything a scene can simulate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PhysicsObject {
    Sphere(Sphere),
    Plane(Plane),
    Box(BoxShape),
}

impl PhysicsObject {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Sphere(_) => ShapeKind::Sphere,
            Self::Plane(_) => ShapeKind::Plane,
            Self::Box(_) => ShapeKind::Box,
        }
    }

    /// Advances the object by one fixed step. Planes are static.
    pub fn fixed_update(&mut self, gravity: Vec2, time_step: f32) {
        match self {
            Self::Sphere(sphere) => sphere.fixed_update(gravity, time_step),
            Self::Box(cuboid) => cuboid.fixed_update(gravity, time_step),
            Self::Plane(_) => {}
        }
    }

    pub fn draw(&self, renderer: &mut dyn ShapeRenderer) {
        match self {
            Self::Sphere(sphere) => renderer.draw_sphere(sphere),
            Self::Plane(plane) => renderer.draw_plane(plane),
            Self::Box(cuboid) => renderer.draw_box(cuboid),
        }
    }

    pub fn as_sphere(&self) -> Option<&Sphere> {
        match self {
            Self::Sphere(sphere) => Some(sphere),
            _ => None,
        }
    }

    pub fn as_sphere_mut(&mut self) -> Option<&mut Sphere> {
        match self {
            Self::Sphere(sphere) => Some(sphere),
            _ => None,
        }
    }

    pub fn as_plane(&self) -> Option<&Plane> {
        match self {
            Self::Plane(plane) => Some(plane),
            _ => None,
        }
    }

    pub fn as_box(&self) -> Option<&BoxShape> {
        match self {
            Self::Box(cuboid) => Some(cuboid),
            _ => None,
        }
    }

    pub fn as_box_mut(&mut self) -> Option<&mut BoxShape> {
        match self {
            Self::Box(cuboid) => Some(cuboid),
            _ => None,
        }
    }
}

impl From<Sphere> for PhysicsObject {
    fn from(sphere: Sphere) -> Self {
        Self::Sphere(sphere)
    }
}

impl From<Plane> for PhysicsObject {
    fn from(plane: Plane) -> Self {
        Self::Plane(plane)
    }
}

impl From<BoxShape> for PhysicsObject {
    fn from(cuboid: BoxShape) -> Self {
        Self::Box(cuboid)
    }
}
