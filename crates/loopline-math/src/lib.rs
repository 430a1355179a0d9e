pub mod aabb;
pub mod index;

pub use glam::{dvec2, DVec2};
pub use aabb::Aabb2;
pub use index::{wrap, wrap_signed};

pub type Point2 = DVec2;
pub type Vector2 = DVec2;
