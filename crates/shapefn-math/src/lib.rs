pub mod aabb;
pub mod grid;

pub use glam::{dvec2, DVec2};
pub use nalgebra::{DMatrix, Matrix2xX};

pub use aabb::Aabb2;
pub use grid::linspace;

pub type Point2 = DVec2;
