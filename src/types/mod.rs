//! Geometric value types

pub mod vector;

pub use vector::{Vector2, Vector3};
