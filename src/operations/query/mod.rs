mod bounding_box;
mod intersect;
mod length;

pub use bounding_box::{Aabb, BoundingBox};
pub use intersect::PathIntersect;
pub use length::Length;
