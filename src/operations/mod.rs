pub mod intersect;
pub mod linearize;
pub mod transform;
