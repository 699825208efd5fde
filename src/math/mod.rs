pub mod angle;
pub mod arc_2d;
pub mod point;
mod tolerance;

pub use angle::{angle_between, angle_to_x_axis, degree_to_radian, radian_to_degree};
pub use point::{circumcircle_xy, distance, distance_xy, is_collinear, midpoint};
pub use tolerance::Tolerance;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
