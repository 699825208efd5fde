pub mod curve;
pub mod polyline;
mod shape;

pub use curve::{Arc, Circle, Curve, CurveDomain, Ellipse, Line};
pub use polyline::{Polyline, PolylineVertex};
pub use shape::Shape;
