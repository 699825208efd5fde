//! Approximation of arcs and circles as bulge-encoded polylines.

mod arc_to_polyline;
mod circle_to_polyline;

pub use arc_to_polyline::ArcToPolyline;
pub use circle_to_polyline::CircleToPolyline;
