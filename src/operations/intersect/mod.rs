mod circle_circle;

pub use circle_circle::{CircleCircleIntersect, CircleIntersection, SolveMethod};
