use crate::error::Result;
use crate::geometry::{Arc, Circle, Ellipse, Line, Shape};
use crate::math::{Point3, Vector2, Vector3};

/// Moves a shape by a displacement vector.
///
/// Polyline vertices are planar and take only the X/Y part of the displacement.
pub struct Translate {
    shape: Shape,
    displacement: Vector3,
}

impl Translate {
    /// Creates a new `Translate` operation.
    #[must_use]
    pub fn new(shape: Shape, displacement: Vector3) -> Self {
        Self {
            shape,
            displacement,
        }
    }

    /// Creates a `Translate` that carries `source` onto `target`.
    #[must_use]
    pub fn between(shape: Shape, source: &Point3, target: &Point3) -> Self {
        Self::new(shape, target - source)
    }

    /// Executes the translation, returning the moved shape.
    ///
    /// # Errors
    ///
    /// Returns an error if the moved shape fails validation, which only
    /// happens for non-finite displacements.
    pub fn execute(&self) -> Result<Shape> {
        let d = self.displacement;
        let moved = match &self.shape {
            Shape::Line(line) => Line::new(line.start() + d, line.end() + d).into(),
            Shape::Arc(arc) => Arc::new(
                arc.center() + d,
                arc.radius(),
                arc.start_angle(),
                arc.end_angle(),
            )?
            .into(),
            Shape::Circle(circle) => Circle::new(circle.center() + d, circle.radius())?.into(),
            Shape::Ellipse(ellipse) => Ellipse::new(
                ellipse.center() + d,
                *ellipse.major_axis(),
                ellipse.ratio(),
                ellipse.start_angle(),
                ellipse.end_angle(),
            )?
            .into(),
            Shape::Polyline(polyline) => {
                let mut moved = polyline.clone();
                let planar = Vector2::new(d.x, d.y);
                for vertex in moved.vertices_mut() {
                    vertex.position += planar;
                }
                moved.into()
            }
        };
        Ok(moved)
    }
}
