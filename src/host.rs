//! Hand-off of finished shapes to a host document.
//!
//! Builders in this crate only produce values. Whatever owns the drawing
//! (a CAD database, a file writer, a preview canvas) implements [`ShapeSink`]
//! and decides how the shapes are stored and identified.

use tracing::debug;

use crate::geometry::Shape;

/// Destination for constructed shapes.
pub trait ShapeSink {
    /// Handle the host assigns to an appended shape.
    type Id;
    /// Failure reported by the host.
    type Error;

    /// Appends one shape, returning its host handle.
    ///
    /// # Errors
    ///
    /// Returns the host's error if the shape is not accepted.
    fn append(&mut self, shape: Shape) -> Result<Self::Id, Self::Error>;

    /// Appends shapes in order, stopping at the first rejection.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by [`ShapeSink::append`]. Shapes
    /// appended before the failure stay in the host.
    fn append_all<I>(&mut self, shapes: I) -> Result<Vec<Self::Id>, Self::Error>
    where
        I: IntoIterator<Item = Shape>,
    {
        let mut ids = Vec::new();
        for shape in shapes {
            debug!(kind = shape.kind(), "appending shape");
            ids.push(self.append(shape)?);
        }
        Ok(ids)
    }
}

impl ShapeSink for Vec<Shape> {
    type Id = usize;
    type Error = std::convert::Infallible;

    fn append(&mut self, shape: Shape) -> Result<usize, Self::Error> {
        self.push(shape);
        Ok(self.len() - 1)
    }
}
