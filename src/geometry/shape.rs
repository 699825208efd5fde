use super::{Arc, Circle, Ellipse, Line, Polyline};

/// Any shape the builders produce, as handed to a host document.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line(Line),
    Arc(Arc),
    Circle(Circle),
    Ellipse(Ellipse),
    Polyline(Polyline),
}

impl Shape {
    /// Short lowercase name of the shape kind, for diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Line(_) => "line",
            Self::Arc(_) => "arc",
            Self::Circle(_) => "circle",
            Self::Ellipse(_) => "ellipse",
            Self::Polyline(_) => "polyline",
        }
    }
}

impl From<Line> for Shape {
    fn from(line: Line) -> Self {
        Self::Line(line)
    }
}

impl From<Arc> for Shape {
    fn from(arc: Arc) -> Self {
        Self::Arc(arc)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Self::Circle(circle)
    }
}

impl From<Ellipse> for Shape {
    fn from(ellipse: Ellipse) -> Self {
        Self::Ellipse(ellipse)
    }
}

impl From<Polyline> for Shape {
    fn from(polyline: Polyline) -> Self {
        Self::Polyline(polyline)
    }
}
