use tracing::debug;

use crate::geometry::Circle;
use crate::math::{distance_xy, Point3, Tolerance, Vector2};

/// How two circles relate, with the points they share.
///
/// Points lie in the `z = 0` plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CircleIntersection {
    /// Same center and radius: infinitely many shared points.
    Coincident,
    /// Too far apart, or one strictly inside the other.
    Disjoint,
    /// Touching from outside at one point.
    ExternallyTangent(Point3),
    /// Touching from inside at one point.
    InternallyTangent(Point3),
    /// Crossing at two points.
    TwoPoints(Point3, Point3),
}

impl CircleIntersection {
    /// Returns the intersection points (none, one, or two).
    #[must_use]
    pub fn points(&self) -> Vec<Point3> {
        match *self {
            Self::Coincident | Self::Disjoint => Vec::new(),
            Self::ExternallyTangent(p) | Self::InternallyTangent(p) => vec![p],
            Self::TwoPoints(p, q) => vec![p, q],
        }
    }

    /// Returns whether the circles touch at exactly one point.
    #[must_use]
    pub fn is_tangent(&self) -> bool {
        matches!(self, Self::ExternallyTangent(_) | Self::InternallyTangent(_))
    }
}

/// Which construction computes the intersection points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SolveMethod {
    /// Solve once with the center line as local X axis, then map back.
    #[default]
    LocalFrame,
    /// Slope-based construction with separate axis-aligned branches.
    Direct,
}

/// Classifies two circles and computes their intersection points.
///
/// Both circles are treated as lying in the XY plane: the centers' Z values
/// never enter the classification or the returned points.
pub struct CircleCircleIntersect {
    a: Circle,
    b: Circle,
    tolerance: Tolerance,
    method: SolveMethod,
}

#[derive(Debug, Clone, Copy)]
enum Tangency {
    External,
    Internal,
}

/// Center coordinates, radii and center distance of the two circles.
#[derive(Debug, Clone, Copy)]
struct Pair {
    x1: f64,
    y1: f64,
    r1: f64,
    x2: f64,
    y2: f64,
    r2: f64,
    d: f64,
}

impl CircleCircleIntersect {
    /// Creates a new query with exact comparisons and the local-frame solver.
    #[must_use]
    pub fn new(a: Circle, b: Circle) -> Self {
        Self {
            a,
            b,
            tolerance: Tolerance::default(),
            method: SolveMethod::default(),
        }
    }

    /// Sets the tolerance used for the coincidence and tangency tests.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Selects the point construction.
    #[must_use]
    pub fn with_method(mut self, method: SolveMethod) -> Self {
        self.method = method;
        self
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> CircleIntersection {
        let (ca, cb) = (self.a.center(), self.b.center());
        let pair = Pair {
            x1: ca.x,
            y1: ca.y,
            r1: self.a.radius(),
            x2: cb.x,
            y2: cb.y,
            r2: self.b.radius(),
            d: distance_xy(ca, cb),
        };
        let tol = self.tolerance;
        let sum = pair.r1 + pair.r2;
        let diff = (pair.r1 - pair.r2).abs();

        let result = if tol.lengths_equal(pair.x1, pair.x2)
            && tol.lengths_equal(pair.y1, pair.y2)
            && tol.lengths_equal(pair.r1, pair.r2)
        {
            CircleIntersection::Coincident
        } else if pair.d > sum + tol.linear || pair.d < diff - tol.linear {
            CircleIntersection::Disjoint
        } else if tol.lengths_equal(pair.d, sum) {
            CircleIntersection::ExternallyTangent(self.tangent_point(&pair, Tangency::External))
        } else if tol.lengths_equal(pair.d, diff) {
            CircleIntersection::InternallyTangent(self.tangent_point(&pair, Tangency::Internal))
        } else {
            let (p, q) = match self.method {
                SolveMethod::LocalFrame => crossing_local_frame(&pair),
                SolveMethod::Direct => crossing_direct(&pair, tol),
            };
            CircleIntersection::TwoPoints(p, q)
        };

        debug!(
            ?result,
            distance = pair.d,
            method = ?self.method,
            "classified circle pair"
        );
        result
    }

    fn tangent_point(&self, pair: &Pair, tangency: Tangency) -> Point3 {
        match self.method {
            SolveMethod::LocalFrame => tangent_local_frame(pair, tangency),
            SolveMethod::Direct => tangent_direct(pair, tangency, self.tolerance),
        }
    }
}

/// Unit vector along the center line, from A toward B.
fn center_axis(pair: &Pair) -> Vector2 {
    Vector2::new(pair.x2 - pair.x1, pair.y2 - pair.y1) / pair.d
}

fn tangent_local_frame(pair: &Pair, tangency: Tangency) -> Point3 {
    let u = center_axis(pair);
    // Internal tangency touches on the far side of A when B is the larger circle.
    let along = match tangency {
        Tangency::External => pair.r1,
        Tangency::Internal if pair.r1 > pair.r2 => pair.r1,
        Tangency::Internal => -pair.r1,
    };
    Point3::new(pair.x1 + u.x * along, pair.y1 + u.y * along, 0.0)
}

fn crossing_local_frame(pair: &Pair) -> (Point3, Point3) {
    let Pair { r1, r2, d, .. } = *pair;
    let u = center_axis(pair);
    let v = Vector2::new(-u.y, u.x);

    // Foot of the common chord on the center line, and half the chord.
    let a = (r1 * r1 - r2 * r2 + d * d) / (2.0 * d);
    let h = (r1 * r1 - a * a).max(0.0).sqrt();

    let foot = Vector2::new(pair.x1, pair.y1) + u * a;
    let p = foot + v * h;
    let q = foot - v * h;
    (Point3::new(p.x, p.y, 0.0), Point3::new(q.x, q.y, 0.0))
}

fn tangent_direct(pair: &Pair, tangency: Tangency, tol: Tolerance) -> Point3 {
    let Pair {
        x1,
        y1,
        r1,
        x2,
        y2,
        r2,
        d,
    } = *pair;
    // Moving toward B along the center line is +1, away is -1.
    let toward = match tangency {
        Tangency::External => 1.0,
        Tangency::Internal if r1 > r2 => 1.0,
        Tangency::Internal => -1.0,
    };

    if tol.lengths_equal(x1, x2) {
        let up = if y1 > y2 { -toward } else { toward };
        Point3::new(x1, y1 + up * r1, 0.0)
    } else if tol.lengths_equal(y1, y2) {
        let right = if x1 > x2 { -toward } else { toward };
        Point3::new(x1 + right * r1, y1, 0.0)
    } else {
        let scale = toward * r1 / d;
        Point3::new(x1 + (x2 - x1) * scale, y1 + (y2 - y1) * scale, 0.0)
    }
}

fn crossing_direct(pair: &Pair, tol: Tolerance) -> (Point3, Point3) {
    let Pair {
        x1,
        y1,
        r1,
        x2,
        y2,
        r2,
        d,
    } = *pair;
    // Fraction of the center line from A to the chord foot.
    let f = (r1 * r1 - r2 * r2 + d * d) / (2.0 * d * d);

    if tol.lengths_equal(x1, x2) {
        let y0 = y1 + (y2 - y1) * f;
        let h = (r1 * r1 - (y0 - y1).powi(2)).max(0.0).sqrt();
        (Point3::new(x1 - h, y0, 0.0), Point3::new(x1 + h, y0, 0.0))
    } else if tol.lengths_equal(y1, y2) {
        let x0 = x1 + (x2 - x1) * f;
        let h = (r1 * r1 - (x0 - x1).powi(2)).max(0.0).sqrt();
        (Point3::new(x0, y1 - h, 0.0), Point3::new(x0, y1 + h, 0.0))
    } else {
        let k1 = (y2 - y1) / (x2 - x1);
        let k2 = -1.0 / k1;
        let x0 = x1 + (x2 - x1) * f;
        let y0 = y1 + k1 * (x0 - x1);
        let h_sq = (r1 * r1 - (x0 - x1).powi(2) - (y0 - y1).powi(2)).max(0.0);
        // Horizontal run along the chord, whose slope is k2.
        let run = (h_sq / (1.0 + k2 * k2)).sqrt();
        (
            Point3::new(x0 - run, y0 - k2 * run, 0.0),
            Point3::new(x0 + run, y0 + k2 * run, 0.0),
        )
    }
}
