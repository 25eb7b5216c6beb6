use crate::geometry::{Contour, Shape};
use crate::math::Point2;

/// Default incidence tolerance: the smallest representable step.
pub const DEFAULT_EPSILON: f32 = f32::EPSILON;

/// Tri-state result of a containment query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inclusion {
    Outside,
    Inside,
    Boundary,
}

/// Classifies `point` against a shape using the even-odd rule.
///
/// Each contour is tested independently and the results are XOR-folded:
/// a point inside an odd number of contours is inside, an even number
/// means it sits in a hole. Any boundary incidence short-circuits the
/// whole query to `Boundary`.
#[must_use]
pub fn shape_contains_point(shape: &Shape, point: Point2, epsilon: f32) -> Inclusion {
    contours_contain_point(shape.contours(), point, epsilon)
}

/// Even-odd fold over an explicit contour list. See
/// [`shape_contains_point`].
#[must_use]
pub fn contours_contain_point(contours: &[Contour], point: Point2, epsilon: f32) -> Inclusion {
    let mut inside = false;
    for contour in contours {
        match contour_contains_point(contour, point, epsilon) {
            Inclusion::Boundary => return Inclusion::Boundary,
            Inclusion::Inside => inside = !inside,
            Inclusion::Outside => {}
        }
    }
    if inside {
        Inclusion::Inside
    } else {
        Inclusion::Outside
    }
}

/// Classifies `point` against a single closed contour with the
/// crossing-number algorithm.
///
/// Incidence tests are exact by design: a hit on a vertex or an edge
/// (orientation determinant within `epsilon`) classifies as `Boundary`
/// before any crossing is counted. Degenerate contours still answer:
/// a single point or a two-point segment can only yield `Boundary` or
/// `Outside`.
#[allow(clippy::float_cmp)]
#[must_use]
pub fn contour_contains_point(contour: &Contour, point: Point2, epsilon: f32) -> Inclusion {
    let points = contour.points();

    match points {
        [] => return Inclusion::Outside,
        [p] => {
            return if point.x == p.x && point.y == p.y {
                Inclusion::Boundary
            } else {
                Inclusion::Outside
            };
        }
        [p0, p1] => {
            let on_endpoint = (point.x == p0.x && point.y == p0.y)
                || (point.x == p1.x && point.y == p1.y);
            let between = ((point.x > p0.x) == (point.x < p1.x))
                && ((point.y > p0.y) == (point.y < p1.y));
            let collinear = (point.x - p0.x) * (p1.y - p0.y) == (point.y - p0.y) * (p1.x - p0.x);
            return if on_endpoint || (between && collinear) {
                Inclusion::Boundary
            } else {
                Inclusion::Outside
            };
        }
        _ => {}
    }

    let mut inside = false;
    let mut cur = points[0];
    for i in 1..=points.len() {
        let next = if i == points.len() { points[0] } else { points[i] };

        // Vertex hit, or the point lying on a horizontal edge.
        if cur.y == point.y
            && (cur.x == point.x
                || (next.y == point.y && ((cur.x > point.x) == (next.x < point.x))))
        {
            return Inclusion::Boundary;
        }

        // Only edges straddling the point's horizontal line can cross.
        if (next.y < point.y) != (cur.y < point.y) {
            if next.x >= point.x {
                if cur.x > point.x {
                    inside = !inside;
                } else {
                    match edge_side(cur, next, point, epsilon) {
                        EdgeSide::On => return Inclusion::Boundary,
                        EdgeSide::Crossing => inside = !inside,
                        EdgeSide::Clear => {}
                    }
                }
            } else if cur.x > point.x {
                match edge_side(cur, next, point, epsilon) {
                    EdgeSide::On => return Inclusion::Boundary,
                    EdgeSide::Crossing => inside = !inside,
                    EdgeSide::Clear => {}
                }
            }
        }

        cur = next;
    }

    if inside {
        Inclusion::Inside
    } else {
        Inclusion::Outside
    }
}

enum EdgeSide {
    /// Within `epsilon` of the edge itself.
    On,
    /// The edge passes to the right of the point.
    Crossing,
    /// The edge passes to the left of the point.
    Clear,
}

/// Orientation determinant of the edge `cur → next` relative to `point`,
/// classified for the crossing count.
#[inline]
fn edge_side(cur: Point2, next: Point2, point: Point2, epsilon: f32) -> EdgeSide {
    let determinant =
        (next.x - point.x) * (cur.y - point.y) - (cur.x - point.x) * (next.y - point.y);
    if determinant.abs() < epsilon {
        EdgeSide::On
    } else if (determinant > 0.0) == (cur.y > next.y) {
        EdgeSide::Crossing
    } else {
        EdgeSide::Clear
    }
}
