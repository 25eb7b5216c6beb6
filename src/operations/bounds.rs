use crate::geometry::{Contour, Geometry, Group, Shape};
use crate::math::bounds::Bounds;

/// Bounding rectangle of a shape-tree node, or `None` if the node holds
/// no points anywhere.
#[must_use]
pub fn geometry_bounds(geometry: &Geometry) -> Option<Bounds> {
    match geometry {
        Geometry::Group(group) => group_bounds(group),
        Geometry::Shape(shape) => shape_bounds(shape),
        Geometry::Contour(contour) => contour_bounds(contour),
    }
}

/// Union of the bounds of all children, or `None` for an empty group.
#[must_use]
pub fn group_bounds(group: &Group) -> Option<Bounds> {
    group.iter().filter_map(geometry_bounds).reduce(|a, b| a.union(&b))
}

/// Union of the bounds of all contours, or `None` for an empty shape.
#[must_use]
pub fn shape_bounds(shape: &Shape) -> Option<Bounds> {
    shape
        .iter()
        .filter_map(contour_bounds)
        .reduce(|a, b| a.union(&b))
}

/// Bounding rectangle of one contour, or `None` if it has no points.
#[must_use]
pub fn contour_bounds(contour: &Contour) -> Option<Bounds> {
    Bounds::from_points(contour.points())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{Point2, TOLERANCE};

    fn close(a: &Bounds, b: &Bounds) -> bool {
        (a.x - b.x).abs() < TOLERANCE
            && (a.y - b.y).abs() < TOLERANCE
            && (a.width - b.width).abs() < TOLERANCE
            && (a.height - b.height).abs() < TOLERANCE
    }

    fn square(origin: f32, size: f32) -> Contour {
        Contour::from_points(vec![
            Point2::new(origin, origin),
            Point2::new(origin + size, origin),
            Point2::new(origin + size, origin + size),
            Point2::new(origin, origin + size),
        ])
    }

    #[test]
    fn empty_tree_has_no_bounds() {
        assert!(group_bounds(&Group::new()).is_none());
        assert!(shape_bounds(&Shape::new()).is_none());
        assert!(contour_bounds(&Contour::new()).is_none());

        // Empty children must not pull the union toward the origin.
        let mut group = Group::new();
        group.push(Contour::new());
        group.push(square(5.0, 2.0));
        let bounds = group_bounds(&group).unwrap();
        assert!(close(&bounds, &Bounds::new(5.0, 5.0, 2.0, 2.0)));
    }

    #[test]
    fn shape_bounds_cover_all_contours() {
        let shape = Shape::from_contours(vec![square(0.0, 2.0), square(8.0, 2.0)]);
        let bounds = shape_bounds(&shape).unwrap();
        assert!(close(&bounds, &Bounds::new(0.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn group_bounds_recurse_through_nesting() {
        let mut inner = Group::new();
        inner.push(square(-4.0, 1.0));
        let mut outer = Group::new();
        outer.push(inner);
        outer.push(Shape::from(square(2.0, 3.0)));
        let bounds = group_bounds(&outer).unwrap();
        assert!(close(&bounds, &Bounds::new(-4.0, -4.0, 9.0, 9.0)));
    }
}
