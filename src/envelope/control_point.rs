use crate::math::{Point2, Vector2};

/// Converts a corner-relative anchor offset to an absolute point.
#[inline]
#[must_use]
pub fn local_to_global(offset: Vector2, reference: Point2) -> Point2 {
    reference + offset
}

/// Converts an absolute anchor point to a corner-relative offset.
#[inline]
#[must_use]
pub fn global_to_local(point: Point2, reference: Point2) -> Vector2 {
    point - reference
}

/// One corner of a [`CubicEnvelope`](super::CubicEnvelope): the corner
/// position plus two tangent handles.
///
/// The handles are stored as offsets from the corner, so moving the
/// corner carries them along rigidly. The absolute ("global") view is
/// derived on demand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicControlPoint {
    point: Point2,
    anchor_a: Vector2,
    anchor_b: Vector2,
}

impl CubicControlPoint {
    /// Creates a control point from corner-relative anchor offsets.
    #[must_use]
    pub fn new(point: Point2, anchor_a: Vector2, anchor_b: Vector2) -> Self {
        Self {
            point,
            anchor_a,
            anchor_b,
        }
    }

    /// Creates a control point from absolute anchor positions.
    #[must_use]
    pub fn from_global(point: Point2, anchor_a: Point2, anchor_b: Point2) -> Self {
        Self {
            point,
            anchor_a: global_to_local(anchor_a, point),
            anchor_b: global_to_local(anchor_b, point),
        }
    }

    /// The corner position.
    #[must_use]
    pub fn point(&self) -> Point2 {
        self.point
    }

    /// Moves the corner; the anchors follow rigidly.
    pub fn set_point(&mut self, point: Point2) {
        self.point = point;
    }

    /// The horizontal-tangent anchor as a corner-relative offset.
    #[must_use]
    pub fn anchor_a(&self) -> Vector2 {
        self.anchor_a
    }

    /// The vertical-tangent anchor as a corner-relative offset.
    #[must_use]
    pub fn anchor_b(&self) -> Vector2 {
        self.anchor_b
    }

    /// The horizontal-tangent anchor in absolute coordinates.
    #[must_use]
    pub fn anchor_a_global(&self) -> Point2 {
        local_to_global(self.anchor_a, self.point)
    }

    /// The vertical-tangent anchor in absolute coordinates.
    #[must_use]
    pub fn anchor_b_global(&self) -> Point2 {
        local_to_global(self.anchor_b, self.point)
    }

    /// Places the horizontal-tangent anchor at an absolute position.
    pub fn set_anchor_a_global(&mut self, anchor: Point2) {
        self.anchor_a = global_to_local(anchor, self.point);
    }

    /// Places the vertical-tangent anchor at an absolute position.
    pub fn set_anchor_b_global(&mut self, anchor: Point2) {
        self.anchor_b = global_to_local(anchor, self.point);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_are_inverses() {
        let reference = Point2::new(10.0, 20.0);
        let offset = Vector2::new(3.0, -4.0);
        let global = local_to_global(offset, reference);
        assert_eq!(global, Point2::new(13.0, 16.0));
        assert_eq!(global_to_local(global, reference), offset);
    }

    #[test]
    fn moving_the_corner_drags_the_anchors() {
        let mut cp = CubicControlPoint::new(
            Point2::new(0.0, 0.0),
            Vector2::new(5.0, 0.0),
            Vector2::new(0.0, 5.0),
        );
        assert_eq!(cp.anchor_a_global(), Point2::new(5.0, 0.0));

        cp.set_point(Point2::new(100.0, 100.0));
        assert_eq!(cp.anchor_a_global(), Point2::new(105.0, 100.0));
        assert_eq!(cp.anchor_b_global(), Point2::new(100.0, 105.0));
        // Local offsets are untouched.
        assert_eq!(cp.anchor_a(), Vector2::new(5.0, 0.0));
    }

    #[test]
    fn global_setters_store_local_offsets() {
        let mut cp = CubicControlPoint::new(
            Point2::new(10.0, 10.0),
            Vector2::new(0.0, 0.0),
            Vector2::new(0.0, 0.0),
        );
        cp.set_anchor_a_global(Point2::new(13.0, 10.0));
        assert_eq!(cp.anchor_a(), Vector2::new(3.0, 0.0));

        let from_global = CubicControlPoint::from_global(
            Point2::new(10.0, 10.0),
            Point2::new(13.0, 10.0),
            Point2::new(10.0, 10.0),
        );
        assert_eq!(from_global.anchor_a(), cp.anchor_a());
    }
}
