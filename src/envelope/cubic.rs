use crate::error::Result;
use crate::math::bounds::Bounds;
use crate::math::interpolate::{cerp, lerp};
use crate::math::{Point2, Vector2};

use super::{index_error, normalize, CubicControlPoint, CubicSide};

/// Number of indexable control points.
pub const CONTROL_POINT_COUNT: usize = 12;

/// The two-handle envelope: each corner carries a pair of tangent
/// anchors, warping along cubic Bézier sides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicEnvelope {
    top_left: CubicControlPoint,
    top_right: CubicControlPoint,
    bottom_left: CubicControlPoint,
    bottom_right: CubicControlPoint,
}

impl CubicEnvelope {
    /// Creates an envelope over the given rectangle with anchors a third
    /// of a side away from their corner, i.e. the identity warp.
    #[must_use]
    pub fn from_rect(x: f32, y: f32, width: f32, height: f32) -> Self {
        let w3 = width * (1.0 / 3.0);
        let h3 = height * (1.0 / 3.0);
        Self {
            top_left: CubicControlPoint::new(
                Point2::new(x, y),
                Vector2::new(w3, 0.0),
                Vector2::new(0.0, h3),
            ),
            top_right: CubicControlPoint::new(
                Point2::new(x + width, y),
                Vector2::new(-w3, 0.0),
                Vector2::new(0.0, h3),
            ),
            bottom_left: CubicControlPoint::new(
                Point2::new(x, y + height),
                Vector2::new(w3, 0.0),
                Vector2::new(0.0, -h3),
            ),
            bottom_right: CubicControlPoint::new(
                Point2::new(x + width, y + height),
                Vector2::new(-w3, 0.0),
                Vector2::new(0.0, -h3),
            ),
        }
    }

    /// Creates an envelope from explicit corner control points.
    #[must_use]
    pub fn new(
        top_left: CubicControlPoint,
        top_right: CubicControlPoint,
        bottom_left: CubicControlPoint,
        bottom_right: CubicControlPoint,
    ) -> Self {
        Self {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        }
    }

    /// Cubic warp: Bézier along each vertical edge at `ny` using the
    /// vertical anchors, linear blend of the horizontal anchors, then a
    /// Bézier across at `nx`.
    #[inline]
    #[must_use]
    pub(crate) fn warp(&self, bounds: &Bounds, point: Point2) -> Point2 {
        let (nx, ny) = normalize(bounds, point);
        let left_anchor = cerp(
            self.top_left.point(),
            self.top_left.anchor_b_global(),
            self.bottom_left.anchor_b_global(),
            self.bottom_left.point(),
            ny,
        );
        let left_handle = lerp(
            self.top_left.anchor_a_global(),
            self.bottom_left.anchor_a_global(),
            ny,
        );
        let right_handle = lerp(
            self.top_right.anchor_a_global(),
            self.bottom_right.anchor_a_global(),
            ny,
        );
        let right_anchor = cerp(
            self.top_right.point(),
            self.top_right.anchor_b_global(),
            self.bottom_right.anchor_b_global(),
            self.bottom_right.point(),
            ny,
        );
        cerp(left_anchor, left_handle, right_handle, right_anchor, nx)
    }

    /// Returns the control point at `index`.
    ///
    /// Indices walk the perimeter: corner, then its outgoing horizontal
    /// anchor, then the next corner's incoming anchor, and so on, with
    /// the vertical anchors interleaved the way the quad is drawn.
    ///
    /// # Errors
    ///
    /// Returns an error if `index >= 12`.
    pub fn control_point(&self, index: usize) -> Result<Point2> {
        match index {
            0 => Ok(self.top_left.point()),
            1 => Ok(self.top_left.anchor_a_global()),
            2 => Ok(self.top_right.anchor_a_global()),
            3 => Ok(self.top_right.point()),
            4 => Ok(self.top_right.anchor_b_global()),
            5 => Ok(self.bottom_left.anchor_b_global()),
            6 => Ok(self.bottom_left.point()),
            7 => Ok(self.bottom_left.anchor_a_global()),
            8 => Ok(self.bottom_right.anchor_a_global()),
            9 => Ok(self.bottom_right.point()),
            10 => Ok(self.bottom_right.anchor_b_global()),
            11 => Ok(self.top_left.anchor_b_global()),
            _ => Err(index_error(index, CONTROL_POINT_COUNT)),
        }
    }

    /// Replaces the control point at `index`. Corner indices move the
    /// corner rigidly with its anchors; anchor indices reposition just
    /// that anchor.
    ///
    /// # Errors
    ///
    /// Returns an error if `index >= 12`.
    pub fn set_control_point(&mut self, index: usize, point: Point2) -> Result<()> {
        match index {
            0 => self.top_left.set_point(point),
            1 => self.top_left.set_anchor_a_global(point),
            2 => self.top_right.set_anchor_a_global(point),
            3 => self.top_right.set_point(point),
            4 => self.top_right.set_anchor_b_global(point),
            5 => self.bottom_left.set_anchor_b_global(point),
            6 => self.bottom_left.set_point(point),
            7 => self.bottom_left.set_anchor_a_global(point),
            8 => self.bottom_right.set_anchor_a_global(point),
            9 => self.bottom_right.set_point(point),
            10 => self.bottom_right.set_anchor_b_global(point),
            11 => self.top_left.set_anchor_b_global(point),
            _ => return Err(index_error(index, CONTROL_POINT_COUNT)),
        }
        Ok(())
    }

    /// The sides (top, right, bottom, left) as cubic control quadruples.
    #[must_use]
    pub fn side_curves(&self) -> [CubicSide; 4] {
        [
            (
                self.top_left.point(),
                self.top_left.anchor_a_global(),
                self.top_right.anchor_a_global(),
                self.top_right.point(),
            ),
            (
                self.top_right.point(),
                self.top_right.anchor_b_global(),
                self.bottom_right.anchor_b_global(),
                self.bottom_right.point(),
            ),
            (
                self.bottom_right.point(),
                self.bottom_right.anchor_a_global(),
                self.bottom_left.anchor_a_global(),
                self.bottom_left.point(),
            ),
            (
                self.bottom_left.point(),
                self.bottom_left.anchor_b_global(),
                self.top_left.anchor_b_global(),
                self.top_left.point(),
            ),
        ]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    #[test]
    fn default_anchors_give_identity_warp() {
        // Third-of-side anchors keep every cubic side a straight line, so
        // the default envelope reproduces its rectangle.
        let bounds = Bounds::new(0.0, 0.0, 12.0, 9.0);
        let envelope = CubicEnvelope::from_rect(0.0, 0.0, 12.0, 9.0);
        for point in [
            Point2::new(0.0, 0.0),
            Point2::new(12.0, 9.0),
            Point2::new(6.0, 4.5),
            Point2::new(1.0, 8.0),
        ] {
            let warped = envelope.warp(&bounds, point);
            assert!((warped.x - point.x).abs() < TOLERANCE, "{warped:?}");
            assert!((warped.y - point.y).abs() < TOLERANCE, "{warped:?}");
        }
    }

    #[test]
    fn corners_map_to_corners() {
        let bounds = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let mut envelope = CubicEnvelope::from_rect(0.0, 0.0, 10.0, 10.0);
        envelope.set_control_point(1, Point2::new(3.0, -6.0)).unwrap();
        let warped = envelope.warp(&bounds, Point2::new(0.0, 0.0));
        assert!(warped.x.abs() < TOLERANCE);
        assert!(warped.y.abs() < TOLERANCE);
    }

    #[test]
    fn dragging_a_corner_moves_its_anchors() {
        let mut envelope = CubicEnvelope::from_rect(0.0, 0.0, 9.0, 9.0);
        let anchor_before = envelope.control_point(1).unwrap();
        envelope.set_control_point(0, Point2::new(5.0, 5.0)).unwrap();
        let anchor_after = envelope.control_point(1).unwrap();
        assert!((anchor_after.x - (anchor_before.x + 5.0)).abs() < TOLERANCE);
        assert!((anchor_after.y - (anchor_before.y + 5.0)).abs() < TOLERANCE);
    }

    #[test]
    fn dragging_an_anchor_leaves_the_corner_alone() {
        let mut envelope = CubicEnvelope::from_rect(0.0, 0.0, 9.0, 9.0);
        let corner_before = envelope.control_point(3).unwrap();
        envelope.set_control_point(4, Point2::new(20.0, 1.0)).unwrap();
        assert_eq!(envelope.control_point(3).unwrap(), corner_before);
        assert_eq!(envelope.control_point(4).unwrap(), Point2::new(20.0, 1.0));
    }

    #[test]
    fn side_curves_share_corners() {
        let envelope = CubicEnvelope::from_rect(1.0, 2.0, 7.0, 5.0);
        let [top, right, bottom, left] = envelope.side_curves();
        assert_eq!(top.3, right.0);
        assert_eq!(right.3, bottom.0);
        assert_eq!(bottom.3, left.0);
        assert_eq!(left.3, top.0);
    }
}
