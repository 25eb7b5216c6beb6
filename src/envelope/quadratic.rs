use crate::error::Result;
use crate::math::bounds::Bounds;
use crate::math::interpolate::{lerp, qerp, quadratic_to_cubic};
use crate::math::Point2;

use super::{index_error, normalize, CubicSide};

/// Number of indexable control points.
pub const CONTROL_POINT_COUNT: usize = 8;

/// The single-handle envelope: four corners plus one mid-side handle per
/// edge, warping along quadratic Bézier sides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticEnvelope {
    top_left: Point2,
    top_right: Point2,
    bottom_left: Point2,
    bottom_right: Point2,
    handle_top: Point2,
    handle_right: Point2,
    handle_bottom: Point2,
    handle_left: Point2,
}

impl QuadraticEnvelope {
    /// Creates an envelope over the given rectangle with each handle at
    /// the midpoint of its side, i.e. the identity warp.
    #[must_use]
    pub fn from_rect(x: f32, y: f32, width: f32, height: f32) -> Self {
        let w2 = width * 0.5;
        let h2 = height * 0.5;
        Self {
            top_left: Point2::new(x, y),
            handle_top: Point2::new(x + w2, y),
            top_right: Point2::new(x + width, y),
            handle_right: Point2::new(x + width, y + h2),
            bottom_left: Point2::new(x, y + height),
            handle_left: Point2::new(x, y + h2),
            bottom_right: Point2::new(x + width, y + height),
            handle_bottom: Point2::new(x + w2, y + height),
        }
    }

    /// Creates an envelope from explicit corners and handles.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        top_left: Point2,
        handle_top: Point2,
        top_right: Point2,
        handle_right: Point2,
        bottom_left: Point2,
        handle_left: Point2,
        bottom_right: Point2,
        handle_bottom: Point2,
    ) -> Self {
        Self {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
            handle_top,
            handle_right,
            handle_bottom,
            handle_left,
        }
    }

    /// Quadratic warp: Bézier along each vertical edge at `ny`, linear
    /// blend of the horizontal handles, then a Bézier across at `nx`.
    #[inline]
    #[must_use]
    pub(crate) fn warp(&self, bounds: &Bounds, point: Point2) -> Point2 {
        let (nx, ny) = normalize(bounds, point);
        let left_anchor = qerp(self.top_left, self.handle_left, self.bottom_left, ny);
        let handle = lerp(self.handle_top, self.handle_bottom, ny);
        let right_anchor = qerp(self.top_right, self.handle_right, self.bottom_right, ny);
        qerp(left_anchor, handle, right_anchor, nx)
    }

    /// Returns the control point at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index >= 8`.
    pub fn control_point(&self, index: usize) -> Result<Point2> {
        match index {
            0 => Ok(self.top_left),
            1 => Ok(self.handle_top),
            2 => Ok(self.top_right),
            3 => Ok(self.handle_right),
            4 => Ok(self.bottom_left),
            5 => Ok(self.handle_left),
            6 => Ok(self.bottom_right),
            7 => Ok(self.handle_bottom),
            _ => Err(index_error(index, CONTROL_POINT_COUNT)),
        }
    }

    /// Replaces the control point at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index >= 8`.
    pub fn set_control_point(&mut self, index: usize, point: Point2) -> Result<()> {
        match index {
            0 => self.top_left = point,
            1 => self.handle_top = point,
            2 => self.top_right = point,
            3 => self.handle_right = point,
            4 => self.bottom_left = point,
            5 => self.handle_left = point,
            6 => self.bottom_right = point,
            7 => self.handle_bottom = point,
            _ => return Err(index_error(index, CONTROL_POINT_COUNT)),
        }
        Ok(())
    }

    /// The sides (top, right, bottom, left) degree-raised to cubic form.
    #[must_use]
    pub fn side_curves(&self) -> [CubicSide; 4] {
        [
            quadratic_to_cubic(self.top_left, self.handle_top, self.top_right),
            quadratic_to_cubic(self.top_right, self.handle_right, self.bottom_right),
            quadratic_to_cubic(self.bottom_right, self.handle_bottom, self.bottom_left),
            quadratic_to_cubic(self.bottom_left, self.handle_left, self.top_left),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::interpolate::cerp;
    use crate::math::TOLERANCE;

    #[test]
    fn default_handles_give_identity_warp() {
        // Mid-side handles keep every quadratic side a straight line, so
        // the default envelope reproduces its rectangle.
        let bounds = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let envelope = QuadraticEnvelope::from_rect(0.0, 0.0, 10.0, 10.0);
        for point in [
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(4.0, 6.0),
        ] {
            let warped = envelope.warp(&bounds, point);
            assert!((warped.x - point.x).abs() < TOLERANCE, "{warped:?}");
            assert!((warped.y - point.y).abs() < TOLERANCE, "{warped:?}");
        }
    }

    #[test]
    fn corners_map_to_corners() {
        let bounds = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let mut envelope = QuadraticEnvelope::from_rect(0.0, 0.0, 10.0, 10.0);
        // Bulge the top edge; corners must stay fixed regardless.
        envelope.handle_top = Point2::new(5.0, -8.0);
        let warped = envelope.warp(&bounds, Point2::new(0.0, 0.0));
        assert!((warped.x - envelope.top_left.x).abs() < TOLERANCE);
        assert!((warped.y - envelope.top_left.y).abs() < TOLERANCE);
        let warped = envelope.warp(&bounds, Point2::new(10.0, 10.0));
        assert!((warped.x - envelope.bottom_right.x).abs() < TOLERANCE);
        assert!((warped.y - envelope.bottom_right.y).abs() < TOLERANCE);
    }

    #[test]
    fn bulged_top_pulls_midpoint_upward() {
        let bounds = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let mut envelope = QuadraticEnvelope::from_rect(0.0, 0.0, 10.0, 10.0);
        envelope.handle_top = Point2::new(5.0, -8.0);
        let warped = envelope.warp(&bounds, Point2::new(5.0, 0.0));
        assert!(warped.y < -1.0, "expected upward bulge, got {warped:?}");
        assert!((warped.x - 5.0).abs() < TOLERANCE);
    }

    #[test]
    fn side_curves_match_quadratic_sides() {
        let mut envelope = QuadraticEnvelope::from_rect(0.0, 0.0, 10.0, 10.0);
        envelope.handle_top = Point2::new(5.0, -8.0);
        let [top, ..] = envelope.side_curves();
        for i in 0..=10 {
            #[allow(clippy::cast_precision_loss)]
            let t = i as f32 / 10.0;
            let expected = qerp(envelope.top_left, envelope.handle_top, envelope.top_right, t);
            let raised = cerp(top.0, top.1, top.2, top.3, t);
            assert!((raised.x - expected.x).abs() < TOLERANCE);
            assert!((raised.y - expected.y).abs() < TOLERANCE);
        }
    }
}
