use crate::error::Result;
use crate::math::bounds::Bounds;
use crate::math::interpolate::line_to_cubic;
use crate::math::Point2;

use super::{index_error, normalize, CubicSide};

/// Number of indexable control points.
pub const CONTROL_POINT_COUNT: usize = 4;

/// The straight-edged envelope: four corners, bilinear warp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearEnvelope {
    top_left: Point2,
    top_right: Point2,
    bottom_left: Point2,
    bottom_right: Point2,
}

impl LinearEnvelope {
    /// Creates an envelope whose corners coincide with the given
    /// rectangle, i.e. the identity warp for that rectangle.
    #[must_use]
    pub fn from_rect(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            top_left: Point2::new(x, y),
            top_right: Point2::new(x + width, y),
            bottom_left: Point2::new(x, y + height),
            bottom_right: Point2::new(x + width, y + height),
        }
    }

    /// Creates an envelope from explicit corners.
    #[must_use]
    pub fn new(
        top_left: Point2,
        top_right: Point2,
        bottom_left: Point2,
        bottom_right: Point2,
    ) -> Self {
        Self {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        }
    }

    /// Bilinear blend of the four corners at the point's normalized
    /// coordinates.
    ///
    /// This is the expanded closed form of lerping the left and right
    /// edges along `ny` and blending the two anchors along `nx`.
    #[inline]
    #[must_use]
    pub(crate) fn warp(&self, bounds: &Bounds, point: Point2) -> Point2 {
        let (nx, ny) = normalize(bounds, point);
        let (rx, ry) = (1.0 - nx, 1.0 - ny);

        let left_anchor = (
            ry * self.top_left.x + ny * self.bottom_left.x,
            ry * self.top_left.y + ny * self.bottom_left.y,
        );
        let right_anchor = (
            ry * self.top_right.x + ny * self.bottom_right.x,
            ry * self.top_right.y + ny * self.bottom_right.y,
        );

        Point2::new(
            rx * left_anchor.0 + nx * right_anchor.0,
            rx * left_anchor.1 + nx * right_anchor.1,
        )
    }

    /// Returns the control point at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index >= 4`.
    pub fn control_point(&self, index: usize) -> Result<Point2> {
        match index {
            0 => Ok(self.top_left),
            1 => Ok(self.top_right),
            2 => Ok(self.bottom_left),
            3 => Ok(self.bottom_right),
            _ => Err(index_error(index, CONTROL_POINT_COUNT)),
        }
    }

    /// Replaces the control point at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index >= 4`.
    pub fn set_control_point(&mut self, index: usize, point: Point2) -> Result<()> {
        match index {
            0 => self.top_left = point,
            1 => self.top_right = point,
            2 => self.bottom_left = point,
            3 => self.bottom_right = point,
            _ => return Err(index_error(index, CONTROL_POINT_COUNT)),
        }
        Ok(())
    }

    /// The sides (top, right, bottom, left) degree-raised to cubic form.
    #[must_use]
    pub fn side_curves(&self) -> [CubicSide; 4] {
        [
            line_to_cubic(self.top_left, self.top_right),
            line_to_cubic(self.top_right, self.bottom_right),
            line_to_cubic(self.bottom_right, self.bottom_left),
            line_to_cubic(self.bottom_left, self.top_left),
        ]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::interpolate::lerp;
    use crate::math::TOLERANCE;

    #[test]
    fn identity_envelope_is_identity_warp() {
        let bounds = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let envelope = LinearEnvelope::from_rect(0.0, 0.0, 10.0, 10.0);
        for point in [
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(3.0, 7.0),
            Point2::new(5.0, 5.0),
        ] {
            let warped = envelope.warp(&bounds, point);
            assert!((warped.x - point.x).abs() < TOLERANCE, "{warped:?}");
            assert!((warped.y - point.y).abs() < TOLERANCE, "{warped:?}");
        }
    }

    #[test]
    fn collapsed_envelope_maps_everything_to_one_point() {
        let bounds = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let center = Point2::new(5.0, 5.0);
        let envelope = LinearEnvelope::new(center, center, center, center);
        for point in [
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(2.5, 9.0),
        ] {
            assert_eq!(envelope.warp(&bounds, point), center);
        }
    }

    #[test]
    fn closed_form_matches_nested_lerps() {
        let bounds = Bounds::new(0.0, 0.0, 8.0, 4.0);
        let envelope = LinearEnvelope::new(
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 2.0),
            Point2::new(-1.0, 6.0),
            Point2::new(9.0, 9.0),
        );
        for point in [Point2::new(2.0, 1.0), Point2::new(6.5, 3.0)] {
            let (nx, ny) = normalize(&bounds, point);
            let expected = lerp(
                lerp(envelope.top_left, envelope.bottom_left, ny),
                lerp(envelope.top_right, envelope.bottom_right, ny),
                nx,
            );
            let warped = envelope.warp(&bounds, point);
            assert!((warped.x - expected.x).abs() < TOLERANCE);
            assert!((warped.y - expected.y).abs() < TOLERANCE);
        }
    }

    #[test]
    fn side_curves_trace_the_quad() {
        let envelope = LinearEnvelope::from_rect(0.0, 0.0, 10.0, 10.0);
        let [top, right, bottom, left] = envelope.side_curves();
        assert_eq!(top.0, Point2::new(0.0, 0.0));
        assert_eq!(top.3, Point2::new(10.0, 0.0));
        assert_eq!(right.3, Point2::new(10.0, 10.0));
        assert_eq!(bottom.3, Point2::new(0.0, 10.0));
        assert_eq!(left.3, Point2::new(0.0, 0.0));
    }
}
