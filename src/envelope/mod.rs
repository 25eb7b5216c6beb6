pub mod control_point;
pub mod cubic;
pub mod linear;
pub mod quadratic;

pub use control_point::CubicControlPoint;
pub use cubic::CubicEnvelope;
pub use linear::LinearEnvelope;
pub use quadratic::QuadraticEnvelope;

use crate::error::{EnvelopeError, Result};
use crate::math::bounds::Bounds;
use crate::math::Point2;

/// Control quadruple of one envelope side, in cubic Bézier form. Every
/// variant can present its sides this way for uniform rendering.
pub type CubicSide = (Point2, Point2, Point2, Point2);

/// A parametric bounding quad that warps points from a reference
/// rectangle onto a distorted region.
///
/// A variant is chosen once per editing session; the distortion engine
/// dispatches on it at a single call site.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Envelope {
    Linear(LinearEnvelope),
    Quadratic(QuadraticEnvelope),
    Cubic(CubicEnvelope),
}

impl Envelope {
    /// Maps `point`, expressed in the space of `bounds`, through the
    /// envelope.
    ///
    /// # Errors
    ///
    /// Returns `EnvelopeError::InvalidBounds` if either extent of `bounds`
    /// is zero, since normalization would divide by zero.
    pub fn process_point(&self, bounds: &Bounds, point: Point2) -> Result<Point2> {
        check_bounds(bounds)?;
        Ok(self.map_point(bounds, point))
    }

    /// Infallible mapping used on hot paths once the caller has validated
    /// `bounds`.
    #[must_use]
    pub(crate) fn map_point(&self, bounds: &Bounds, point: Point2) -> Point2 {
        match self {
            Self::Linear(envelope) => envelope.warp(bounds, point),
            Self::Quadratic(envelope) => envelope.warp(bounds, point),
            Self::Cubic(envelope) => envelope.warp(bounds, point),
        }
    }

    /// The number of indexable control points (4, 8, or 12).
    #[must_use]
    pub fn control_point_count(&self) -> usize {
        match self {
            Self::Linear(_) => linear::CONTROL_POINT_COUNT,
            Self::Quadratic(_) => quadratic::CONTROL_POINT_COUNT,
            Self::Cubic(_) => cubic::CONTROL_POINT_COUNT,
        }
    }

    /// Returns the control point at `index`, for generic UI iteration and
    /// hit-testing.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range for the variant.
    pub fn control_point(&self, index: usize) -> Result<Point2> {
        match self {
            Self::Linear(envelope) => envelope.control_point(index),
            Self::Quadratic(envelope) => envelope.control_point(index),
            Self::Cubic(envelope) => envelope.control_point(index),
        }
    }

    /// Replaces the control point at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range for the variant.
    pub fn set_control_point(&mut self, index: usize, point: Point2) -> Result<()> {
        match self {
            Self::Linear(envelope) => envelope.set_control_point(index, point),
            Self::Quadratic(envelope) => envelope.set_control_point(index, point),
            Self::Cubic(envelope) => envelope.set_control_point(index, point),
        }
    }

    /// The four sides (top, right, bottom, left) as cubic control
    /// quadruples, for uniform outline rendering.
    #[must_use]
    pub fn side_curves(&self) -> [CubicSide; 4] {
        match self {
            Self::Linear(envelope) => envelope.side_curves(),
            Self::Quadratic(envelope) => envelope.side_curves(),
            Self::Cubic(envelope) => envelope.side_curves(),
        }
    }
}

/// Normalized coordinates of `point` relative to `bounds`.
#[inline]
pub(crate) fn normalize(bounds: &Bounds, point: Point2) -> (f32, f32) {
    (
        (point.x - bounds.x) / bounds.width,
        (point.y - bounds.y) / bounds.height,
    )
}

/// Rejects bounds a normalization against which would divide by zero.
pub(crate) fn check_bounds(bounds: &Bounds) -> Result<()> {
    if bounds.is_degenerate() {
        return Err(EnvelopeError::InvalidBounds {
            width: bounds.width,
            height: bounds.height,
        }
        .into());
    }
    Ok(())
}

/// Builds a control point index error for a variant with `len` points.
pub(crate) fn index_error(index: usize, len: usize) -> crate::error::WarpError {
    EnvelopeError::IndexOutOfRange { index, len }.into()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn process_point_matches_the_variant_warp() {
        let bounds = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let envelope = Envelope::Cubic(CubicEnvelope::from_rect(0.0, 0.0, 10.0, 10.0));
        let point = Point2::new(3.0, 7.0);
        let processed = envelope.process_point(&bounds, point).unwrap();
        assert_eq!(processed, envelope.map_point(&bounds, point));
    }

    #[test]
    fn process_point_rejects_degenerate_bounds() {
        let envelope = Envelope::Linear(LinearEnvelope::from_rect(0.0, 0.0, 10.0, 10.0));
        let flat = Bounds::new(0.0, 0.0, 10.0, 0.0);
        assert!(envelope
            .process_point(&flat, Point2::new(5.0, 0.0))
            .is_err());
        let thin = Bounds::new(0.0, 0.0, 0.0, 10.0);
        assert!(envelope
            .process_point(&thin, Point2::new(0.0, 5.0))
            .is_err());
    }

    #[test]
    fn control_point_counts_per_variant() {
        let bounds = (0.0, 0.0, 10.0, 10.0);
        let linear = Envelope::Linear(LinearEnvelope::from_rect(
            bounds.0, bounds.1, bounds.2, bounds.3,
        ));
        let quadratic = Envelope::Quadratic(QuadraticEnvelope::from_rect(
            bounds.0, bounds.1, bounds.2, bounds.3,
        ));
        let cubic = Envelope::Cubic(CubicEnvelope::from_rect(
            bounds.0, bounds.1, bounds.2, bounds.3,
        ));
        assert_eq!(linear.control_point_count(), 4);
        assert_eq!(quadratic.control_point_count(), 8);
        assert_eq!(cubic.control_point_count(), 12);

        for envelope in [linear, quadratic, cubic] {
            let count = envelope.control_point_count();
            assert!(envelope.control_point(count - 1).is_ok());
            assert!(envelope.control_point(count).is_err());
        }
    }

    #[test]
    fn set_control_point_round_trips() {
        let mut envelope =
            Envelope::Quadratic(QuadraticEnvelope::from_rect(0.0, 0.0, 10.0, 10.0));
        let target = Point2::new(-3.0, 42.0);
        for index in 0..envelope.control_point_count() {
            envelope.set_control_point(index, target).unwrap();
            assert_eq!(envelope.control_point(index).unwrap(), target);
        }
        assert!(envelope.set_control_point(8, target).is_err());
    }
}
