use crate::envelope::{check_bounds, Envelope};
use crate::error::Result;
use crate::geometry::{Contour, Geometry, Group, Shape};
use crate::math::bounds::Bounds;
use crate::math::distance_2d::distance;
use crate::math::interpolate::lerp;

/// Warps a shape tree through an envelope, producing a new tree.
///
/// Every edge of every contour is resampled at a distance-adaptive
/// density before mapping, so straight input edges follow the envelope's
/// curvature instead of staying faceted. The input is never mutated.
///
/// This is re-run after every interactive edit, so the per-point work is
/// kept branch-free: `bounds` is validated once here, not per sample.
///
/// # Errors
///
/// Returns `EnvelopeError::InvalidBounds` if either extent of `bounds`
/// is zero.
pub fn distort(geometry: &Geometry, bounds: &Bounds, envelope: &Envelope) -> Result<Geometry> {
    check_bounds(bounds)?;
    Ok(distort_node(geometry, bounds, envelope))
}

/// Warps a group. See [`distort`].
///
/// # Errors
///
/// Returns `EnvelopeError::InvalidBounds` if either extent of `bounds`
/// is zero.
pub fn distort_group(group: &Group, bounds: &Bounds, envelope: &Envelope) -> Result<Group> {
    check_bounds(bounds)?;
    Ok(resample_group(group, bounds, envelope))
}

/// Warps a shape. See [`distort`].
///
/// # Errors
///
/// Returns `EnvelopeError::InvalidBounds` if either extent of `bounds`
/// is zero.
pub fn distort_shape(shape: &Shape, bounds: &Bounds, envelope: &Envelope) -> Result<Shape> {
    check_bounds(bounds)?;
    Ok(resample_shape(shape, bounds, envelope))
}

/// Warps a single contour. See [`distort`].
///
/// # Errors
///
/// Returns `EnvelopeError::InvalidBounds` if either extent of `bounds`
/// is zero.
pub fn distort_contour(
    contour: &Contour,
    bounds: &Bounds,
    envelope: &Envelope,
) -> Result<Contour> {
    check_bounds(bounds)?;
    Ok(resample_contour(contour, bounds, envelope))
}

fn distort_node(geometry: &Geometry, bounds: &Bounds, envelope: &Envelope) -> Geometry {
    match geometry {
        Geometry::Group(group) => Geometry::Group(resample_group(group, bounds, envelope)),
        Geometry::Shape(shape) => Geometry::Shape(resample_shape(shape, bounds, envelope)),
        Geometry::Contour(contour) => {
            Geometry::Contour(resample_contour(contour, bounds, envelope))
        }
    }
}

fn resample_group(group: &Group, bounds: &Bounds, envelope: &Envelope) -> Group {
    Group::from_nodes(
        group
            .iter()
            .map(|node| distort_node(node, bounds, envelope))
            .collect(),
    )
}

fn resample_shape(shape: &Shape, bounds: &Bounds, envelope: &Envelope) -> Shape {
    Shape::from_contours(
        shape
            .iter()
            .map(|contour| resample_contour(contour, bounds, envelope))
            .collect(),
    )
}

fn resample_contour(contour: &Contour, bounds: &Bounds, envelope: &Envelope) -> Contour {
    let points = contour.points();
    let mut output = Vec::new();

    let Some(&last) = points.last() else {
        return Contour::new();
    };

    // Walk the closed loop starting from the wrap-around edge, sampling
    // each edge on [0, 1) so every original vertex appears at t = 0 of
    // its outgoing edge.
    let mut previous = last;
    for &point in points {
        let length = distance(previous, point);
        if length == 0.0 {
            // A zero-length edge would make the step infinite; emit the
            // shared vertex once instead.
            output.push(envelope.map_point(bounds, point));
        } else {
            let step = 1.0 / (length * 2.0);
            let mut t = 0.0;
            while t < 1.0 {
                output.push(envelope.map_point(bounds, lerp(previous, point, t)));
                t += step;
            }
        }
        previous = point;
    }

    Contour::from_points(output)
}
