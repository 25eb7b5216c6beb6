use super::Point2;

/// Returns the Euclidean distance between two points.
#[inline]
#[must_use]
pub fn distance(p1: Point2, p2: Point2) -> f32 {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    (dx * dx + dy * dy).sqrt()
}

/// Returns the squared Euclidean distance between two points.
///
/// Preferred over [`distance`] wherever only comparison is needed, since it
/// avoids the square root on hot paths.
#[inline]
#[must_use]
pub fn distance_squared(p1: Point2, p2: Point2) -> f32 {
    let dx = p1.x - p2.x;
    let dy = p1.y - p2.y;
    dx * dx + dy * dy
}

/// Returns the minimum distance from `point` to the segment `seg1 → seg2`,
/// along with the nearest point on the segment.
///
/// The projection parameter is clamped to the segment, so the nearest point
/// is one of the endpoints when the perpendicular foot falls outside. A
/// zero-length segment degenerates to point-to-point distance.
#[must_use]
pub fn distance_to_segment(point: Point2, seg1: Point2, seg2: Point2) -> (f32, Point2) {
    let (d, nearest) = distance_to_segment_squared(point, seg1, seg2);
    (d.sqrt(), nearest)
}

/// Squared-distance variant of [`distance_to_segment`], for thresholding.
#[must_use]
pub fn distance_to_segment_squared(point: Point2, seg1: Point2, seg2: Point2) -> (f32, Point2) {
    let dx = seg2.x - seg1.x;
    let dy = seg2.y - seg1.y;
    if dx == 0.0 && dy == 0.0 {
        // It's a point, not a line segment.
        return (distance_squared(point, seg1), seg1);
    }

    // The t that minimizes the distance to the infinite line.
    let t = ((point.x - seg1.x) * dx + (point.y - seg1.y) * dy) / (dx * dx + dy * dy);

    let nearest = if t < 0.0 {
        seg1
    } else if t > 1.0 {
        seg2
    } else {
        Point2::new(seg1.x + t * dx, seg1.y + t * dy)
    };

    (distance_squared(point, nearest), nearest)
}
