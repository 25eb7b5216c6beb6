use super::Point2;

const ONE_THIRD: f32 = 1.0 / 3.0;
const TWO_THIRDS: f32 = 2.0 / 3.0;

/// Linear interpolation between two points.
///
/// `t` is not restricted to `[0, 1]`; values outside extrapolate along
/// the line through `a` and `b`.
#[inline]
#[must_use]
pub fn lerp(a: Point2, b: Point2, t: f32) -> Point2 {
    Point2::new(
        (1.0 - t) * a.x + t * b.x,
        (1.0 - t) * a.y + t * b.y,
    )
}

/// Quadratic Bézier interpolation in Bernstein form over anchors `a`, `c`
/// and handle `b`.
#[inline]
#[must_use]
pub fn qerp(a: Point2, b: Point2, c: Point2, t: f32) -> Point2 {
    let u = 1.0 - t;
    Point2::new(
        u * u * a.x + 2.0 * u * t * b.x + t * t * c.x,
        u * u * a.y + 2.0 * u * t * b.y + t * t * c.y,
    )
}

/// Cubic Bézier interpolation in Bernstein form over anchors `a`, `d` and
/// handles `b`, `c`.
#[inline]
#[must_use]
pub fn cerp(a: Point2, b: Point2, c: Point2, d: Point2, t: f32) -> Point2 {
    let u = 1.0 - t;
    Point2::new(
        u * u * u * a.x + 3.0 * u * u * t * b.x + 3.0 * u * t * t * c.x + t * t * t * d.x,
        u * u * u * a.y + 3.0 * u * u * t * b.y + 3.0 * u * t * t * c.y + t * t * t * d.y,
    )
}

/// Raises a line segment to an equivalent quadratic Bézier curve.
#[inline]
#[must_use]
pub fn line_to_quadratic(a: Point2, b: Point2) -> (Point2, Point2, Point2) {
    (a, lerp(a, b, 0.5), b)
}

/// Raises a line segment to an equivalent cubic Bézier curve.
#[inline]
#[must_use]
pub fn line_to_cubic(a: Point2, b: Point2) -> (Point2, Point2, Point2, Point2) {
    (a, lerp(a, b, ONE_THIRD), lerp(a, b, TWO_THIRDS), b)
}

/// Raises a quadratic Bézier curve to an equivalent cubic Bézier curve.
///
/// The cubic handles sit two thirds of the way from each anchor to the
/// quadratic handle, so evaluation via [`cerp`] matches [`qerp`] on the
/// original triple at every `t`.
#[inline]
#[must_use]
pub fn quadratic_to_cubic(a: Point2, b: Point2, c: Point2) -> (Point2, Point2, Point2, Point2) {
    (
        a,
        Point2::new(a.x + TWO_THIRDS * (b.x - a.x), a.y + TWO_THIRDS * (b.y - a.y)),
        Point2::new(c.x + TWO_THIRDS * (b.x - c.x), c.y + TWO_THIRDS * (b.y - c.y)),
        c,
    )
}
