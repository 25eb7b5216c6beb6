use super::Point2;

/// An axis-aligned bounding rectangle.
///
/// `width` and `height` are always non-negative; positive infinity is a
/// valid extent and is dominant under [`Bounds::union`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    /// Creates bounds from an origin and extents.
    #[must_use]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Creates bounds from left/top/right/bottom edges.
    #[must_use]
    pub fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            x: left,
            y: top,
            width: right - left,
            height: bottom - top,
        }
    }

    /// Computes the bounding rectangle of a point set in a single pass.
    ///
    /// Returns `None` for an empty set so that callers folding with
    /// [`Bounds::union`] never see a spurious rectangle at the origin.
    #[must_use]
    pub fn from_points(points: &[Point2]) -> Option<Self> {
        let first = points.first()?;
        let mut left = first.x;
        let mut top = first.y;
        let mut right = first.x;
        let mut bottom = first.y;

        for point in points {
            left = left.min(point.x);
            top = top.min(point.y);
            right = right.max(point.x);
            bottom = bottom.max(point.y);
        }

        Some(Self::from_ltrb(left, top, right, bottom))
    }

    #[must_use]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[must_use]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Whether either extent is zero, which would divide by zero when
    /// normalizing a point against these bounds.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }

    /// Returns the smallest rectangle containing both `self` and `other`.
    ///
    /// Infinite extents stay infinite instead of degrading to NaN, and
    /// rounding can never drive an extent below zero.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let left = self.left().min(other.left());
        let top = self.top().min(other.top());

        let width = if self.width.is_infinite() || other.width.is_infinite() {
            f32::INFINITY
        } else {
            let max_right = self.right().max(other.right());
            (max_right - left).max(0.0)
        };

        let height = if self.height.is_infinite() || other.height.is_infinite() {
            f32::INFINITY
        } else {
            let max_bottom = self.bottom().max(other.bottom());
            (max_bottom - top).max(0.0)
        };

        Self::new(left, top, width, height)
    }
}
