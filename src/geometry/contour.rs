use crate::error::{GeometryError, Result};
use crate::math::{Point2, Vector2};

/// One closed polygonal outline.
///
/// Points form a loop; the last point implicitly connects back to the
/// first. A contour with fewer than three points is degenerate but legal:
/// zero points is empty geometry, one point is a point-shape, two points
/// is an open segment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Contour {
    points: Vec<Point2>,
}

impl Contour {
    /// Creates an empty contour.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a contour from an ordered point sequence.
    #[must_use]
    pub fn from_points(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// Returns the points as a slice.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the point at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn point(&self, index: usize) -> Result<Point2> {
        self.points
            .get(index)
            .copied()
            .ok_or_else(|| self.index_error(index).into())
    }

    /// Replaces the point at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn set_point(&mut self, index: usize, point: Point2) -> Result<()> {
        let len = self.points.len();
        match self.points.get_mut(index) {
            Some(slot) => {
                *slot = point;
                Ok(())
            }
            None => Err(GeometryError::IndexOutOfRange { index, len }.into()),
        }
    }

    /// Appends a point to the loop.
    pub fn push(&mut self, point: Point2) {
        self.points.push(point);
    }

    /// Inserts a point before `index`; `index == len` appends.
    ///
    /// # Errors
    ///
    /// Returns an error if `index > len`.
    pub fn insert(&mut self, index: usize, point: Point2) -> Result<()> {
        if index > self.points.len() {
            return Err(self.index_error(index).into());
        }
        self.points.insert(index, point);
        Ok(())
    }

    /// Removes and returns the point at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn remove(&mut self, index: usize) -> Result<Point2> {
        if index >= self.points.len() {
            return Err(self.index_error(index).into());
        }
        Ok(self.points.remove(index))
    }

    /// Removes the first point that compares exactly equal to `point`.
    /// Returns whether a point was removed.
    pub fn remove_value(&mut self, point: Point2) -> bool {
        match self.points.iter().position(|p| *p == point) {
            Some(index) => {
                self.points.remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes all points.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Reverses the winding order in place.
    pub fn reverse(&mut self) {
        self.points.reverse();
    }

    /// Returns a copy of this contour translated by `delta`.
    #[must_use]
    pub fn translate(&self, delta: Vector2) -> Self {
        Self {
            points: self.points.iter().map(|p| p + delta).collect(),
        }
    }

    /// Whether `point` is one of the contour's vertices (exact equality).
    #[must_use]
    pub fn includes(&self, point: Point2) -> bool {
        self.points.contains(&point)
    }

    /// Iterates over the points in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point2> {
        self.points.iter()
    }

    /// Parses a whitespace/comma separated coordinate list, e.g.
    /// `"0,0 10,0 10,10 0,10"`. A minus sign also acts as a separator,
    /// matching SVG polygon shorthand like `"0,0 10,0 10-10"`.
    ///
    /// # Errors
    ///
    /// Returns an error if a token is not a number or the coordinate count
    /// is odd.
    pub fn parse_path_def(path_def: &str) -> Result<Self> {
        let mut values = Vec::new();
        let mut token = String::new();

        let flush = |token: &mut String, values: &mut Vec<f32>| -> Result<()> {
            if token.is_empty() {
                return Ok(());
            }
            let value = token
                .parse::<f32>()
                .map_err(|_| GeometryError::InvalidPathDef(format!("bad number {token:?}")))?;
            values.push(value);
            token.clear();
            Ok(())
        };

        for ch in path_def.chars() {
            if ch.is_whitespace() || ch == ',' {
                flush(&mut token, &mut values)?;
            } else if ch == '-' {
                flush(&mut token, &mut values)?;
                token.push(ch);
            } else {
                token.push(ch);
            }
        }
        flush(&mut token, &mut values)?;

        if values.len() % 2 != 0 {
            return Err(GeometryError::InvalidPathDef(
                "coordinates must come in pairs".to_owned(),
            )
            .into());
        }

        let points = values
            .chunks_exact(2)
            .map(|pair| Point2::new(pair[0], pair[1]))
            .collect();
        Ok(Self { points })
    }

    /// Formats the contour as a coordinate list accepted by
    /// [`Contour::parse_path_def`].
    #[must_use]
    pub fn to_path_def(&self) -> String {
        let joined = self
            .points
            .iter()
            .map(|p| format!("{},{}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");
        // A minus sign is a valid separator, so the comma before a negative
        // ordinate is redundant.
        joined.replace(",-", "-")
    }

    fn index_error(&self, index: usize) -> GeometryError {
        GeometryError::IndexOutOfRange {
            index,
            len: self.points.len(),
        }
    }
}

impl From<Vec<Point2>> for Contour {
    fn from(points: Vec<Point2>) -> Self {
        Self { points }
    }
}

impl<'a> IntoIterator for &'a Contour {
    type Item = &'a Point2;
    type IntoIter = std::slice::Iter<'a, Point2>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
