use crate::error::{GeometryError, Result};
use crate::math::{Point2, Vector2};

use super::Contour;

/// One logical object built from one or more contours.
///
/// Additional contours either punch holes in the outer outline or add
/// independent sub-parts; which of the two a contour is falls out of the
/// even-odd containment rule, not any stored flag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shape {
    contours: Vec<Contour>,
}

impl Shape {
    /// Creates an empty shape.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a shape from an ordered contour sequence.
    #[must_use]
    pub fn from_contours(contours: Vec<Contour>) -> Self {
        Self { contours }
    }

    /// Returns the contours as a slice.
    #[must_use]
    pub fn contours(&self) -> &[Contour] {
        &self.contours
    }

    /// Returns the number of contours.
    #[must_use]
    pub fn len(&self) -> usize {
        self.contours.len()
    }

    /// Whether the shape contains no points in any contour.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contours.iter().all(Contour::is_empty)
    }

    /// Returns the contour at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn contour(&self, index: usize) -> Result<&Contour> {
        self.contours
            .get(index)
            .ok_or_else(|| self.index_error(index).into())
    }

    /// Returns the contour at `index` mutably.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn contour_mut(&mut self, index: usize) -> Result<&mut Contour> {
        let len = self.contours.len();
        self.contours
            .get_mut(index)
            .ok_or_else(|| GeometryError::IndexOutOfRange { index, len }.into())
    }

    /// Appends a contour.
    pub fn push(&mut self, contour: Contour) {
        self.contours.push(contour);
    }

    /// Inserts a contour before `index`; `index == len` appends.
    ///
    /// # Errors
    ///
    /// Returns an error if `index > len`.
    pub fn insert(&mut self, index: usize, contour: Contour) -> Result<()> {
        if index > self.contours.len() {
            return Err(self.index_error(index).into());
        }
        self.contours.insert(index, contour);
        Ok(())
    }

    /// Removes and returns the contour at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn remove(&mut self, index: usize) -> Result<Contour> {
        if index >= self.contours.len() {
            return Err(self.index_error(index).into());
        }
        Ok(self.contours.remove(index))
    }

    /// Removes the first exact match of `point` from every contour.
    /// Returns whether any point was removed.
    pub fn remove_value(&mut self, point: Point2) -> bool {
        let mut removed = false;
        for contour in &mut self.contours {
            removed |= contour.remove_value(point);
        }
        removed
    }

    /// Recursively empties the shape.
    pub fn clear(&mut self) {
        for contour in &mut self.contours {
            contour.clear();
        }
        self.contours.clear();
    }

    /// Reverses the contour order and each contour's winding.
    pub fn reverse(&mut self) {
        for contour in &mut self.contours {
            contour.reverse();
        }
        self.contours.reverse();
    }

    /// Returns a copy of this shape translated by `delta`.
    #[must_use]
    pub fn translate(&self, delta: Vector2) -> Self {
        Self {
            contours: self.contours.iter().map(|c| c.translate(delta)).collect(),
        }
    }

    /// Iterates over the contours in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Contour> {
        self.contours.iter()
    }

    fn index_error(&self, index: usize) -> GeometryError {
        GeometryError::IndexOutOfRange {
            index,
            len: self.contours.len(),
        }
    }
}

impl From<Contour> for Shape {
    fn from(contour: Contour) -> Self {
        Self {
            contours: vec![contour],
        }
    }
}

impl<'a> IntoIterator for &'a Shape {
    type Item = &'a Contour;
    type IntoIter = std::slice::Iter<'a, Contour>;

    fn into_iter(self) -> Self::IntoIter {
        self.contours.iter()
    }
}
