use crate::error::{GeometryError, Result};
use crate::math::{Point2, Vector2};

use super::Geometry;

/// An ordered, recursively nested collection of shapes, contours, and
/// other groups. The unit of warping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Group {
    nodes: Vec<Geometry>,
}

impl Group {
    /// Creates an empty group.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a group from an ordered node sequence.
    #[must_use]
    pub fn from_nodes(nodes: Vec<Geometry>) -> Self {
        Self { nodes }
    }

    /// Returns the child nodes as a slice.
    #[must_use]
    pub fn nodes(&self) -> &[Geometry] {
        &self.nodes
    }

    /// Returns the number of direct children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no child holds any points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.iter().all(Geometry::is_empty)
    }

    /// Returns the node at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn node(&self, index: usize) -> Result<&Geometry> {
        self.nodes
            .get(index)
            .ok_or_else(|| self.index_error(index).into())
    }

    /// Returns the node at `index` mutably.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn node_mut(&mut self, index: usize) -> Result<&mut Geometry> {
        let len = self.nodes.len();
        self.nodes
            .get_mut(index)
            .ok_or_else(|| GeometryError::IndexOutOfRange { index, len }.into())
    }

    /// Appends a group, shape, or contour.
    pub fn push(&mut self, node: impl Into<Geometry>) {
        self.nodes.push(node.into());
    }

    /// Inserts a node before `index`; `index == len` appends.
    ///
    /// # Errors
    ///
    /// Returns an error if `index > len`.
    pub fn insert(&mut self, index: usize, node: impl Into<Geometry>) -> Result<()> {
        if index > self.nodes.len() {
            return Err(self.index_error(index).into());
        }
        self.nodes.insert(index, node.into());
        Ok(())
    }

    /// Removes and returns the node at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn remove(&mut self, index: usize) -> Result<Geometry> {
        if index >= self.nodes.len() {
            return Err(self.index_error(index).into());
        }
        Ok(self.nodes.remove(index))
    }

    /// Removes the first exact match of `point` from every contour in the
    /// tree. Returns whether any point was removed.
    pub fn remove_value(&mut self, point: Point2) -> bool {
        let mut removed = false;
        for node in &mut self.nodes {
            removed |= match node {
                Geometry::Group(group) => group.remove_value(point),
                Geometry::Shape(shape) => shape.remove_value(point),
                Geometry::Contour(contour) => contour.remove_value(point),
            };
        }
        removed
    }

    /// Recursively empties the group.
    pub fn clear(&mut self) {
        for node in &mut self.nodes {
            node.clear();
        }
        self.nodes.clear();
    }

    /// Reverses the child order.
    pub fn reverse(&mut self) {
        self.nodes.reverse();
    }

    /// Returns a copy of this group translated by `delta`.
    #[must_use]
    pub fn translate(&self, delta: Vector2) -> Self {
        Self {
            nodes: self.nodes.iter().map(|n| n.translate(delta)).collect(),
        }
    }

    /// Iterates over the direct children in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Geometry> {
        self.nodes.iter()
    }

    fn index_error(&self, index: usize) -> GeometryError {
        GeometryError::IndexOutOfRange {
            index,
            len: self.nodes.len(),
        }
    }
}

impl<'a> IntoIterator for &'a Group {
    type Item = &'a Geometry;
    type IntoIter = std::slice::Iter<'a, Geometry>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
