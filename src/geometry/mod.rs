pub mod contour;
pub mod group;
pub mod shape;

pub use contour::Contour;
pub use group::Group;
pub use shape::Shape;

use crate::math::Vector2;

/// A node of the shape tree.
///
/// Groups nest recursively; shapes and contours are the leaves the
/// distortion engine ultimately resamples.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Group(Group),
    Shape(Shape),
    Contour(Contour),
}

impl Geometry {
    /// Whether this node contains no points anywhere beneath it.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Group(group) => group.is_empty(),
            Self::Shape(shape) => shape.is_empty(),
            Self::Contour(contour) => contour.is_empty(),
        }
    }

    /// Recursively empties this node.
    pub fn clear(&mut self) {
        match self {
            Self::Group(group) => group.clear(),
            Self::Shape(shape) => shape.clear(),
            Self::Contour(contour) => contour.clear(),
        }
    }

    /// Returns a translated copy of this node.
    #[must_use]
    pub fn translate(&self, delta: Vector2) -> Self {
        match self {
            Self::Group(group) => Self::Group(group.translate(delta)),
            Self::Shape(shape) => Self::Shape(shape.translate(delta)),
            Self::Contour(contour) => Self::Contour(contour.translate(delta)),
        }
    }
}

impl From<Group> for Geometry {
    fn from(group: Group) -> Self {
        Self::Group(group)
    }
}

impl From<Shape> for Geometry {
    fn from(shape: Shape) -> Self {
        Self::Shape(shape)
    }
}

impl From<Contour> for Geometry {
    fn from(contour: Contour) -> Self {
        Self::Contour(contour)
    }
}
