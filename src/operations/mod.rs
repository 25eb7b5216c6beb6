pub mod bounds;
pub mod contains;
pub mod distort;

pub use bounds::{contour_bounds, geometry_bounds, group_bounds, shape_bounds};
pub use contains::{
    contour_contains_point, contours_contain_point, shape_contains_point, Inclusion,
    DEFAULT_EPSILON,
};
pub use distort::{distort, distort_contour, distort_group, distort_shape};
