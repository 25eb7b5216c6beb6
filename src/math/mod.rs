pub mod bounds;
pub mod distance_2d;
pub mod interpolate;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f32>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f32>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f32 = 1e-5;
