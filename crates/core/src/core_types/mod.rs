//! Core value types

pub mod distance;
pub mod error;
pub mod point2d;

pub use distance::{Distance, DistanceUnit};
pub use error::DomainError;
pub use point2d::Point2D;
