//! Geometry Core Library
//!
//! Two independent, side-effect free value types:
//! - [`Distance`]: a length stored as an integer count of nanometers, readable
//!   and writable in six metric units ([`DistanceUnit`])
//! - [`Point2D`]: a planar `f64` coordinate with componentwise arithmetic and
//!   Euclidean distance
//!
//! ## Error policy
//!
//! Operators and plain constructors never fail. Float inputs follow IEEE-754,
//! and a float that cannot become an `i64` nanometer count saturates (NaN
//! becomes zero). The `try_*` constructors and scaling methods return
//! [`DomainError`] for those inputs instead.
//!
//! ## Logging
//!
//! Saturated and rejected inputs are reported through `tracing` at `debug`
//! level. The library never installs a subscriber.
//!
//! ## Features
//!
//! - `nalgebra` (default): `From` conversions between [`Point2D`] and
//!   `nalgebra::Point2<f64>` / `nalgebra::Vector2<f64>`

// Core value types
pub mod core_types;

// Re-export core types
pub use core_types::{Distance, DistanceUnit, DomainError, Point2D};
