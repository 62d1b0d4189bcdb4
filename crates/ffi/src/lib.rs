//! C ABI for the geometry value types
//!
//! Distances cross the boundary as raw `int64_t` nanometer counts and points as
//! `GeometryPoint2D` structs. Fallible functions return a `GeometryErrorCode`,
//! write their result through an out pointer, and record a message readable via
//! `geometry_get_last_error()` (thread-local, cleared on success).
//!
//! The C header `GeometryFFI.h` is generated by `cbindgen` at build time.

pub mod distance;
pub mod error;
mod helpers;
pub mod point;

pub use distance::GeometryDistanceUnit;
pub use error::GeometryErrorCode;
pub use point::GeometryPoint2D;
