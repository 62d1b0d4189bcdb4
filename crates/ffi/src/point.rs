use geometry_core::Point2D;

use crate::error::{DefaultGeometryError, GeometryErrorCode};
use crate::helpers::write_result;

/// C-compatible 2D point
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeometryPoint2D {
    pub x: f64,
    pub y: f64,
}

impl From<Point2D> for GeometryPoint2D {
    fn from(p: Point2D) -> Self {
        GeometryPoint2D { x: p.x(), y: p.y() }
    }
}

impl From<GeometryPoint2D> for Point2D {
    fn from(p: GeometryPoint2D) -> Self {
        Point2D::new(p.x, p.y)
    }
}

/// Build a point, rejecting NaN or infinite coordinates.
///
/// # Returns
/// - `Ok` with `out_point` set
/// - `NonFinite` if either coordinate is NaN or infinite
/// - `NullPointer` if `out_point` is null
///
/// # Safety
/// `out_point` must be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn geometry_point_new(
    x: f64,
    y: f64,
    out_point: *mut GeometryPoint2D,
) -> GeometryErrorCode {
    let result = Point2D::try_new(x, y)
        .map(GeometryPoint2D::from)
        .map_err(DefaultGeometryError::from);
    unsafe { write_result(out_point, "out_point", result) }
}

/// Euclidean distance between two points.
#[no_mangle]
pub extern "C" fn geometry_point_distance(lhs: GeometryPoint2D, rhs: GeometryPoint2D) -> f64 {
    Point2D::distance_between(&lhs.into(), &rhs.into())
}

#[no_mangle]
pub extern "C" fn geometry_point_add(lhs: GeometryPoint2D, rhs: GeometryPoint2D) -> GeometryPoint2D {
    (Point2D::from(lhs) + Point2D::from(rhs)).into()
}

#[no_mangle]
pub extern "C" fn geometry_point_sub(lhs: GeometryPoint2D, rhs: GeometryPoint2D) -> GeometryPoint2D {
    (Point2D::from(lhs) - Point2D::from(rhs)).into()
}

/// Multiply both coordinates by `scalar`. IEEE-754 semantics, never fails.
#[no_mangle]
pub extern "C" fn geometry_point_scale(point: GeometryPoint2D, scalar: f64) -> GeometryPoint2D {
    (Point2D::from(point) * scalar).into()
}

/// Divide both coordinates by `scalar`.
///
/// # Returns
/// - `Ok` with `out_point` set
/// - `NonFinite` if `scalar` is NaN or infinite
/// - `ZeroDivisor` if `scalar` is zero
/// - `NullPointer` if `out_point` is null
///
/// # Safety
/// `out_point` must be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn geometry_point_divide(
    point: GeometryPoint2D,
    scalar: f64,
    out_point: *mut GeometryPoint2D,
) -> GeometryErrorCode {
    let result = Point2D::from(point)
        .try_div(scalar)
        .map(GeometryPoint2D::from)
        .map_err(DefaultGeometryError::from);
    unsafe { write_result(out_point, "out_point", result) }
}
