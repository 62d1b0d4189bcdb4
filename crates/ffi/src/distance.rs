use geometry_core::{Distance, DistanceUnit};

use crate::error::{DefaultGeometryError, GeometryErrorCode};
use crate::helpers::write_result;

/// Length unit, mirrors `geometry_core::DistanceUnit` discriminant for discriminant.
///
/// Declaration order is not magnitude order.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryDistanceUnit {
    Kilometer = 0,
    Meter = 1,
    Centimeter = 2,
    Millimeter = 3,
    Micrometer = 4,
    Nanometer = 5,
}

impl From<GeometryDistanceUnit> for DistanceUnit {
    fn from(unit: GeometryDistanceUnit) -> Self {
        match unit {
            GeometryDistanceUnit::Kilometer => DistanceUnit::Kilometer,
            GeometryDistanceUnit::Meter => DistanceUnit::Meter,
            GeometryDistanceUnit::Centimeter => DistanceUnit::Centimeter,
            GeometryDistanceUnit::Millimeter => DistanceUnit::Millimeter,
            GeometryDistanceUnit::Micrometer => DistanceUnit::Micrometer,
            GeometryDistanceUnit::Nanometer => DistanceUnit::Nanometer,
        }
    }
}

/// Convert `value` in `unit` to a nanometer count, truncating toward zero.
///
/// # Returns
/// - `Ok` with `out_nanometers` set
/// - `NonFinite` if `value` is NaN or infinite
/// - `OutOfRange` if the count does not fit in `int64_t`
/// - `NullPointer` if `out_nanometers` is null
///
/// # Safety
/// `out_nanometers` must be null or valid for writes. `unit` must be a valid
/// `GeometryDistanceUnit` discriminant.
#[no_mangle]
pub unsafe extern "C" fn geometry_distance_new(
    value: f64,
    unit: GeometryDistanceUnit,
    out_nanometers: *mut i64,
) -> GeometryErrorCode {
    let result = Distance::try_new(value, unit.into())
        .map(Distance::nanometers)
        .map_err(DefaultGeometryError::from);
    unsafe { write_result(out_nanometers, "out_nanometers", result) }
}

/// Read a nanometer count back in `unit`.
///
/// # Safety
/// `unit` must be a valid `GeometryDistanceUnit` discriminant (0 to 5). Any
/// other value is undefined behavior.
#[no_mangle]
pub unsafe extern "C" fn geometry_distance_value(
    nanometers: i64,
    unit: GeometryDistanceUnit,
) -> f64 {
    Distance::from_nanometers(nanometers).value(unit.into())
}

/// Sum of two nanometer counts, saturating at the `int64_t` bounds.
#[no_mangle]
pub extern "C" fn geometry_distance_add(lhs: i64, rhs: i64) -> i64 {
    (Distance::from_nanometers(lhs) + Distance::from_nanometers(rhs)).nanometers()
}

/// Difference of two nanometer counts, saturating at the `int64_t` bounds.
#[no_mangle]
pub extern "C" fn geometry_distance_sub(lhs: i64, rhs: i64) -> i64 {
    (Distance::from_nanometers(lhs) - Distance::from_nanometers(rhs)).nanometers()
}

/// Multiply a nanometer count by `scale`, truncating toward zero.
///
/// # Returns
/// - `Ok` with `out_nanometers` set
/// - `NonFinite` if `scale` is NaN or infinite
/// - `OutOfRange` if the product does not fit in `int64_t`
/// - `NullPointer` if `out_nanometers` is null
///
/// # Safety
/// `out_nanometers` must be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn geometry_distance_scale(
    nanometers: i64,
    scale: f64,
    out_nanometers: *mut i64,
) -> GeometryErrorCode {
    let result = Distance::from_nanometers(nanometers)
        .try_mul(scale)
        .map(Distance::nanometers)
        .map_err(DefaultGeometryError::from);
    unsafe { write_result(out_nanometers, "out_nanometers", result) }
}

/// Divide a nanometer count by `scale`, truncating toward zero.
///
/// # Returns
/// - `Ok` with `out_nanometers` set
/// - `NonFinite` if `scale` is NaN or infinite
/// - `ZeroDivisor` if `scale` is zero
/// - `OutOfRange` if the quotient does not fit in `int64_t`
/// - `NullPointer` if `out_nanometers` is null
///
/// # Safety
/// `out_nanometers` must be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn geometry_distance_divide(
    nanometers: i64,
    scale: f64,
    out_nanometers: *mut i64,
) -> GeometryErrorCode {
    let result = Distance::from_nanometers(nanometers)
        .try_div(scale)
        .map(Distance::nanometers)
        .map_err(DefaultGeometryError::from);
    unsafe { write_result(out_nanometers, "out_nanometers", result) }
}
