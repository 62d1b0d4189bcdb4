//! Length stored at nanometer precision
//!
//! A [`Distance`] is a single `i64` count of nanometers. Every unit given at
//! construction or requested at read time is converted through the scale table
//! on [`DistanceUnit`], so comparisons and additions are exact integer
//! operations no matter which unit the operands came from.
//!
//! # Conversion policy
//! - Construction multiplies by nanometers-per-unit and truncates toward zero.
//!   Fractional nanometers are discarded, never rounded.
//! - Reading multiplies the stored count by the precomputed units-per-nanometer
//!   reciprocal instead of dividing by the forward factor.
//! - A float that does not fit in `i64` saturates: NaN becomes 0, overflow
//!   clamps to `i64::MIN`/`i64::MAX`. Use [`Distance::try_new`],
//!   [`Distance::try_mul`] or [`Distance::try_div`] to reject such inputs.
//!
//! # Precision boundary
//! Scaling goes through `f64`, which carries 53 significant bits. Counts above
//! 2^53 nm (about 9007 km) lose their low-order nanometers when multiplied or
//! divided by a scale.
//!
//! # Usage
//! ```
//! use geometry_core::{Distance, DistanceUnit};
//!
//! let trail = Distance::new(2038.0, DistanceUnit::Kilometer);
//! let detour = Distance::from_meters(2_038_000.0);
//! assert_eq!((trail + detour).value(DistanceUnit::Kilometer), 4076.0);
//! assert_eq!(Distance::new(1.0, DistanceUnit::Kilometer), Distance::from_meters(1000.0));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};

use super::error::{ensure_finite, ensure_nonzero, DomainError};

/// 2^63, the first magnitude an `f64` cannot truncate into an `i64`
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Unit of a length value.
///
/// Declaration order is not magnitude order. Use
/// [`DistanceUnit::nanometers_per_unit`] when magnitude matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum DistanceUnit {
    Kilometer = 0,
    #[default]
    Meter = 1,
    Centimeter = 2,
    Millimeter = 3,
    Micrometer = 4,
    Nanometer = 5,
}

impl DistanceUnit {
    /// Every unit, in declaration order
    pub const ALL: [DistanceUnit; 6] = [
        DistanceUnit::Kilometer,
        DistanceUnit::Meter,
        DistanceUnit::Centimeter,
        DistanceUnit::Millimeter,
        DistanceUnit::Micrometer,
        DistanceUnit::Nanometer,
    ];

    const KILOMETER_SCALE: f64 = 1.0e12;
    const METER_SCALE: f64 = 1.0e9;
    const CENTIMETER_SCALE: f64 = 1.0e7;
    const MILLIMETER_SCALE: f64 = 1.0e6;
    const MICROMETER_SCALE: f64 = 1.0e3;
    const NANOMETER_SCALE: f64 = 1.0;

    // Reciprocals are derived by division once, at compile time
    const KILOMETER_RECIPROCAL: f64 = 1.0 / Self::KILOMETER_SCALE;
    const METER_RECIPROCAL: f64 = 1.0 / Self::METER_SCALE;
    const CENTIMETER_RECIPROCAL: f64 = 1.0 / Self::CENTIMETER_SCALE;
    const MILLIMETER_RECIPROCAL: f64 = 1.0 / Self::MILLIMETER_SCALE;
    const MICROMETER_RECIPROCAL: f64 = 1.0 / Self::MICROMETER_SCALE;
    const NANOMETER_RECIPROCAL: f64 = 1.0 / Self::NANOMETER_SCALE;

    /// Number of nanometers in one of this unit
    #[inline]
    #[must_use]
    pub fn nanometers_per_unit(self) -> f64 {
        match self {
            DistanceUnit::Kilometer => Self::KILOMETER_SCALE,
            DistanceUnit::Meter => Self::METER_SCALE,
            DistanceUnit::Centimeter => Self::CENTIMETER_SCALE,
            DistanceUnit::Millimeter => Self::MILLIMETER_SCALE,
            DistanceUnit::Micrometer => Self::MICROMETER_SCALE,
            DistanceUnit::Nanometer => Self::NANOMETER_SCALE,
        }
    }

    /// Number of this unit in one nanometer (reciprocal of [`Self::nanometers_per_unit`])
    #[inline]
    #[must_use]
    pub fn units_per_nanometer(self) -> f64 {
        match self {
            DistanceUnit::Kilometer => Self::KILOMETER_RECIPROCAL,
            DistanceUnit::Meter => Self::METER_RECIPROCAL,
            DistanceUnit::Centimeter => Self::CENTIMETER_RECIPROCAL,
            DistanceUnit::Millimeter => Self::MILLIMETER_RECIPROCAL,
            DistanceUnit::Micrometer => Self::MICROMETER_RECIPROCAL,
            DistanceUnit::Nanometer => Self::NANOMETER_RECIPROCAL,
        }
    }

    /// Short symbol, ASCII only
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            DistanceUnit::Kilometer => "km",
            DistanceUnit::Meter => "m",
            DistanceUnit::Centimeter => "cm",
            DistanceUnit::Millimeter => "mm",
            DistanceUnit::Micrometer => "um",
            DistanceUnit::Nanometer => "nm",
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// True when `scaled` truncates to a value inside the `i64` range. NaN fails.
#[inline]
fn fits_in_nanometers(scaled: f64) -> bool {
    (-I64_LIMIT..I64_LIMIT).contains(&scaled)
}

/// Scale `value` to nanometers, truncating toward zero and saturating.
fn to_nanometers(value: f64, unit: DistanceUnit) -> i64 {
    let scaled = value * unit.nanometers_per_unit();
    if !fits_in_nanometers(scaled) {
        tracing::debug!(value, %unit, "distance saturated at the nanometer range");
    }
    scaled as i64
}

/// Truncate an already scaled count, rejecting anything that does not fit,
/// including an overflow to an infinity. `value` and `unit` describe the input
/// for the error.
fn checked_truncate(scaled: f64, value: f64, unit: DistanceUnit) -> Result<i64, DomainError> {
    if fits_in_nanometers(scaled) {
        Ok(scaled as i64)
    } else {
        tracing::debug!(value, %unit, "rejected distance outside the nanometer range");
        Err(DomainError::OutOfRange { value, unit })
    }
}

/// Scale `value` to nanometers, rejecting anything the saturating path would clamp.
fn try_to_nanometers(value: f64, unit: DistanceUnit) -> Result<i64, DomainError> {
    let value = ensure_finite("value", value)?;
    checked_truncate(value * unit.nanometers_per_unit(), value, unit)
}

/// A length with nanometer resolution
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[repr(transparent)]
pub struct Distance(i64);

impl Distance {
    /// Zero length
    pub const ZERO: Distance = Distance(0);

    /// Create a distance of `value` in `unit`, truncating toward zero.
    ///
    /// NaN maps to zero and out-of-range values saturate at the `i64`
    /// nanometer bounds.
    #[inline]
    #[must_use]
    pub fn new(value: f64, unit: DistanceUnit) -> Self {
        Distance(to_nanometers(value, unit))
    }

    /// Create a distance in meters, the default unit
    #[inline]
    #[must_use]
    pub fn from_meters(value: f64) -> Self {
        Self::new(value, DistanceUnit::Meter)
    }

    /// Create a distance from an exact nanometer count
    #[inline]
    #[must_use]
    pub const fn from_nanometers(nanometers: i64) -> Self {
        Distance(nanometers)
    }

    /// Create a distance, rejecting non-finite or unrepresentable values.
    ///
    /// # Errors
    /// - [`DomainError::NonFinite`] if `value` is NaN or infinite
    /// - [`DomainError::OutOfRange`] if the nanometer count does not fit in `i64`
    pub fn try_new(value: f64, unit: DistanceUnit) -> Result<Self, DomainError> {
        try_to_nanometers(value, unit).map(Distance)
    }

    /// Value expressed in `unit`
    #[inline]
    #[must_use]
    pub fn value(self, unit: DistanceUnit) -> f64 {
        self.0 as f64 * unit.units_per_nanometer()
    }

    /// Value expressed in meters
    #[inline]
    #[must_use]
    pub fn meters(self) -> f64 {
        self.value(DistanceUnit::Meter)
    }

    /// Raw nanometer count
    #[inline]
    #[must_use]
    pub const fn nanometers(self) -> i64 {
        self.0
    }

    /// Overwrite with `value` in `unit`, using the same conversion as [`Distance::new`]
    #[inline]
    pub fn set_value(&mut self, value: f64, unit: DistanceUnit) {
        self.0 = to_nanometers(value, unit);
    }

    /// Overwrite with `value` in meters
    #[inline]
    pub fn set_meters(&mut self, value: f64) {
        self.set_value(value, DistanceUnit::Meter);
    }

    /// Multiply by `scale`, rejecting inputs the `*` operator would saturate.
    ///
    /// # Errors
    /// - [`DomainError::NonFinite`] if `scale` is NaN or infinite
    /// - [`DomainError::OutOfRange`] if the product does not fit in `i64` nanometers
    pub fn try_mul(self, scale: f64) -> Result<Self, DomainError> {
        let scale = ensure_finite("scale", scale)?;
        let product = self.0 as f64 * scale;
        checked_truncate(product, product, DistanceUnit::Nanometer).map(Distance)
    }

    /// Divide by `scale`, rejecting zero and inputs the `/` operator would saturate.
    ///
    /// # Errors
    /// - [`DomainError::NonFinite`] if `scale` is NaN or infinite
    /// - [`DomainError::ZeroDivisor`] if `scale` is zero
    /// - [`DomainError::OutOfRange`] if the quotient does not fit in `i64` nanometers
    pub fn try_div(self, scale: f64) -> Result<Self, DomainError> {
        let scale = ensure_nonzero(ensure_finite("scale", scale)?)?;
        let quotient = self.0 as f64 / scale;
        checked_truncate(quotient, quotient, DistanceUnit::Nanometer).map(Distance)
    }
}

impl Add for Distance {
    type Output = Distance;
    fn add(self, rhs: Distance) -> Distance {
        Distance(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Distance {
    type Output = Distance;
    fn sub(self, rhs: Distance) -> Distance {
        Distance(self.0.saturating_sub(rhs.0))
    }
}

impl AddAssign for Distance {
    fn add_assign(&mut self, rhs: Distance) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl SubAssign for Distance {
    fn sub_assign(&mut self, rhs: Distance) {
        self.0 = self.0.saturating_sub(rhs.0);
    }
}

impl Mul<f64> for Distance {
    type Output = Distance;
    fn mul(self, rhs: f64) -> Distance {
        Distance::new(self.0 as f64 * rhs, DistanceUnit::Nanometer)
    }
}

impl Div<f64> for Distance {
    type Output = Distance;
    fn div(self, rhs: f64) -> Distance {
        Distance::new(self.0 as f64 / rhs, DistanceUnit::Nanometer)
    }
}

impl Sum for Distance {
    fn sum<I: Iterator<Item = Distance>>(iter: I) -> Distance {
        iter.fold(Distance::ZERO, Add::add)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.9} m", self.meters())
    }
}
