//! Units of measure for calibration constants
//!
//! All distances in this crate are meters. Kilometers only appear as
//! multiples of [`METERS`] so that no caller ever sees a second unit.

/// One meter, the base distance unit.
pub const METERS: f64 = 1.0;

/// One kilometer expressed in meters.
pub const KM: f64 = METERS * 1000.0;

/// One meter for single-precision fields (GPS accuracy).
pub const METERS_F32: f32 = 1.0;
