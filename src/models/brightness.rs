//! Linear conversion between the relative (0-100) brightness scale used by
//! openHAB dimmer items and the absolute (0-255) scale used by zigbee lights.
//!
//! The conversions truncate toward negative infinity and do not validate
//! their input. Callers clamp at the boundary with [`clamp_relative`] and
//! [`clamp_absolute`].

pub const RELATIVE_MAX: i64 = 100;
pub const ABSOLUTE_MAX: i64 = 255;

/// Relative levels at or below this percentage are reported as `OFF`.
pub const OFF_THRESHOLD: i64 = 5;

pub fn relative_to_absolute(rel: i64) -> i64 {
    (rel as f64 / 100.0 * 255.0).floor() as i64
}

pub fn absolute_to_relative(abs: i64) -> i64 {
    (abs as f64 / 255.0 * 100.0).floor() as i64
}

pub fn clamp_relative(rel: i64) -> i64 {
    rel.clamp(0, RELATIVE_MAX)
}

pub fn clamp_absolute(abs: i64) -> i64 {
    abs.clamp(0, ABSOLUTE_MAX)
}
