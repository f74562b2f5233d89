//! Ahargana: elapsed days since the Kali Yuga epoch.
//!
//! The master time variable of the pipeline. Integer at midnight of the
//! calendar date; an optional time-of-day fraction can be added for
//! sub-day precision.

use crate::error::TimeError;
use crate::julian::jdn_from_date;

/// JDN of the Kali Yuga epoch: proleptic Julian -3101-02-18
/// (3102 BCE, astronomical year numbering).
pub const KALI_YUGA_EPOCH_JDN: i64 = 588_466;

/// Upper bound of the supported window (inclusive year).
pub const MAX_SUPPORTED_YEAR: i32 = 3000;

/// Civil days in one Mahayuga; duplicated from the constant tables to
/// keep this crate dependency-free.
const CIVIL_DAYS_IN_MAHAYUGA: f64 = 1_577_917_500.0;

/// Ahargana (elapsed days since the Kali Yuga epoch) for a
/// proleptic-Julian calendar date at midnight.
///
/// Fails with [`TimeError::DateOutOfRange`] for dates before the epoch or
/// after year 3000, and [`TimeError::InvalidDate`] for malformed dates.
pub fn ahargana(year: i32, month: u32, day: u32) -> Result<f64, TimeError> {
    if year > MAX_SUPPORTED_YEAR {
        return Err(TimeError::DateOutOfRange { year, month, day });
    }
    let jdn = jdn_from_date(year, month, day)?;
    let elapsed = jdn - KALI_YUGA_EPOCH_JDN;
    if elapsed < 0 {
        return Err(TimeError::DateOutOfRange { year, month, day });
    }
    Ok(elapsed as f64)
}

/// Ahargana with a time-of-day fraction.
///
/// Fails with [`TimeError::InvalidTime`] when the components fall
/// outside the civil day.
pub fn ahargana_at_time(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
) -> Result<f64, TimeError> {
    if hour > 23 || minute > 59 || !(0.0..60.0).contains(&second) {
        return Err(TimeError::InvalidTime {
            hour,
            minute,
            second,
        });
    }
    let base = ahargana(year, month, day)?;
    let frac = hour as f64 / 24.0 + minute as f64 / 1440.0 + second / 86_400.0;
    Ok(base + frac)
}

/// Fraction of the Mahayuga elapsed at a given Ahargana.
pub fn yuga_fraction(ahargana: f64) -> f64 {
    ahargana / CIVIL_DAYS_IN_MAHAYUGA
}
