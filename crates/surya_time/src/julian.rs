//! Proleptic Julian calendar to Julian Day Number conversion.
//!
//! Astronomical year numbering throughout: year 0 = 1 BCE, year -1 =
//! 2 BCE. The JDN here is the noon-based day number of the standard
//! formula; Ahargana arithmetic only ever takes differences, so the
//! half-day convention cancels.

use crate::error::TimeError;

/// Leap year test in the proleptic Julian calendar.
pub fn is_julian_leap_year(year: i32) -> bool {
    year.rem_euclid(4) == 0
}

/// Days in a month of the proleptic Julian calendar.
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 => {
            if is_julian_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Convert a proleptic-Julian calendar date to a Julian Day Number.
///
/// Fails with [`TimeError::InvalidDate`] for out-of-range month or day.
pub fn jdn_from_date(year: i32, month: u32, day: u32) -> Result<i64, TimeError> {
    if !(1..=12).contains(&month) || day < 1 || day > days_in_month(year, month) {
        return Err(TimeError::InvalidDate { year, month, day });
    }
    let a = (14 - month as i64) / 12;
    let y = year as i64 + 4800 - a;
    let m = month as i64 + 12 * a - 3;
    Ok(day as i64 + (153 * m + 2) / 5 + 365 * y + y / 4 - 32083)
}

/// Convert a Julian Day Number back to a proleptic-Julian calendar date.
pub fn jdn_to_date(jdn: i64) -> (i32, u32, u32) {
    let c = jdn + 32082;
    let d = (4 * c + 3) / 1461;
    let e = c - (1461 * d) / 4;
    let m = (5 * e + 2) / 153;
    let day = e - (153 * m + 2) / 5 + 1;
    let month = m + 3 - 12 * (m / 10);
    let year = d - 4800 + m / 10;
    (year as i32, month as u32, day as u32)
}
