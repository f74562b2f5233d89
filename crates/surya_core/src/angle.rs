//! Shared angle utilities.
//!
//! All public longitudes in the pipeline are normalized to [0, 360) at
//! computation boundaries; intermediate values may exceed that range.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Smallest circular difference between two angles, degrees in [0, 180].
pub fn circular_difference(a_deg: f64, b_deg: f64) -> f64 {
    let d = (a_deg - b_deg).abs() % 360.0;
    d.min(360.0 - d)
}

/// Convert degrees, arcminutes, arcseconds to decimal degrees.
pub fn dms_to_deg(deg: i32, min: u32, sec: f64) -> f64 {
    let sign = if deg < 0 { -1.0 } else { 1.0 };
    sign * (deg.abs() as f64 + min as f64 / 60.0 + sec / 3600.0)
}

/// Convert decimal degrees to (degrees, arcminutes, arcseconds).
pub fn deg_to_dms(decimal_deg: f64) -> (i32, u32, f64) {
    let sign = if decimal_deg < 0.0 { -1 } else { 1 };
    let abs = decimal_deg.abs();
    let deg = abs.floor();
    let min_decimal = (abs - deg) * 60.0;
    let min = min_decimal.floor();
    let sec = (min_decimal - min) * 60.0;
    (sign * deg as i32, min as u32, sec)
}
