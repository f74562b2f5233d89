//! The Surya Siddhanta jya (sine) table and its interpolation.
//!
//! The text tabulates 24 R-scaled sine values (R = 3438 arcminutes) at
//! 3.75 deg steps from 0 to 90 deg. All corrections in the pipeline enter
//! this table with linear interpolation between entries; quadrant folding
//! extends it to the full circle with sign. A continuous mode backed by
//! `f64::sin` exists for fidelity comparison only and is never the
//! default.

use crate::angle::normalize_360;

/// The trigonometric radius R, in arcminutes.
pub const SINE_RADIUS_ARCMIN: f64 = 3438.0;

/// Angular step between table entries, degrees.
pub const JYA_STEP_DEG: f64 = 3.75;

/// The 24 tabulated jya values (plus the zero entry), arcminutes.
/// Entry i is the jya of i * 3.75 deg.
pub const JYA_TABLE: [f64; 25] = [
    0.0, 225.0, 449.0, 671.0, 890.0, 1105.0, 1315.0, 1520.0, 1719.0, 1910.0, 2093.0, 2267.0,
    2431.0, 2585.0, 2728.0, 2859.0, 2978.0, 3084.0, 3177.0, 3256.0, 3321.0, 3372.0, 3409.0,
    3431.0, 3438.0,
];

/// Table lookup vs continuous trigonometry.
///
/// The historical pipeline always uses [`TrigMode::Table`]; the continuous
/// variant replaces the table with `f64` transcendentals so the two models
/// can be compared numerically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TrigMode {
    /// Interpolated 24-entry jya table (the historical method).
    #[default]
    Table,
    /// Continuous `f64::sin`/`f64::asin`, R-scaled.
    Continuous,
}

/// Interpolate the jya table for an argument in [0, 90] degrees.
fn jya_first_quadrant(arg_deg: f64) -> f64 {
    let pos = arg_deg / JYA_STEP_DEG;
    let i = pos as usize;
    if i >= 24 {
        return JYA_TABLE[24];
    }
    JYA_TABLE[i] + (pos - i as f64) * (JYA_TABLE[i + 1] - JYA_TABLE[i])
}

/// Invert the first-quadrant table: arcminute value in [0, 3438] to
/// degrees in [0, 90].
fn inverse_jya_first_quadrant(value_arcmin: f64) -> f64 {
    if value_arcmin >= SINE_RADIUS_ARCMIN {
        return 90.0;
    }
    let mut i = 0;
    while i < 24 && JYA_TABLE[i + 1] < value_arcmin {
        i += 1;
    }
    let span = JYA_TABLE[i + 1] - JYA_TABLE[i];
    (i as f64 + (value_arcmin - JYA_TABLE[i]) / span) * JYA_STEP_DEG
}

impl TrigMode {
    /// R-scaled sine of an angle in degrees, arcminutes, signed by
    /// quadrant.
    pub fn sine(self, deg: f64) -> f64 {
        match self {
            Self::Table => {
                let d = normalize_360(deg);
                if d <= 90.0 {
                    jya_first_quadrant(d)
                } else if d <= 180.0 {
                    jya_first_quadrant(180.0 - d)
                } else if d <= 270.0 {
                    -jya_first_quadrant(d - 180.0)
                } else {
                    -jya_first_quadrant(360.0 - d)
                }
            }
            Self::Continuous => SINE_RADIUS_ARCMIN * deg.to_radians().sin(),
        }
    }

    /// R-scaled cosine (kotijya) of an angle in degrees, arcminutes.
    pub fn cosine(self, deg: f64) -> f64 {
        match self {
            Self::Table => self.sine(deg + 90.0),
            Self::Continuous => SINE_RADIUS_ARCMIN * deg.to_radians().cos(),
        }
    }

    /// Inverse sine of an R-scaled arcminute value, degrees in [-90, 90].
    pub fn arcsine(self, value_arcmin: f64) -> f64 {
        match self {
            Self::Table => {
                let angle = inverse_jya_first_quadrant(value_arcmin.abs());
                if value_arcmin >= 0.0 { angle } else { -angle }
            }
            Self::Continuous => {
                let ratio = (value_arcmin / SINE_RADIUS_ARCMIN).clamp(-1.0, 1.0);
                ratio.asin().to_degrees()
            }
        }
    }
}
