//! Fixed constants of the Surya Siddhanta planetary model.
//!
//! Revolution counts are from Chapter 1 of the text; initial longitudes,
//! epicycle circumferences (paridhi), and apogee (mandocca) positions from
//! Chapters 3-5; lunar and conjunction limits from Chapters 6-7. All values
//! are compiled-in read-only data.

use crate::body::CelestialBody;

/// Civil days in one Mahayuga.
pub const CIVIL_DAYS_IN_MAHAYUGA: f64 = 1_577_917_500.0;

/// Revolutions of the Moon's apogee (mandocca) per Mahayuga.
pub const MOON_APOGEE_REVOLUTIONS: f64 = 488_219.0;

/// Moon's apogee longitude at the Kali Yuga epoch, degrees.
pub const MOON_APOGEE_INITIAL_DEG: f64 = 80.0;

/// Maximum lunar latitude (orbital inclination), degrees.
pub const MAX_LUNAR_LATITUDE_DEG: f64 = 4.5;

/// Latitude limit for a solar eclipse to be possible, degrees.
/// Combined solar and lunar angular semi-diameters plus lunar parallax.
pub const SOLAR_ECLIPSE_LATITUDE_LIMIT_DEG: f64 = 1.5;

/// Latitude limit for a lunar eclipse to be possible, degrees.
/// Lunar semi-diameter plus the Earth-shadow radius at the Moon's distance.
pub const LUNAR_ECLIPSE_LATITUDE_LIMIT_DEG: f64 = 1.0;

/// Syzygy tolerance for eclipse candidacy: one tithi of elongation.
pub const SYZYGY_TOLERANCE_DEG: f64 = 12.0;

/// Separation at or below which a conjunction is exact (graha yuddha).
pub const EXACT_CONJUNCTION_LIMIT_DEG: f64 = 1.0;

/// Default separation limit for reporting a close conjunction.
pub const CLOSE_CONJUNCTION_LIMIT_DEG: f64 = 5.0;

/// Longitude window for a planetary group (three or more bodies).
pub const PLANETARY_GROUP_LIMIT_DEG: f64 = 30.0;

/// Window around 180 deg separation for an opposition.
pub const OPPOSITION_LIMIT_DEG: f64 = 5.0;

/// Window around 90 deg separation for a quadrature.
pub const QUADRATURE_LIMIT_DEG: f64 = 5.0;

/// Revolutions per Mahayuga for each body. Rahu carries the node's
/// revolution count; Ketu shares it (the nodes are diametrically bound).
pub const fn revolutions_per_mahayuga(body: CelestialBody) -> f64 {
    match body {
        CelestialBody::Sun => 4_320_000.0,
        CelestialBody::Moon => 57_753_336.0,
        CelestialBody::Mars => 2_296_824.0,
        CelestialBody::Mercury => 17_937_000.0,
        CelestialBody::Jupiter => 364_220.0,
        CelestialBody::Venus => 7_022_388.0,
        CelestialBody::Saturn => 146_564.0,
        CelestialBody::Rahu | CelestialBody::Ketu => 232_226.0,
    }
}

/// Mean longitude at the Kali Yuga epoch, degrees (DMS values from the
/// text converted to decimal). Ketu is derived from Rahu at computation
/// time, so its entry matches Rahu's.
pub fn initial_longitude_deg(body: CelestialBody) -> f64 {
    match body {
        CelestialBody::Sun => 0.0,
        CelestialBody::Moon => 0.0,
        CelestialBody::Mars => crate::angle::dms_to_deg(164, 11, 34.0),
        CelestialBody::Mercury => crate::angle::dms_to_deg(220, 2, 16.0),
        CelestialBody::Jupiter => crate::angle::dms_to_deg(154, 1, 56.0),
        CelestialBody::Venus => 0.0,
        CelestialBody::Saturn => crate::angle::dms_to_deg(249, 7, 3.0),
        CelestialBody::Rahu | CelestialBody::Ketu => 0.0,
    }
}

/// Manda epicycle circumference (paridhi) in degrees, for the seven
/// planets. `None` for the nodes, which take no Manda correction.
pub fn manda_paridhi_deg(body: CelestialBody) -> Option<f64> {
    match body {
        CelestialBody::Sun => Some(13.0 + 40.0 / 60.0),
        CelestialBody::Moon => Some(31.5),
        CelestialBody::Mars => Some(70.0),
        CelestialBody::Mercury => Some(28.0),
        CelestialBody::Jupiter => Some(32.0),
        CelestialBody::Venus => Some(11.0),
        CelestialBody::Saturn => Some(48.0),
        CelestialBody::Rahu | CelestialBody::Ketu => None,
    }
}

/// Fixed mandocca (apogee) longitude in degrees for bodies whose apogee
/// the text treats as stationary. The Moon's mandocca moves and is
/// computed from [`MOON_APOGEE_REVOLUTIONS`] instead.
pub fn mandocca_deg(body: CelestialBody) -> Option<f64> {
    match body {
        CelestialBody::Sun => Some(80.0),
        CelestialBody::Mars => Some(130.0),
        CelestialBody::Mercury => Some(220.0),
        CelestialBody::Jupiter => Some(160.0),
        CelestialBody::Venus => Some(80.0),
        CelestialBody::Saturn => Some(240.0),
        CelestialBody::Moon | CelestialBody::Rahu | CelestialBody::Ketu => None,
    }
}

/// Sighra epicycle circumference (paridhi) in degrees for the five
/// star-planets. `None` for Sun, Moon, and the nodes.
pub fn sighra_paridhi_deg(body: CelestialBody) -> Option<f64> {
    match body {
        CelestialBody::Mars => Some(235.0),
        CelestialBody::Mercury => Some(131.5),
        CelestialBody::Jupiter => Some(72.0),
        CelestialBody::Venus => Some(260.0),
        CelestialBody::Saturn => Some(39.0),
        _ => None,
    }
}

/// Modern sidereal period in days, used for validation cross-checks only.
pub fn modern_sidereal_period_days(body: CelestialBody) -> Option<f64> {
    match body {
        CelestialBody::Sun => Some(365.256363),
        CelestialBody::Moon => Some(27.321661),
        CelestialBody::Mars => Some(686.98),
        CelestialBody::Mercury => Some(87.969257),
        CelestialBody::Jupiter => Some(4332.59),
        CelestialBody::Venus => Some(224.7008),
        CelestialBody::Saturn => Some(10746.94),
        CelestialBody::Rahu | CelestialBody::Ketu => None,
    }
}
