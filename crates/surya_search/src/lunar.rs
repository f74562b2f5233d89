//! Lunar theory: tithi, latitude, and eclipse-possibility screens.
//!
//! Elongation is true Moon minus true Sun. One tithi spans 12 degrees of
//! elongation, thirty to the synodic month. The Moon's ecliptic latitude
//! is the maximum latitude scaled by the jya of its distance from the
//! ascending node. Both eclipse screens combine a syzygy window (one
//! tithi either side) with a latitude limit; the limits differ because
//! the Earth's shadow at the Moon is narrower than the solar disc plus
//! parallax at a new moon.

use surya_core::{
    CelestialBody, LUNAR_ECLIPSE_LATITUDE_LIMIT_DEG, MAX_LUNAR_LATITUDE_DEG, SINE_RADIUS_ARCMIN,
    SOLAR_ECLIPSE_LATITUDE_LIMIT_DEG, SYZYGY_TOLERANCE_DEG, TrigMode, circular_difference,
    normalize_360,
};
use surya_graha::{daily_motion_deg, planetary_position_with_mode};

use crate::error::SearchError;
use crate::lunar_types::{EclipseTest, LunarPhenomena};

/// Degrees of elongation per tithi.
pub const TITHI_ARC_DEG: f64 = 12.0;

/// Tithi number (1..=30) and elapsed fraction for an elongation.
pub fn tithi_from_elongation(elongation_deg: f64) -> (u32, f64) {
    let e = normalize_360(elongation_deg);
    let raw = e / TITHI_ARC_DEG;
    let number = (raw.floor() as u32 + 1).min(30);
    (number, raw.fract())
}

/// Ecliptic latitude of the Moon, degrees, from its distance to the
/// ascending node.
pub fn lunar_latitude_deg(moon_longitude: f64, node_longitude: f64, mode: TrigMode) -> f64 {
    let arg = normalize_360(moon_longitude - node_longitude);
    MAX_LUNAR_LATITUDE_DEG * mode.sine(arg) / SINE_RADIUS_ARCMIN
}

/// Days until the next tithi boundary, from the mean relative motion of
/// the Moon against the Sun.
pub fn time_to_next_tithi_days(completion_fraction: f64) -> f64 {
    let relative_motion =
        daily_motion_deg(CelestialBody::Moon) - daily_motion_deg(CelestialBody::Sun);
    (1.0 - completion_fraction) * TITHI_ARC_DEG / relative_motion
}

fn eclipse_screen(offset_deg: f64, latitude_deg: f64, latitude_limit_deg: f64) -> EclipseTest {
    let margin_deg = latitude_limit_deg - latitude_deg.abs();
    let possible = offset_deg <= SYZYGY_TOLERANCE_DEG && margin_deg >= 0.0;
    EclipseTest {
        possible,
        syzygy_offset_deg: offset_deg,
        margin_deg,
        magnitude: if possible {
            (margin_deg / latitude_limit_deg).clamp(0.0, 1.0)
        } else {
            0.0
        },
    }
}

/// Lunar phenomena for a proleptic-Julian calendar date, using the
/// historical jya table.
pub fn lunar_phenomena(year: i32, month: u32, day: u32) -> Result<LunarPhenomena, SearchError> {
    lunar_phenomena_with_mode(year, month, day, TrigMode::Table)
}

/// Lunar phenomena with an explicit trigonometry mode.
pub fn lunar_phenomena_with_mode(
    year: i32,
    month: u32,
    day: u32,
    mode: TrigMode,
) -> Result<LunarPhenomena, SearchError> {
    let sun = planetary_position_with_mode(CelestialBody::Sun, year, month, day, mode)?;
    let moon = planetary_position_with_mode(CelestialBody::Moon, year, month, day, mode)?;
    let node = planetary_position_with_mode(CelestialBody::Rahu, year, month, day, mode)?;

    let elongation = normalize_360(moon.true_longitude - sun.true_longitude);
    let (tithi_number, completion_fraction) = tithi_from_elongation(elongation);
    let latitude = lunar_latitude_deg(moon.true_longitude, node.true_longitude, mode);

    // New moon: elongation near 0 (or 360); full moon: near 180.
    let new_moon_offset = elongation.min(360.0 - elongation);
    let full_moon_offset = circular_difference(elongation, 180.0);

    Ok(LunarPhenomena {
        ahargana: moon.ahargana,
        sun_longitude: sun.true_longitude,
        moon_longitude: moon.true_longitude,
        node_longitude: node.true_longitude,
        elongation_deg: elongation,
        tithi_number,
        completion_fraction,
        time_to_next_tithi_days: time_to_next_tithi_days(completion_fraction),
        latitude_deg: latitude,
        solar_eclipse: eclipse_screen(new_moon_offset, latitude, SOLAR_ECLIPSE_LATITUDE_LIMIT_DEG),
        lunar_eclipse: eclipse_screen(full_moon_offset, latitude, LUNAR_ECLIPSE_LATITUDE_LIMIT_DEG),
    })
}
