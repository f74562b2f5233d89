//! Mean motions from the Mahayuga revolution counts.
//!
//! Mean longitude = epoch longitude + daily motion x Ahargana, with the
//! Ahargana reduced modulo the body's period first so the multiplication
//! never loses precision to a large product. Also derives the moving
//! lunar apogee and the mean Sighra anomaly consumed downstream.

use surya_core::{
    CIVIL_DAYS_IN_MAHAYUGA, CelestialBody, MOON_APOGEE_INITIAL_DEG, MOON_APOGEE_REVOLUTIONS,
    PlanetKind, initial_longitude_deg, mandocca_deg, normalize_360, revolutions_per_mahayuga,
};

use crate::error::GrahaError;

/// Daily mean motion in degrees for a body.
pub fn daily_motion_deg(body: CelestialBody) -> f64 {
    revolutions_per_mahayuga(body) * 360.0 / CIVIL_DAYS_IN_MAHAYUGA
}

/// Sidereal period in days implied by the revolution count.
pub fn period_days(body: CelestialBody) -> f64 {
    CIVIL_DAYS_IN_MAHAYUGA / revolutions_per_mahayuga(body)
}

/// Mean longitude accumulated by a rate over an Ahargana, reduced
/// modulo the period before multiplying.
fn accumulate(revolutions: f64, initial_deg: f64, ahargana: f64) -> f64 {
    let period = CIVIL_DAYS_IN_MAHAYUGA / revolutions;
    let reduced = ahargana % period;
    let daily = revolutions * 360.0 / CIVIL_DAYS_IN_MAHAYUGA;
    normalize_360(initial_deg + daily * reduced)
}

/// Mean longitude of a body at a given Ahargana, degrees in [0, 360).
///
/// Ketu is the point opposite Rahu.
pub fn mean_longitude(body: CelestialBody, ahargana: f64) -> f64 {
    match body {
        CelestialBody::Ketu => {
            let rahu = accumulate(
                revolutions_per_mahayuga(CelestialBody::Rahu),
                initial_longitude_deg(CelestialBody::Rahu),
                ahargana,
            );
            normalize_360(rahu + 180.0)
        }
        _ => accumulate(
            revolutions_per_mahayuga(body),
            initial_longitude_deg(body),
            ahargana,
        ),
    }
}

/// Longitude of a body's mandocca (apogee) at a given Ahargana.
///
/// The Moon's apogee revolves; every other planet's is fixed. Fails with
/// [`GrahaError::UnsupportedBody`] for the nodes, which have no apogee.
pub fn apogee_longitude(body: CelestialBody, ahargana: f64) -> Result<f64, GrahaError> {
    if body == CelestialBody::Moon {
        return Ok(accumulate(
            MOON_APOGEE_REVOLUTIONS,
            MOON_APOGEE_INITIAL_DEG,
            ahargana,
        ));
    }
    mandocca_deg(body).ok_or(GrahaError::UnsupportedBody {
        body,
        operation: "apogee longitude",
    })
}

/// Mean Manda anomaly: mean longitude minus apogee longitude.
pub fn mean_manda_anomaly(body: CelestialBody, ahargana: f64) -> Result<f64, GrahaError> {
    let apogee = apogee_longitude(body, ahargana)?;
    Ok(normalize_360(mean_longitude(body, ahargana) - apogee))
}

/// Mean Sighra anomaly for a star-planet: planet minus Sun for superior
/// planets, Sun minus planet for inferior.
pub fn mean_sighra_anomaly(body: CelestialBody, ahargana: f64) -> Result<f64, GrahaError> {
    let kind = body.planet_kind().ok_or(GrahaError::UnsupportedBody {
        body,
        operation: "sighra anomaly",
    })?;
    let planet = mean_longitude(body, ahargana);
    let sun = mean_longitude(CelestialBody::Sun, ahargana);
    Ok(match kind {
        PlanetKind::Superior => normalize_360(planet - sun),
        PlanetKind::Inferior => normalize_360(sun - planet),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_longitudes_are_initial() {
        assert!((mean_longitude(CelestialBody::Sun, 0.0) - 0.0).abs() < 1e-12);
        let mars = mean_longitude(CelestialBody::Mars, 0.0);
        assert!((mars - 164.19277777777778).abs() < 1e-9, "mars = {mars}");
    }

    #[test]
    fn sun_mean_on_2024_01_15() {
        let lon = mean_longitude(CelestialBody::Sun, 1_871_872.0);
        assert!((lon - 282.3957526297).abs() < 1e-6, "lon = {lon}");
    }

    #[test]
    fn moon_mean_on_2024_01_15() {
        let lon = mean_longitude(CelestialBody::Moon, 1_871_872.0);
        assert!((lon - 129.7721820827).abs() < 1e-6, "lon = {lon}");
    }

    #[test]
    fn ketu_opposite_rahu() {
        let rahu = mean_longitude(CelestialBody::Rahu, 1_871_872.0);
        let ketu = mean_longitude(CelestialBody::Ketu, 1_871_872.0);
        assert!((normalize_360(ketu - rahu) - 180.0).abs() < 1e-12);
    }

    #[test]
    fn sun_advances_one_degree_per_day() {
        let a = mean_longitude(CelestialBody::Sun, 1000.0);
        let b = mean_longitude(CelestialBody::Sun, 1001.0);
        let delta = normalize_360(b - a);
        assert!((delta - daily_motion_deg(CelestialBody::Sun)).abs() < 1e-9);
    }

    #[test]
    fn mean_longitude_monotonic_within_revolution() {
        // Over a span shorter than one Sun revolution, longitude only
        // increases (mod wrap).
        let mut prev = mean_longitude(CelestialBody::Sun, 5000.0);
        for i in 1..100 {
            let next = mean_longitude(CelestialBody::Sun, 5000.0 + i as f64);
            let step = normalize_360(next - prev);
            assert!(step > 0.0 && step < 2.0, "step = {step}");
            prev = next;
        }
    }

    #[test]
    fn periods_match_modern_scale() {
        // Revolution counts reproduce modern sidereal periods closely;
        // Saturn is the worst at about 0.18 percent.
        for body in surya_core::SEVEN_PLANETS {
            let modern = surya_core::constants::modern_sidereal_period_days(body).unwrap();
            let model = period_days(body);
            let rel = ((model - modern) / modern).abs();
            assert!(rel < 2e-3, "{body}: model = {model}, modern = {modern}");
        }
    }

    #[test]
    fn moon_apogee_moves() {
        let at_epoch = apogee_longitude(CelestialBody::Moon, 0.0).unwrap();
        let later = apogee_longitude(CelestialBody::Moon, 1_871_872.0).unwrap();
        assert!((at_epoch - 80.0).abs() < 1e-12);
        assert!((later - 141.42757684098245).abs() < 1e-6, "later = {later}");
    }

    #[test]
    fn fixed_apogees() {
        assert_eq!(apogee_longitude(CelestialBody::Sun, 12345.0).unwrap(), 80.0);
        assert_eq!(
            apogee_longitude(CelestialBody::Saturn, 0.0).unwrap(),
            240.0
        );
    }

    #[test]
    fn node_apogee_unsupported() {
        assert!(matches!(
            apogee_longitude(CelestialBody::Rahu, 0.0),
            Err(GrahaError::UnsupportedBody { .. })
        ));
    }

    #[test]
    fn sighra_anomaly_direction() {
        let ah = 1_871_872.0;
        let mars = mean_sighra_anomaly(CelestialBody::Mars, ah).unwrap();
        let venus = mean_sighra_anomaly(CelestialBody::Venus, ah).unwrap();
        let sun = mean_longitude(CelestialBody::Sun, ah);
        let mars_lon = mean_longitude(CelestialBody::Mars, ah);
        let venus_lon = mean_longitude(CelestialBody::Venus, ah);
        assert!((mars - normalize_360(mars_lon - sun)).abs() < 1e-12);
        assert!((venus - normalize_360(sun - venus_lon)).abs() < 1e-12);
    }

    #[test]
    fn sighra_anomaly_rejects_luminaries() {
        assert!(mean_sighra_anomaly(CelestialBody::Sun, 0.0).is_err());
        assert!(mean_sighra_anomaly(CelestialBody::Moon, 0.0).is_err());
        assert!(mean_sighra_anomaly(CelestialBody::Ketu, 0.0).is_err());
    }
}
