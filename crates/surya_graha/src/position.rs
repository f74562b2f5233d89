//! Full planetary-position pipeline for a calendar date.
//!
//! Chains Ahargana -> mean motion -> Manda -> Sighra and collects the
//! ordered correction audit trail. Each call builds its result from the
//! fixed constant tables alone; nothing is cached or shared between
//! calls.

use surya_core::{CelestialBody, TrigMode};
use surya_time::{ahargana, jdn_from_date};

use crate::correction_log::{CorrectionRecord, CorrectionStep};
use crate::error::GrahaError;
use crate::manda::apply_manda;
use crate::mean_motion::{apogee_longitude, mean_longitude};
use crate::sighra::apply_sighra;

/// Complete position of one body on one date.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetaryPosition {
    pub body: CelestialBody,
    /// Elapsed days since the Kali Yuga epoch.
    pub ahargana: f64,
    /// Mean longitude, degrees in [0, 360).
    pub mean_longitude: f64,
    /// Manda-corrected longitude. Equals the mean for the nodes.
    pub manda_corrected: f64,
    /// True geocentric longitude: post-Sighra for star-planets,
    /// otherwise the Manda-corrected value.
    pub true_longitude: f64,
    /// Manda kendra, when the Manda correction applied.
    pub manda_kendra: Option<f64>,
    /// Sighra kendra, when the Sighra correction applied.
    pub sighra_kendra: Option<f64>,
    /// Ordered labels of the corrections applied.
    pub corrections_applied: Vec<CorrectionStep>,
    /// Ordered audit records, one per correction.
    pub records: Vec<CorrectionRecord>,
    /// False when the Manda iteration hit its cap before tolerance
    /// (non-fatal; the historical method bounds the iteration count).
    pub converged: bool,
}

/// Compute the Sun's Manda-corrected (true) longitude, needed as the
/// sighrocca anchor for every star-planet.
fn sun_true_longitude(ah: f64, mode: TrigMode) -> Result<f64, GrahaError> {
    let mean = mean_longitude(CelestialBody::Sun, ah);
    let apogee = apogee_longitude(CelestialBody::Sun, ah)?;
    Ok(apply_manda(CelestialBody::Sun, mean, apogee, mode)?.corrected_longitude)
}

/// Planetary position for a proleptic-Julian calendar date, using the
/// historical jya table.
pub fn planetary_position(
    body: CelestialBody,
    year: i32,
    month: u32,
    day: u32,
) -> Result<PlanetaryPosition, GrahaError> {
    planetary_position_with_mode(body, year, month, day, TrigMode::Table)
}

/// Planetary position with an explicit trigonometry mode.
pub fn planetary_position_with_mode(
    body: CelestialBody,
    year: i32,
    month: u32,
    day: u32,
    mode: TrigMode,
) -> Result<PlanetaryPosition, GrahaError> {
    let jdn = jdn_from_date(year, month, day).map_err(GrahaError::Time)?;
    let ah = ahargana(year, month, day)?;
    let mut records = Vec::new();
    let mut corrections = Vec::new();

    records.push(CorrectionRecord {
        body,
        step: CorrectionStep::Ahargana,
        input: jdn as f64,
        output: ah,
    });
    corrections.push(CorrectionStep::Ahargana);

    let mean = mean_longitude(body, ah);
    records.push(CorrectionRecord {
        body,
        step: CorrectionStep::MeanMotion,
        input: ah,
        output: mean,
    });
    corrections.push(CorrectionStep::MeanMotion);

    // The nodes take neither correction: their mean motion is the model.
    if body.is_node() {
        return Ok(PlanetaryPosition {
            body,
            ahargana: ah,
            mean_longitude: mean,
            manda_corrected: mean,
            true_longitude: mean,
            manda_kendra: None,
            sighra_kendra: None,
            corrections_applied: corrections,
            records,
            converged: true,
        });
    }

    let apogee = apogee_longitude(body, ah)?;
    let manda = apply_manda(body, mean, apogee, mode)?;
    records.push(CorrectionRecord {
        body,
        step: CorrectionStep::Manda,
        input: mean,
        output: manda.corrected_longitude,
    });
    corrections.push(CorrectionStep::Manda);

    let mut true_longitude = manda.corrected_longitude;
    let mut sighra_kendra = None;

    if body.is_star_planet() {
        let sun_true = sun_true_longitude(ah, mode)?;
        let sighra = apply_sighra(body, manda.corrected_longitude, sun_true, mode)?;
        records.push(CorrectionRecord {
            body,
            step: CorrectionStep::Sighra,
            input: manda.corrected_longitude,
            output: sighra.true_longitude,
        });
        corrections.push(CorrectionStep::Sighra);
        true_longitude = sighra.true_longitude;
        sighra_kendra = Some(sighra.kendra);
    }

    Ok(PlanetaryPosition {
        body,
        ahargana: ah,
        mean_longitude: mean,
        manda_corrected: manda.corrected_longitude,
        true_longitude,
        manda_kendra: Some(manda.kendra),
        sighra_kendra,
        corrections_applied: corrections,
        records,
        converged: manda.converged,
    })
}

/// Planetary position looked up by body name, for callers holding a
/// string identifier. Fails with [`GrahaError::UnknownBody`] for names
/// outside the model.
pub fn planetary_position_by_name(
    name: &str,
    year: i32,
    month: u32,
    day: u32,
) -> Result<PlanetaryPosition, GrahaError> {
    let body =
        CelestialBody::from_name(name).ok_or_else(|| GrahaError::UnknownBody(name.to_string()))?;
    planetary_position(body, year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use surya_time::TimeError;

    #[test]
    fn unknown_name_fails() {
        assert!(matches!(
            planetary_position_by_name("Vulcan", 2024, 1, 15),
            Err(GrahaError::UnknownBody(_))
        ));
    }

    #[test]
    fn date_out_of_range_fails() {
        assert!(matches!(
            planetary_position(CelestialBody::Sun, -3200, 1, 1),
            Err(GrahaError::Time(TimeError::DateOutOfRange { .. }))
        ));
    }

    #[test]
    fn sun_has_no_sighra_step() {
        let pos = planetary_position(CelestialBody::Sun, 2024, 1, 15).unwrap();
        assert_eq!(
            pos.corrections_applied,
            vec![
                CorrectionStep::Ahargana,
                CorrectionStep::MeanMotion,
                CorrectionStep::Manda,
            ]
        );
        assert_eq!(pos.true_longitude, pos.manda_corrected);
        assert!(pos.sighra_kendra.is_none());
    }

    #[test]
    fn mars_has_both_corrections() {
        let pos = planetary_position(CelestialBody::Mars, 2024, 1, 15).unwrap();
        assert!(pos.corrections_applied.contains(&CorrectionStep::Manda));
        assert!(pos.corrections_applied.contains(&CorrectionStep::Sighra));
        assert!(pos.sighra_kendra.is_some());
        assert_eq!(pos.records.len(), 4);
    }

    #[test]
    fn node_position_is_mean_only() {
        let pos = planetary_position(CelestialBody::Rahu, 2024, 1, 15).unwrap();
        assert_eq!(
            pos.corrections_applied,
            vec![CorrectionStep::Ahargana, CorrectionStep::MeanMotion]
        );
        assert_eq!(pos.true_longitude, pos.mean_longitude);
        assert!(pos.manda_kendra.is_none());
    }

    #[test]
    fn records_mirror_corrections() {
        let pos = planetary_position(CelestialBody::Saturn, 2000, 1, 1).unwrap();
        let steps: Vec<_> = pos.records.iter().map(|r| r.step).collect();
        assert_eq!(steps, pos.corrections_applied);
        // Each record's output feeds the next record's input.
        for pair in pos.records.windows(2) {
            assert_eq!(pair[1].input, pair[0].output);
        }
    }

    #[test]
    fn repeated_calls_bit_identical() {
        let a = planetary_position(CelestialBody::Venus, 2024, 3, 27).unwrap();
        let b = planetary_position(CelestialBody::Venus, 2024, 3, 27).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn all_longitudes_in_range() {
        for body in surya_core::ALL_BODIES {
            for &(y, m, d) in &[(-500, 6, 1), (0, 1, 1), (1200, 7, 19), (2024, 12, 31)] {
                let pos = planetary_position(body, y, m, d).unwrap();
                for lon in [pos.mean_longitude, pos.manda_corrected, pos.true_longitude] {
                    assert!((0.0..360.0).contains(&lon), "{body} {y}-{m}-{d}: {lon}");
                }
            }
        }
    }
}
