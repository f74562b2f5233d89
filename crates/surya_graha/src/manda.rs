//! Manda correction: the equation of center.
//!
//! The Manda phala is read from the jya table scaled by the body's
//! epicycle circumference: phala = (paridhi / 360) x jya(kendra) / 60
//! degrees. Because the corrected longitude feeds back into the anomaly,
//! the text prescribes the successive-mean iteration: re-enter the table
//! with the kendra displaced by half the previous phala, until the phala
//! settles or the fixed iteration cap is reached. The cap is part of the
//! historical method, so exhausting it is reported, not raised.

use surya_core::{CelestialBody, SINE_RADIUS_ARCMIN, TrigMode, manda_paridhi_deg, normalize_360};

use crate::error::GrahaError;

/// Convergence tolerance on the phala between iterations, degrees.
pub const MANDA_TOLERANCE_DEG: f64 = 0.001;

/// Iteration cap of the successive-mean method.
pub const MANDA_MAX_ITERATIONS: u32 = 5;

/// Result of one Manda correction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandaResult {
    /// Manda-corrected longitude, degrees in [0, 360).
    pub corrected_longitude: f64,
    /// Manda kendra (anomaly) the correction started from.
    pub kendra: f64,
    /// Final equation of center, degrees, signed.
    pub phala: f64,
    /// Iterations performed (1..=MANDA_MAX_ITERATIONS).
    pub iterations: u32,
    /// False when the cap was reached before the tolerance.
    pub converged: bool,
}

/// Apply the Manda correction to a mean longitude.
///
/// `apogee_longitude` is the body's mandocca at the same Ahargana (see
/// [`crate::mean_motion::apogee_longitude`]). Fails with
/// [`GrahaError::UnsupportedBody`] for the nodes.
pub fn apply_manda(
    body: CelestialBody,
    mean_longitude: f64,
    apogee_longitude: f64,
    mode: TrigMode,
) -> Result<MandaResult, GrahaError> {
    let paridhi = manda_paridhi_deg(body).ok_or(GrahaError::UnsupportedBody {
        body,
        operation: "manda correction",
    })?;

    let kendra = normalize_360(mean_longitude - apogee_longitude);
    let mut phala = 0.0;
    let mut iterations = 0;
    let mut converged = false;

    while iterations < MANDA_MAX_ITERATIONS {
        iterations += 1;
        // Successive mean: half the previous correction displaces the
        // anomaly for the next table entry.
        let adjusted = normalize_360(kendra - 0.5 * phala);
        let next = (paridhi / 360.0) * mode.sine(adjusted) / 60.0;
        if (next - phala).abs() < MANDA_TOLERANCE_DEG {
            phala = next;
            converged = true;
            break;
        }
        phala = next;
    }

    Ok(MandaResult {
        corrected_longitude: normalize_360(mean_longitude + phala),
        kendra,
        phala,
        iterations,
        converged,
    })
}

/// Largest possible equation of center for a body, degrees.
///
/// Reached when the kendra sine saturates at R: (paridhi / 360) x R / 60.
pub fn max_equation_deg(body: CelestialBody) -> Option<f64> {
    manda_paridhi_deg(body).map(|p| p / 360.0 * SINE_RADIUS_ARCMIN / 60.0)
}
