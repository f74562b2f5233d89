//! Sighra correction: epicyclic transformation to geocentric longitude.
//!
//! Applies to the five star-planets only. The epicycle radius is
//! r = (sighra paridhi / 360) x R arcminutes. Each pass re-derives the
//! anomaly from the previous correction, computes the karna (hypotenuse
//! of the Earth-sighrocca-planet triangle), and reads the phala from the
//! inverse jya table:
//!
//!   karna^2 = R^2 + r^2 + 2 r kotijya(kendra)
//!   jya(phala) = r jya(kendra) / karna
//!
//! The text prescribes a fixed number of refinement passes, not
//! convergence to a tolerance; the pass count is a named constant and
//! tests pin it.

use surya_core::{
    CelestialBody, PlanetKind, SINE_RADIUS_ARCMIN, TrigMode, normalize_360, sighra_paridhi_deg,
};

use crate::error::GrahaError;

/// Fixed refinement pass count of the historical method.
pub const SIGHRA_REFINEMENT_PASSES: u32 = 3;

/// Result of one Sighra correction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SighraResult {
    /// True geocentric longitude, degrees in [0, 360).
    pub true_longitude: f64,
    /// Initial Sighra kendra (anomaly), degrees in [0, 360).
    pub kendra: f64,
    /// Final Sighra phala, degrees, signed.
    pub phala: f64,
    /// Karna (hypotenuse) of the final pass, arcminutes.
    pub karna: f64,
}

/// Apply the Sighra correction to a Manda-corrected longitude.
///
/// `sun_true_longitude` is the Sun's Manda-corrected longitude at the
/// same Ahargana. For superior planets the correction is applied to the
/// planet's own longitude; for inferior planets the Sun anchors the
/// geocentric position and the correction is applied to it. Fails with
/// [`GrahaError::UnsupportedBody`] for Sun, Moon, or the nodes.
pub fn apply_sighra(
    body: CelestialBody,
    manda_corrected_longitude: f64,
    sun_true_longitude: f64,
    mode: TrigMode,
) -> Result<SighraResult, GrahaError> {
    let paridhi = sighra_paridhi_deg(body).ok_or(GrahaError::UnsupportedBody {
        body,
        operation: "sighra correction",
    })?;
    // planet_kind covers the same five bodies as sighra_paridhi_deg.
    let kind = body.planet_kind().ok_or(GrahaError::UnsupportedBody {
        body,
        operation: "sighra correction",
    })?;

    let base_kendra = match kind {
        PlanetKind::Superior => normalize_360(manda_corrected_longitude - sun_true_longitude),
        PlanetKind::Inferior => normalize_360(sun_true_longitude - manda_corrected_longitude),
    };

    let radius = paridhi / 360.0 * SINE_RADIUS_ARCMIN;
    let mut phala = 0.0;
    let mut karna = 0.0;

    for _ in 0..SIGHRA_REFINEMENT_PASSES {
        let kendra = normalize_360(base_kendra - phala);
        karna = (SINE_RADIUS_ARCMIN * SINE_RADIUS_ARCMIN
            + radius * radius
            + 2.0 * radius * mode.cosine(kendra))
        .sqrt();
        phala = mode.arcsine(radius * mode.sine(kendra) / karna);
    }

    let true_longitude = match kind {
        PlanetKind::Superior => normalize_360(manda_corrected_longitude + phala),
        PlanetKind::Inferior => normalize_360(sun_true_longitude + phala),
    };

    Ok(SighraResult {
        true_longitude,
        kendra: base_kendra,
        phala,
        karna,
    })
}

/// Largest possible Sighra phala for a body, degrees: reached when the
/// line of sight is tangent to the epicycle, where jya(phala) = r.
pub fn max_sighra_equation_deg(body: CelestialBody, mode: TrigMode) -> Option<f64> {
    sighra_paridhi_deg(body).map(|p| mode.arcsine(p / 360.0 * SINE_RADIUS_ARCMIN))
}
