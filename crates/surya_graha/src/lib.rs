//! Planetary longitude engine: mean motion, Manda, Sighra.
//!
//! The crate exposes each pipeline stage on its own plus the
//! [`planetary_position`] facade that chains them for a calendar date.
//! All longitudes are sidereal degrees in [0, 360).

pub mod correction_log;
pub mod error;
pub mod manda;
pub mod mean_motion;
pub mod position;
pub mod sighra;

pub use correction_log::{CorrectionRecord, CorrectionStep};
pub use error::GrahaError;
pub use manda::{MANDA_MAX_ITERATIONS, MANDA_TOLERANCE_DEG, MandaResult, apply_manda, max_equation_deg};
pub use mean_motion::{
    apogee_longitude, daily_motion_deg, mean_longitude, mean_manda_anomaly, mean_sighra_anomaly,
    period_days,
};
pub use position::{
    PlanetaryPosition, planetary_position, planetary_position_by_name, planetary_position_with_mode,
};
pub use sighra::{SIGHRA_REFINEMENT_PASSES, SighraResult, apply_sighra, max_sighra_equation_deg};
