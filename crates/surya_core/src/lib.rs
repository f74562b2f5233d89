//! Fixed astronomical dataset and table trigonometry for the Surya
//! Siddhanta planetary model.
//!
//! This crate provides:
//! - The `CelestialBody` enum and its per-body constant tables
//!   (revolutions per Mahayuga, initial longitudes, epicycle
//!   circumferences, apogee positions)
//! - The 24-entry jya (sine) table with linear interpolation, plus a
//!   continuous-trigonometry mode for fidelity comparison
//! - Shared angle utilities (normalization, circular difference, DMS)
//!
//! All tables are compiled-in read-only data; nothing here allocates or
//! mutates shared state.

pub mod angle;
pub mod body;
pub mod constants;
pub mod jya;

pub use angle::{circular_difference, deg_to_dms, dms_to_deg, normalize_360};
pub use body::{ALL_BODIES, CelestialBody, PlanetKind, SEVEN_PLANETS, STAR_PLANETS};
pub use constants::{
    CIVIL_DAYS_IN_MAHAYUGA, CLOSE_CONJUNCTION_LIMIT_DEG, EXACT_CONJUNCTION_LIMIT_DEG,
    LUNAR_ECLIPSE_LATITUDE_LIMIT_DEG, MAX_LUNAR_LATITUDE_DEG, MOON_APOGEE_INITIAL_DEG,
    MOON_APOGEE_REVOLUTIONS, OPPOSITION_LIMIT_DEG, PLANETARY_GROUP_LIMIT_DEG,
    QUADRATURE_LIMIT_DEG, SOLAR_ECLIPSE_LATITUDE_LIMIT_DEG, SYZYGY_TOLERANCE_DEG,
    initial_longitude_deg, manda_paridhi_deg, mandocca_deg, revolutions_per_mahayuga,
    sighra_paridhi_deg,
};
pub use jya::{SINE_RADIUS_ARCMIN, TrigMode};
