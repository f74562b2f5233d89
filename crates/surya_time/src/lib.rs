//! Time base for the Surya Siddhanta pipeline.
//!
//! Converts proleptic-Julian calendar dates to Ahargana, the elapsed day
//! count since the Kali Yuga epoch, which every mean-motion formula
//! consumes. Calendar policy: proleptic Julian with astronomical year
//! numbering (year 0 = 1 BCE), matching the historical epoch convention.

pub mod ahargana;
pub mod error;
pub mod julian;

pub use ahargana::{
    KALI_YUGA_EPOCH_JDN, MAX_SUPPORTED_YEAR, ahargana, ahargana_at_time, yuga_fraction,
};
pub use error::TimeError;
pub use julian::{is_julian_leap_year, jdn_from_date, jdn_to_date};
