//! Event layer over the position pipeline: lunar phenomena and
//! conjunction detection.
//!
//! This crate provides:
//! - Tithi and completion fraction from true elongation
//! - Lunar ecliptic latitude and both eclipse-possibility screens
//! - Pairwise conjunction detection with exact/close classification
//! - Opposition and quadrature configuration detection
//! - Planetary-group detection over a circular longitude window

pub mod conjunction;
pub mod conjunction_types;
pub mod error;
pub mod lunar;
pub mod lunar_types;

pub use conjunction::{
    classify_configuration, conjunctions_on_date, find_conjunctions, largest_group,
    planetary_group_on_date, seven_true_longitudes, special_configurations,
    special_configurations_on_date,
};
pub use conjunction_types::{
    Configuration, ConfigurationEvent, ConjunctionEvent, ConjunctionKind, PlanetaryGroup,
};
pub use error::SearchError;
pub use lunar::{
    TITHI_ARC_DEG, lunar_latitude_deg, lunar_phenomena, lunar_phenomena_with_mode,
    time_to_next_tithi_days, tithi_from_elongation,
};
pub use lunar_types::{EclipseTest, LunarPhenomena};
