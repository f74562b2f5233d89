//! Error types for planetary-position calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use surya_core::CelestialBody;
use surya_time::TimeError;

/// Errors from the mean-motion, Manda, and Sighra engines.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum GrahaError {
    /// Unrecognized celestial body name.
    UnknownBody(String),
    /// Valid body, but the requested correction does not apply to it.
    UnsupportedBody {
        body: CelestialBody,
        operation: &'static str,
    },
    /// Error from calendar / Ahargana conversion.
    Time(TimeError),
}

impl Display for GrahaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownBody(name) => write!(f, "unknown celestial body: {name}"),
            Self::UnsupportedBody { body, operation } => {
                write!(f, "{operation} does not apply to {body}")
            }
            Self::Time(e) => write!(f, "time error: {e}"),
        }
    }
}

impl Error for GrahaError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TimeError> for GrahaError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
