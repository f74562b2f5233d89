//! Error types for calendar and Ahargana conversion.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from date validation and Ahargana computation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Month or day outside the calendar's valid range.
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Hour, minute, or second outside the civil-day range.
    InvalidTime { hour: u32, minute: u32, second: f64 },
    /// Date outside the supported window (Kali Yuga epoch through
    /// year 3000).
    DateOutOfRange { year: i32, month: u32, day: u32 },
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { year, month, day } => {
                write!(f, "invalid calendar date {year}-{month:02}-{day:02}")
            }
            Self::InvalidTime {
                hour,
                minute,
                second,
            } => {
                write!(f, "invalid time of day {hour:02}:{minute:02}:{second:04.1}")
            }
            Self::DateOutOfRange { year, month, day } => {
                write!(
                    f,
                    "date {year}-{month:02}-{day:02} outside supported window"
                )
            }
        }
    }
}

impl Error for TimeError {}
