//! Error type for the search crate.

use surya_graha::GrahaError;

/// Errors from lunar-phenomena and conjunction searches.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// Position pipeline failure underneath the search.
    Graha(GrahaError),
    /// Conjunction tolerance outside (0, 180].
    InvalidTolerance(f64),
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Graha(e) => write!(f, "position error: {e}"),
            Self::InvalidTolerance(t) => {
                write!(f, "conjunction tolerance {t} is outside (0, 180]")
            }
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Graha(e) => Some(e),
            Self::InvalidTolerance(_) => None,
        }
    }
}

impl From<GrahaError> for SearchError {
    fn from(e: GrahaError) -> Self {
        Self::Graha(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_tolerance() {
        let msg = SearchError::InvalidTolerance(-1.0).to_string();
        assert!(msg.contains("-1"), "{msg}");
    }
}
