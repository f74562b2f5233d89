//! Result types for the conjunction detector.

use surya_core::CelestialBody;

/// Classification by separation at the close/exact limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConjunctionKind {
    /// Separation within the exact-conjunction limit (1 degree).
    Exact,
    /// Separation within the reporting tolerance but not exact.
    Close,
}

impl std::fmt::Display for ConjunctionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Exact => "exact",
            Self::Close => "close",
        })
    }
}

/// One reported pair on one date. `body_a` sorts before `body_b` by name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConjunctionEvent {
    pub body_a: CelestialBody,
    pub body_b: CelestialBody,
    /// Shorter arc between the two longitudes, degrees in [0, 180].
    pub separation_deg: f64,
    pub kind: ConjunctionKind,
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// Special two-body configuration by separation window.
///
/// Conjunction here means the exact limit, not the wider reporting
/// tolerance of [`ConjunctionEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Configuration {
    Conjunction,
    Opposition,
    Quadrature,
}

impl std::fmt::Display for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Conjunction => "conjunction",
            Self::Opposition => "opposition",
            Self::Quadrature => "quadrature",
        })
    }
}

/// One special configuration on one date. `body_a` sorts before
/// `body_b` by name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfigurationEvent {
    pub body_a: CelestialBody,
    pub body_b: CelestialBody,
    /// Shorter arc between the two longitudes, degrees in [0, 180].
    pub separation_deg: f64,
    pub configuration: Configuration,
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// A run of bodies sharing one circular longitude window.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetaryGroup {
    /// Members ordered by longitude along the window.
    pub bodies: Vec<CelestialBody>,
    /// Longitude where the window opens, degrees in [0, 360).
    pub start_deg: f64,
    /// Arc from the first member to the last, degrees.
    pub span_deg: f64,
}
