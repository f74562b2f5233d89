//! Celestial body enum for the Surya Siddhanta model.
//!
//! The nine bodies of the classical planetary chapters: Sun, Moon, the
//! five star-planets, and the lunar nodes. Rahu is the ascending node;
//! Ketu is the descending node, always Rahu + 180 deg.

/// A body of the Surya Siddhanta planetary model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CelestialBody {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
    /// Ascending lunar node.
    Rahu,
    /// Descending lunar node. Always Rahu + 180 deg.
    Ketu,
}

/// All nine bodies in traditional order.
pub const ALL_BODIES: [CelestialBody; 9] = [
    CelestialBody::Sun,
    CelestialBody::Moon,
    CelestialBody::Mars,
    CelestialBody::Mercury,
    CelestialBody::Jupiter,
    CelestialBody::Venus,
    CelestialBody::Saturn,
    CelestialBody::Rahu,
    CelestialBody::Ketu,
];

/// The seven visible planets (Sun through Saturn), excluding the nodes.
pub const SEVEN_PLANETS: [CelestialBody; 7] = [
    CelestialBody::Sun,
    CelestialBody::Moon,
    CelestialBody::Mars,
    CelestialBody::Mercury,
    CelestialBody::Jupiter,
    CelestialBody::Venus,
    CelestialBody::Saturn,
];

/// The five star-planets that receive the Sighra correction.
pub const STAR_PLANETS: [CelestialBody; 5] = [
    CelestialBody::Mars,
    CelestialBody::Mercury,
    CelestialBody::Jupiter,
    CelestialBody::Venus,
    CelestialBody::Saturn,
];

/// Superior planets orbit outside the Sun's deferent, inferior inside.
/// Determines the Sighra anomaly direction and anchor longitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanetKind {
    Superior,
    Inferior,
}

impl CelestialBody {
    /// English name of the body.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mars => "Mars",
            Self::Mercury => "Mercury",
            Self::Jupiter => "Jupiter",
            Self::Venus => "Venus",
            Self::Saturn => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Parse a body from its English name (case-insensitive).
    /// "AscendingNode" and "DescendingNode" are accepted aliases.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "sun" => Some(Self::Sun),
            "moon" => Some(Self::Moon),
            "mars" => Some(Self::Mars),
            "mercury" => Some(Self::Mercury),
            "jupiter" => Some(Self::Jupiter),
            "venus" => Some(Self::Venus),
            "saturn" => Some(Self::Saturn),
            "rahu" | "ascendingnode" => Some(Self::Rahu),
            "ketu" | "descendingnode" => Some(Self::Ketu),
            _ => None,
        }
    }

    /// Whether this body is one of the five star-planets.
    pub const fn is_star_planet(self) -> bool {
        matches!(
            self,
            Self::Mars | Self::Mercury | Self::Jupiter | Self::Venus | Self::Saturn
        )
    }

    /// Whether this body is a lunar node.
    pub const fn is_node(self) -> bool {
        matches!(self, Self::Rahu | Self::Ketu)
    }

    /// Superior/inferior classification for the five star-planets.
    pub const fn planet_kind(self) -> Option<PlanetKind> {
        match self {
            Self::Mars | Self::Jupiter | Self::Saturn => Some(PlanetKind::Superior),
            Self::Mercury | Self::Venus => Some(PlanetKind::Inferior),
            _ => None,
        }
    }

    /// Stable ordering index, used for deterministic pair ordering.
    pub const fn index(self) -> usize {
        match self {
            Self::Sun => 0,
            Self::Moon => 1,
            Self::Mars => 2,
            Self::Mercury => 3,
            Self::Jupiter => 4,
            Self::Venus => 5,
            Self::Saturn => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }
}

impl std::fmt::Display for CelestialBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
