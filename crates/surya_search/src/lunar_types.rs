//! Result types for the lunar-theory queries.

/// One eclipse-possibility screen.
///
/// `possible` is a coarse geometric test, not a prediction: it says the
/// syzygy is close enough and the Moon near enough the node that an
/// eclipse cannot be ruled out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipseTest {
    pub possible: bool,
    /// Modular distance of the elongation from the relevant syzygy
    /// (0 for solar, 180 for lunar), degrees.
    pub syzygy_offset_deg: f64,
    /// Latitude limit minus |latitude|, degrees. Negative when the Moon
    /// stands too far from the node.
    pub margin_deg: f64,
    /// Qualitative magnitude in [0, 1]: the latitude margin as a
    /// fraction of the limit. Zero whenever the screen does not fire.
    pub magnitude: f64,
}

/// Lunar state for one date: phase, latitude, and eclipse screens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarPhenomena {
    /// Elapsed days since the Kali Yuga epoch.
    pub ahargana: f64,
    /// True longitudes feeding the phase, degrees in [0, 360).
    pub sun_longitude: f64,
    pub moon_longitude: f64,
    /// Mean longitude of the ascending node.
    pub node_longitude: f64,
    /// Moon minus Sun, degrees in [0, 360).
    pub elongation_deg: f64,
    /// Tithi number, 1..=30. Tithi 1 begins at new moon.
    pub tithi_number: u32,
    /// Fraction of the running tithi already elapsed, [0, 1).
    pub completion_fraction: f64,
    /// Days until the next tithi begins, from the mean Moon and Sun
    /// daily motions.
    pub time_to_next_tithi_days: f64,
    /// Ecliptic latitude of the Moon, degrees, signed.
    pub latitude_deg: f64,
    pub solar_eclipse: EclipseTest,
    pub lunar_eclipse: EclipseTest,
}

impl LunarPhenomena {
    /// Waxing fortnight: tithis 1 through 15.
    pub const fn is_waxing(&self) -> bool {
        self.tithi_number <= 15
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waxing_boundary() {
        let mut p = LunarPhenomena {
            ahargana: 0.0,
            sun_longitude: 0.0,
            moon_longitude: 0.0,
            node_longitude: 0.0,
            elongation_deg: 0.0,
            tithi_number: 15,
            completion_fraction: 0.0,
            time_to_next_tithi_days: 0.0,
            latitude_deg: 0.0,
            solar_eclipse: EclipseTest {
                possible: false,
                syzygy_offset_deg: 0.0,
                margin_deg: 0.0,
                magnitude: 0.0,
            },
            lunar_eclipse: EclipseTest {
                possible: false,
                syzygy_offset_deg: 0.0,
                margin_deg: 0.0,
                magnitude: 0.0,
            },
        };
        assert!(p.is_waxing());
        p.tithi_number = 16;
        assert!(!p.is_waxing());
    }
}
