//! Conjunction detection over the seven planets.
//!
//! Works on the shorter arc between true longitudes, so a pair at 359
//! and 1 degrees is 2 degrees apart. The group detector slides a fixed
//! circular window over the sorted longitudes, duplicating the array
//! shifted by 360 so runs across the wrap point are seen once.

use surya_core::{
    CelestialBody, EXACT_CONJUNCTION_LIMIT_DEG, OPPOSITION_LIMIT_DEG, PLANETARY_GROUP_LIMIT_DEG,
    QUADRATURE_LIMIT_DEG, SEVEN_PLANETS, circular_difference, normalize_360,
};
use surya_graha::planetary_position;

use crate::conjunction_types::{
    Configuration, ConfigurationEvent, ConjunctionEvent, ConjunctionKind, PlanetaryGroup,
};
use crate::error::SearchError;

fn classify(separation_deg: f64) -> ConjunctionKind {
    if separation_deg <= EXACT_CONJUNCTION_LIMIT_DEG {
        ConjunctionKind::Exact
    } else {
        ConjunctionKind::Close
    }
}

/// All pairs among `longitudes` with separation within `tolerance_deg`,
/// stamped with the given date. Sorted by ascending separation, ties by
/// pair name. Fails with [`SearchError::InvalidTolerance`] outside
/// (0, 180].
pub fn find_conjunctions(
    longitudes: &[(CelestialBody, f64)],
    tolerance_deg: f64,
    year: i32,
    month: u32,
    day: u32,
) -> Result<Vec<ConjunctionEvent>, SearchError> {
    if !(tolerance_deg > 0.0 && tolerance_deg <= 180.0) {
        return Err(SearchError::InvalidTolerance(tolerance_deg));
    }

    let mut events = Vec::new();
    for (i, &(a, lon_a)) in longitudes.iter().enumerate() {
        for &(b, lon_b) in &longitudes[i + 1..] {
            let separation = circular_difference(lon_a, lon_b);
            if separation > tolerance_deg {
                continue;
            }
            let (body_a, body_b) = if a.name() <= b.name() { (a, b) } else { (b, a) };
            events.push(ConjunctionEvent {
                body_a,
                body_b,
                separation_deg: separation,
                kind: classify(separation),
                year,
                month,
                day,
            });
        }
    }

    events.sort_by(|x, y| {
        x.separation_deg
            .total_cmp(&y.separation_deg)
            .then_with(|| x.body_a.name().cmp(y.body_a.name()))
            .then_with(|| x.body_b.name().cmp(y.body_b.name()))
    });
    Ok(events)
}

/// Conjunctions among the seven planets on a calendar date.
pub fn conjunctions_on_date(
    year: i32,
    month: u32,
    day: u32,
    tolerance_deg: f64,
) -> Result<Vec<ConjunctionEvent>, SearchError> {
    let longitudes = seven_true_longitudes(year, month, day)?;
    find_conjunctions(&longitudes, tolerance_deg, year, month, day)
}

/// True longitudes of the seven planets, input to the detectors.
pub fn seven_true_longitudes(
    year: i32,
    month: u32,
    day: u32,
) -> Result<Vec<(CelestialBody, f64)>, SearchError> {
    SEVEN_PLANETS
        .into_iter()
        .map(|body| {
            let pos = planetary_position(body, year, month, day)?;
            Ok((body, pos.true_longitude))
        })
        .collect()
}

/// Classify a separation into a special configuration, if any.
///
/// Precedence when windows could overlap: conjunction (exact limit),
/// then opposition, then quadrature. The separation is the shorter arc,
/// so the 90 and 270 degree quadratures land in the same window.
pub fn classify_configuration(separation_deg: f64) -> Option<Configuration> {
    if separation_deg <= EXACT_CONJUNCTION_LIMIT_DEG {
        Some(Configuration::Conjunction)
    } else if (separation_deg - 180.0).abs() <= OPPOSITION_LIMIT_DEG {
        Some(Configuration::Opposition)
    } else if (separation_deg - 90.0).abs() <= QUADRATURE_LIMIT_DEG {
        Some(Configuration::Quadrature)
    } else {
        None
    }
}

/// All pairs among `longitudes` forming a special configuration,
/// stamped with the given date. Sorted by ascending separation, ties by
/// pair name.
pub fn special_configurations(
    longitudes: &[(CelestialBody, f64)],
    year: i32,
    month: u32,
    day: u32,
) -> Vec<ConfigurationEvent> {
    let mut events = Vec::new();
    for (i, &(a, lon_a)) in longitudes.iter().enumerate() {
        for &(b, lon_b) in &longitudes[i + 1..] {
            let separation = circular_difference(lon_a, lon_b);
            let Some(configuration) = classify_configuration(separation) else {
                continue;
            };
            let (body_a, body_b) = if a.name() <= b.name() { (a, b) } else { (b, a) };
            events.push(ConfigurationEvent {
                body_a,
                body_b,
                separation_deg: separation,
                configuration,
                year,
                month,
                day,
            });
        }
    }
    events.sort_by(|x, y| {
        x.separation_deg
            .total_cmp(&y.separation_deg)
            .then_with(|| x.body_a.name().cmp(y.body_a.name()))
            .then_with(|| x.body_b.name().cmp(y.body_b.name()))
    });
    events
}

/// Special configurations among the seven planets on a calendar date.
pub fn special_configurations_on_date(
    year: i32,
    month: u32,
    day: u32,
) -> Result<Vec<ConfigurationEvent>, SearchError> {
    let longitudes = seven_true_longitudes(year, month, day)?;
    Ok(special_configurations(&longitudes, year, month, day))
}

/// Largest run of at least three bodies inside one circular window.
///
/// Preference order: more members, then smaller span, then smaller
/// starting longitude. `None` when no three bodies fit the window.
pub fn largest_group(
    longitudes: &[(CelestialBody, f64)],
    window_deg: f64,
) -> Option<PlanetaryGroup> {
    let n = longitudes.len();
    if n < 3 {
        return None;
    }

    let mut sorted: Vec<(CelestialBody, f64)> = longitudes
        .iter()
        .map(|&(b, lon)| (b, normalize_360(lon)))
        .collect();
    sorted.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.name().cmp(b.0.name())));

    // Second copy shifted by a turn exposes wrap-around runs.
    let mut extended = sorted.clone();
    extended.extend(sorted.iter().map(|&(b, lon)| (b, lon + 360.0)));

    let mut best: Option<PlanetaryGroup> = None;
    for i in 0..n {
        let mut j = i;
        while j + 1 < i + n && extended[j + 1].1 - extended[i].1 <= window_deg {
            j += 1;
        }
        let count = j - i + 1;
        if count < 3 {
            continue;
        }
        let candidate = PlanetaryGroup {
            bodies: extended[i..=j].iter().map(|&(b, _)| b).collect(),
            start_deg: extended[i].1,
            span_deg: extended[j].1 - extended[i].1,
        };
        let better = match &best {
            None => true,
            Some(b) => {
                candidate.bodies.len() > b.bodies.len()
                    || (candidate.bodies.len() == b.bodies.len()
                        && (candidate.span_deg < b.span_deg
                            || (candidate.span_deg == b.span_deg
                                && candidate.start_deg < b.start_deg)))
            }
        };
        if better {
            best = Some(candidate);
        }
    }
    best
}

/// Largest planetary group on a calendar date, at the standard window.
pub fn planetary_group_on_date(
    year: i32,
    month: u32,
    day: u32,
) -> Result<Option<PlanetaryGroup>, SearchError> {
    let longitudes = seven_true_longitudes(year, month, day)?;
    Ok(largest_group(&longitudes, PLANETARY_GROUP_LIMIT_DEG))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATE: (i32, u32, u32) = (2024, 1, 1);

    fn pairs(
        longitudes: &[(CelestialBody, f64)],
        tolerance: f64,
    ) -> Vec<ConjunctionEvent> {
        find_conjunctions(longitudes, tolerance, DATE.0, DATE.1, DATE.2).unwrap()
    }

    #[test]
    fn wrap_around_pair_detected() {
        let lons = [
            (CelestialBody::Mars, 359.0),
            (CelestialBody::Venus, 1.0),
            (CelestialBody::Saturn, 180.0),
        ];
        let events = pairs(&lons, 5.0);
        assert_eq!(events.len(), 1);
        assert!((events[0].separation_deg - 2.0).abs() < 1e-12);
        assert_eq!(events[0].body_a, CelestialBody::Mars);
        assert_eq!(events[0].body_b, CelestialBody::Venus);
    }

    #[test]
    fn exact_versus_close() {
        let lons = [
            (CelestialBody::Sun, 10.0),
            (CelestialBody::Mercury, 10.5),
            (CelestialBody::Jupiter, 13.0),
        ];
        let events = pairs(&lons, 5.0);
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].kind, ConjunctionKind::Exact);
        // Mercury-Jupiter at 2.5 and Sun-Jupiter at 3.0 are close only.
        assert_eq!(events[1].kind, ConjunctionKind::Close);
        assert_eq!(events[2].kind, ConjunctionKind::Close);
    }

    #[test]
    fn sorted_by_separation_then_name() {
        let lons = [
            (CelestialBody::Venus, 0.0),
            (CelestialBody::Mars, 3.0),
            (CelestialBody::Saturn, 6.0),
        ];
        let events = pairs(&lons, 5.0);
        // Mars-Saturn and Mars-Venus tie at 3.0; name order breaks it.
        assert_eq!(events.len(), 2);
        assert_eq!(
            (events[0].body_a, events[0].body_b),
            (CelestialBody::Mars, CelestialBody::Saturn)
        );
        assert_eq!(
            (events[1].body_a, events[1].body_b),
            (CelestialBody::Mars, CelestialBody::Venus)
        );
    }

    #[test]
    fn symmetric_under_input_order() {
        let forward = [
            (CelestialBody::Sun, 100.0),
            (CelestialBody::Moon, 102.0),
            (CelestialBody::Mars, 250.0),
        ];
        let mut reversed = forward;
        reversed.reverse();
        assert_eq!(pairs(&forward, 5.0), pairs(&reversed, 5.0));
    }

    #[test]
    fn no_self_conjunction() {
        let lons = [(CelestialBody::Sun, 10.0), (CelestialBody::Moon, 11.0)];
        for e in pairs(&lons, 180.0) {
            assert_ne!(e.body_a, e.body_b);
        }
    }

    #[test]
    fn tolerance_validated() {
        let lons = [(CelestialBody::Sun, 0.0), (CelestialBody::Moon, 1.0)];
        for bad in [0.0, -1.0, 181.0, f64::NAN] {
            assert!(matches!(
                find_conjunctions(&lons, bad, 2024, 1, 1),
                Err(SearchError::InvalidTolerance(_))
            ));
        }
    }

    #[test]
    fn configuration_windows() {
        assert_eq!(
            classify_configuration(0.5),
            Some(Configuration::Conjunction)
        );
        assert_eq!(classify_configuration(1.0), Some(Configuration::Conjunction));
        assert_eq!(classify_configuration(3.0), None);
        assert_eq!(classify_configuration(88.0), Some(Configuration::Quadrature));
        assert_eq!(classify_configuration(95.0), Some(Configuration::Quadrature));
        assert_eq!(classify_configuration(96.0), None);
        assert_eq!(classify_configuration(176.0), Some(Configuration::Opposition));
        assert_eq!(classify_configuration(180.0), Some(Configuration::Opposition));
        assert_eq!(classify_configuration(170.0), None);
    }

    #[test]
    fn quadrature_found_on_far_side() {
        // 270 deg apart reads as a 90 deg shorter arc.
        let lons = [
            (CelestialBody::Mars, 10.0),
            (CelestialBody::Venus, 280.0),
        ];
        let events = special_configurations(&lons, DATE.0, DATE.1, DATE.2);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].configuration, Configuration::Quadrature);
        assert!((events[0].separation_deg - 90.0).abs() < 1e-12);
    }

    #[test]
    fn close_pair_is_not_a_configuration() {
        // Inside the reporting tolerance but outside the exact limit.
        let lons = [
            (CelestialBody::Sun, 10.0),
            (CelestialBody::Mercury, 13.0),
        ];
        assert!(special_configurations(&lons, DATE.0, DATE.1, DATE.2).is_empty());
    }

    #[test]
    fn group_across_wrap() {
        let lons = [
            (CelestialBody::Mars, 350.0),
            (CelestialBody::Venus, 358.0),
            (CelestialBody::Jupiter, 10.0),
            (CelestialBody::Saturn, 180.0),
        ];
        let group = largest_group(&lons, 30.0).unwrap();
        assert_eq!(group.bodies.len(), 3);
        assert_eq!(group.start_deg, 350.0);
        assert!((group.span_deg - 20.0).abs() < 1e-12);
    }

    #[test]
    fn no_group_when_spread() {
        let lons = [
            (CelestialBody::Mars, 0.0),
            (CelestialBody::Venus, 90.0),
            (CelestialBody::Jupiter, 180.0),
            (CelestialBody::Saturn, 270.0),
        ];
        assert!(largest_group(&lons, 30.0).is_none());
    }

    #[test]
    fn bigger_group_preferred() {
        let lons = [
            (CelestialBody::Sun, 0.0),
            (CelestialBody::Mercury, 1.0),
            (CelestialBody::Venus, 2.0),
            (CelestialBody::Mars, 100.0),
            (CelestialBody::Jupiter, 101.0),
            (CelestialBody::Saturn, 102.0),
            (CelestialBody::Moon, 103.0),
        ];
        let group = largest_group(&lons, 30.0).unwrap();
        assert_eq!(group.bodies.len(), 4);
        assert_eq!(group.start_deg, 100.0);
    }
}
