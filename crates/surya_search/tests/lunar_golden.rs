//! Golden-value tests for the lunar theory.
//!
//! Reference values come from an independent implementation of the same
//! tables and iteration rules, evaluated at double precision.

use surya_search::lunar_phenomena;

const TOL: f64 = 1e-6;

#[test]
fn ordinary_date_2024_01_15() {
    let p = lunar_phenomena(2024, 1, 15).unwrap();
    assert_eq!(p.ahargana, 1_871_872.0);
    assert!((p.elongation_deg - 207.2478231885).abs() < TOL, "{p:?}");
    assert_eq!(p.tithi_number, 18);
    assert!((p.completion_fraction - 0.2706519324).abs() < TOL);
    assert!((p.time_to_next_tithi_days - 0.7179357592).abs() < TOL);
    assert!((p.latitude_deg - -3.2830926454).abs() < TOL);
    assert!(!p.is_waxing());
    // Far from both syzygies: neither screen fires.
    assert!(!p.solar_eclipse.possible);
    assert!(!p.lunar_eclipse.possible);
}

#[test]
fn solar_eclipse_window_2024_03_27() {
    let p = lunar_phenomena(2024, 3, 27).unwrap();
    assert!((p.elongation_deg - 4.750707671).abs() < TOL, "{p:?}");
    assert_eq!(p.tithi_number, 1);
    assert!((p.completion_fraction - 0.395892306).abs() < TOL);
    assert!((p.latitude_deg - 0.279234863).abs() < TOL);
    assert!(p.solar_eclipse.possible, "{:?}", p.solar_eclipse);
    assert!((p.solar_eclipse.syzygy_offset_deg - 4.750707671).abs() < TOL);
    assert!(p.solar_eclipse.margin_deg > 0.0);
    assert!((p.solar_eclipse.magnitude - 0.8138434247).abs() < TOL);
    assert!((p.time_to_next_tithi_days - 0.5946550561).abs() < TOL);
    assert!(!p.lunar_eclipse.possible);
    assert_eq!(p.lunar_eclipse.magnitude, 0.0);
}

#[test]
fn lunar_eclipse_window_2024_04_10() {
    let p = lunar_phenomena(2024, 4, 10).unwrap();
    assert!((p.elongation_deg - 180.402819829).abs() < TOL, "{p:?}");
    assert_eq!(p.tithi_number, 16);
    assert!((p.completion_fraction - 0.033568319).abs() < TOL);
    assert!((p.latitude_deg - 0.412189037).abs() < TOL);
    assert!(p.lunar_eclipse.possible, "{:?}", p.lunar_eclipse);
    assert!((p.lunar_eclipse.syzygy_offset_deg - 0.402819829).abs() < TOL);
    assert!((p.lunar_eclipse.magnitude - 0.5878109630).abs() < TOL);
    assert!(!p.solar_eclipse.possible);
}

#[test]
fn waxing_date_2000_01_01() {
    let p = lunar_phenomena(2000, 1, 1).unwrap();
    assert_eq!(p.tithi_number, 9);
    assert!((p.latitude_deg - -4.064395464).abs() < TOL);
    assert!(p.is_waxing());
}

#[test]
fn longitudes_match_position_pipeline() {
    let p = lunar_phenomena(2024, 3, 27).unwrap();
    assert!((p.sun_longitude - 351.190883205).abs() < TOL);
    assert!((p.moon_longitude - 355.941590876).abs() < TOL);
    assert!((p.node_longitude - 179.497181469).abs() < TOL);
}

#[test]
fn latitude_within_physical_bound() {
    for day in 1..=28 {
        let p = lunar_phenomena(2024, 2, day).unwrap();
        assert!(p.latitude_deg.abs() <= 4.5, "day {day}: {}", p.latitude_deg);
        assert!((1..=30).contains(&p.tithi_number), "day {day}");
        assert!((0.0..1.0).contains(&p.completion_fraction), "day {day}");
    }
}

#[test]
fn out_of_range_date_propagates() {
    assert!(lunar_phenomena(-3200, 1, 1).is_err());
}
