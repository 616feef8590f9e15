use std::collections::HashMap;

use dentara_calculators::calculators::cephalometric::{
    calculate_angles, skeletal_class_for, vertical_pattern_for, within_normal,
    CephalometricLandmarks, SkeletalClass, VerticalPattern, LANDMARK_KEYS,
};
use dentara_calculators::error::CalculatorError;
use dentara_calculators::fields::round1;
use dentara_core::models::landmark::Landmark;

fn landmarks() -> CephalometricLandmarks {
    CephalometricLandmarks {
        sella: Landmark::new(0.0, -10.0),
        nasion: Landmark::new(0.0, 0.0),
        a_point: Landmark::new(10.0, 0.0),
        b_point: Landmark::new(10.0, 1.0),
        orbitale: Landmark::new(0.0, 0.0),
        porion: Landmark::new(10.0, 0.0),
        gonion: Landmark::new(0.0, 5.0),
        gnathion: Landmark::new(10.0, 10.0),
    }
}

#[test]
fn computes_known_angle_set() {
    let angles = calculate_angles(&landmarks());
    assert_eq!(angles.sna, 90.0);
    assert_eq!(angles.snb, 95.7);
    assert_eq!(angles.anb, -5.7);
    assert_eq!(angles.fma, 26.6);
    assert_eq!(angles.skeletal_class, SkeletalClass::ClassIII);
    assert_eq!(angles.vertical_pattern, VerticalPattern::Normodivergent);
}

#[test]
fn anb_is_exactly_sna_minus_snb() {
    let mut set = landmarks();
    set.a_point = Landmark::new(137.0, 42.5);
    set.b_point = Landmark::new(120.25, 88.0);

    let angles = calculate_angles(&set);
    assert_eq!(angles.anb, round1(angles.sna - angles.snb));
}

#[test]
fn collinear_landmarks_do_not_panic() {
    let mut set = landmarks();

    // A on the same ray as S: angle collapses to 0.
    set.a_point = Landmark::new(0.0, -20.0);
    assert_eq!(calculate_angles(&set).sna, 0.0);

    // A on the opposite ray: angle opens to 180.
    set.a_point = Landmark::new(0.0, 10.0);
    assert_eq!(calculate_angles(&set).sna, 180.0);
}

#[test]
fn coincident_landmark_yields_zero_angle() {
    let mut set = landmarks();
    set.a_point = set.nasion;
    assert_eq!(calculate_angles(&set).sna, 0.0);
}

#[test]
fn skeletal_class_bands_are_inclusive_of_class_one_edges() {
    assert_eq!(skeletal_class_for(1.9), SkeletalClass::ClassIII);
    assert_eq!(skeletal_class_for(2.0), SkeletalClass::ClassI);
    assert_eq!(skeletal_class_for(4.0), SkeletalClass::ClassI);
    assert_eq!(skeletal_class_for(4.1), SkeletalClass::ClassII);
}

#[test]
fn vertical_pattern_bands_match_fma_normal_range() {
    assert_eq!(vertical_pattern_for(21.9), VerticalPattern::Hypodivergent);
    assert_eq!(vertical_pattern_for(22.0), VerticalPattern::Normodivergent);
    assert_eq!(vertical_pattern_for(28.0), VerticalPattern::Normodivergent);
    assert_eq!(vertical_pattern_for(28.1), VerticalPattern::Hyperdivergent);
}

#[test]
fn from_map_lists_every_missing_landmark() {
    let mut map = HashMap::new();
    map.insert("S".to_string(), Landmark::new(0.0, -10.0));
    map.insert("N".to_string(), Landmark::new(0.0, 0.0));

    let error = CephalometricLandmarks::from_map(&map).unwrap_err();
    match error {
        CalculatorError::MissingLandmarks { missing } => {
            assert_eq!(missing, vec!["A", "B", "Or", "Po", "Go", "Gn"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn from_map_accepts_a_complete_tracing() {
    let set = landmarks();
    let mut map = HashMap::new();
    for (key, point) in LANDMARK_KEYS.iter().zip([
        set.sella,
        set.nasion,
        set.a_point,
        set.b_point,
        set.orbitale,
        set.porion,
        set.gonion,
        set.gnathion,
    ]) {
        map.insert(key.to_string(), point);
    }

    let built = CephalometricLandmarks::from_map(&map).unwrap();
    assert_eq!(calculate_angles(&built).sna, calculate_angles(&set).sna);
}

#[test]
fn normal_range_lookup_is_pass_through_only() {
    assert_eq!(within_normal("sna", 82.0), Some(true));
    assert_eq!(within_normal("sna", 90.0), Some(false));
    assert_eq!(within_normal("fma", 25.0), Some(true));
    assert_eq!(within_normal("gonial", 120.0), None);
}
