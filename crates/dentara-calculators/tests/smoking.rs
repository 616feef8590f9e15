use dentara_calculators::calculators::smoking::{calculate_smoking_index, SmokingRisk};

#[test]
fn index_is_product_of_inputs() {
    let result = calculate_smoking_index(15.0, 12.0);
    assert_eq!(result.index, 180.0);
}

#[test]
fn zero_consumption_is_low_risk() {
    let result = calculate_smoking_index(0.0, 40.0);
    assert_eq!(result.index, 0.0);
    assert_eq!(result.risk, SmokingRisk::Low);
    assert!(result.mandatory_actions.is_empty());
}

#[test]
fn moderate_band_starts_at_one_hundred() {
    let below = calculate_smoking_index(11.0, 9.0);
    assert_eq!(below.index, 99.0);
    assert_eq!(below.risk, SmokingRisk::Low);

    let at = calculate_smoking_index(10.0, 10.0);
    assert_eq!(at.index, 100.0);
    assert_eq!(at.risk, SmokingRisk::Moderate);
}

#[test]
fn two_hundred_is_already_high_risk() {
    let result = calculate_smoking_index(20.0, 10.0);
    assert_eq!(result.index, 200.0);
    assert_eq!(result.risk, SmokingRisk::High);
}

#[test]
fn very_high_band_starts_above_four_hundred() {
    let at = calculate_smoking_index(20.0, 20.0);
    assert_eq!(at.index, 400.0);
    assert_eq!(at.risk, SmokingRisk::High);

    let above = calculate_smoking_index(45.0, 10.0);
    assert_eq!(above.index, 450.0);
    assert_eq!(above.risk, SmokingRisk::VeryHigh);
}

#[test]
fn mandatory_actions_appear_from_two_hundred() {
    let below = calculate_smoking_index(10.0, 19.0);
    assert!(below.mandatory_actions.is_empty());

    let at = calculate_smoking_index(10.0, 20.0);
    assert_eq!(at.mandatory_actions.len(), 4);
    assert!(at
        .mandatory_actions
        .iter()
        .any(|action| action.contains("cessation")));
    assert!(at
        .mandatory_actions
        .iter()
        .any(|action| action.contains("3-month")));
}

#[test]
fn every_tier_carries_risk_text() {
    for (cigarettes, years) in [(1.0, 1.0), (10.0, 12.0), (20.0, 15.0), (30.0, 20.0)] {
        let result = calculate_smoking_index(cigarettes, years);
        assert!(!result.perio_risk.is_empty());
        assert!(!result.oral_cancer_risk.is_empty());
    }
}
