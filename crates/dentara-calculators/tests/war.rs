use dentara_calculators::calculators::war::{
    calculate_war_score, ArchRelationship, ExtractionDifficulty, RadiographicDepth,
    WinterAngulation,
};

#[test]
fn minimum_score_is_an_easy_extraction() {
    let result = calculate_war_score(
        WinterAngulation::Vertical,
        ArchRelationship::ClassI,
        RadiographicDepth::PositionA,
    );
    assert_eq!(result.score, 3);
    assert_eq!(result.difficulty, ExtractionDifficulty::Easy);
    assert_eq!(result.estimated_duration, "15-20 minutes");
}

#[test]
fn horizontal_deep_class_three_is_difficult() {
    let result = calculate_war_score(
        WinterAngulation::Horizontal,
        ArchRelationship::ClassIII,
        RadiographicDepth::PositionC,
    );
    assert_eq!(result.score, 9);
    assert_eq!(result.difficulty, ExtractionDifficulty::Difficult);
    assert!(result.operative_notes.contains("nerve"));
}

#[test]
fn middle_band_is_moderate() {
    let result = calculate_war_score(
        WinterAngulation::Mesioangular,
        ArchRelationship::ClassII,
        RadiographicDepth::PositionB,
    );
    assert_eq!(result.score, 6);
    assert_eq!(result.difficulty, ExtractionDifficulty::Moderate);
    assert!(result.operative_notes.contains("sectioning"));
}

#[test]
fn difficulty_band_edges() {
    // Score 4 is the first moderate value.
    let four = calculate_war_score(
        WinterAngulation::Mesioangular,
        ArchRelationship::ClassI,
        RadiographicDepth::PositionA,
    );
    assert_eq!(four.score, 4);
    assert_eq!(four.difficulty, ExtractionDifficulty::Moderate);

    // Score 7 is the first difficult value.
    let seven = calculate_war_score(
        WinterAngulation::Distoangular,
        ArchRelationship::ClassI,
        RadiographicDepth::PositionB,
    );
    assert_eq!(seven.score, 7);
    assert_eq!(seven.difficulty, ExtractionDifficulty::Difficult);
}

#[test]
fn maximum_score_is_ten() {
    let result = calculate_war_score(
        WinterAngulation::Distoangular,
        ArchRelationship::ClassIII,
        RadiographicDepth::PositionC,
    );
    assert_eq!(result.score, 10);
    assert_eq!(result.difficulty, ExtractionDifficulty::Difficult);
}
