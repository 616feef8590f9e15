use dentara_calculators::calculators::diagnosis::{
    rank_diagnoses, DiagnosisCandidate, DiagnosisInput,
};

fn confidence_of(candidates: &[DiagnosisCandidate], name: &str) -> Option<f64> {
    candidates
        .iter()
        .find(|c| c.diagnosis == name)
        .map(|c| c.confidence)
}

fn input(symptoms: &[&str], findings: &[&str], vitals: &[&str]) -> DiagnosisInput {
    DiagnosisInput {
        symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
        clinical_findings: findings.iter().map(|s| s.to_string()).collect(),
        vital_signs: vitals.iter().map(|s| s.to_string()).collect(),
    }
}

#[test]
fn empty_presentation_ranks_nothing() {
    assert!(rank_diagnoses(&DiagnosisInput::default()).is_empty());
}

#[test]
fn unknown_keys_rank_nothing() {
    let candidates = rank_diagnoses(&input(&["itchy_elbow"], &["green_aura"], &[]));
    assert!(candidates.is_empty());
}

#[test]
fn vital_signs_alone_never_qualify_a_diagnosis() {
    let candidates = rank_diagnoses(&input(&[], &[], &["fever", "lymphadenopathy"]));
    assert!(candidates.is_empty());
}

#[test]
fn classic_pulpitis_presentation_ranks_pulpitis_first() {
    let candidates = rank_diagnoses(&input(
        &["spontaneous_pain", "night_pain", "lingering_thermal_pain"],
        &["deep_caries", "cold_test_lingering"],
        &[],
    ));

    assert!(!candidates.is_empty());
    let top = &candidates[0];
    assert_eq!(top.diagnosis, "Irreversible pulpitis");
    assert_eq!(top.icd_code, "K04.02");
    assert_eq!(top.matched_symptoms, 3);
    assert_eq!(top.matched_findings, 2);
    assert_eq!(top.confidence, 0.70);
}

#[test]
fn output_is_sorted_by_confidence_descending() {
    let candidates = rank_diagnoses(&input(
        &["swelling", "pain_on_biting", "bleeding_gums"],
        &["percussion_tenderness", "deep_caries", "plaque_accumulation"],
        &["fever"],
    ));

    assert!(candidates.len() >= 2);
    for pair in candidates.windows(2) {
        assert!(pair[0].confidence >= pair[1].confidence);
    }
}

#[test]
fn confidence_is_monotone_in_matches() {
    let fewer = rank_diagnoses(&input(&[], &["deep_caries"], &[]));
    let more = rank_diagnoses(&input(&[], &["deep_caries", "cold_test_lingering"], &[]));

    let before = confidence_of(&fewer, "Irreversible pulpitis").unwrap();
    let after = confidence_of(&more, "Irreversible pulpitis").unwrap();
    assert!(after >= before);
}

#[test]
fn confidence_never_exceeds_one() {
    // Full match on every declared category.
    let candidates = rank_diagnoses(&input(
        &["burning_sensation", "altered_taste"],
        &["white_wipeable_plaques", "erythematous_mucosa"],
        &[],
    ));

    let top = &candidates[0];
    assert_eq!(top.diagnosis, "Oral candidiasis");
    assert_eq!(top.confidence, 1.0);
    for candidate in &candidates {
        assert!(candidate.confidence <= 1.0);
        assert!(candidate.confidence > 0.0);
    }
}

#[test]
fn full_ties_keep_knowledge_base_order() {
    // "malaise" is a symptom of both the acute apical abscess and
    // necrotizing ulcerative gingivitis profiles; both score identically
    // on this presentation, so declaration order decides.
    let candidates = rank_diagnoses(&input(&["malaise"], &[], &[]));

    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].diagnosis, "Acute apical abscess");
    assert_eq!(candidates[1].diagnosis, "Necrotizing ulcerative gingivitis");
    assert_eq!(candidates[0].confidence, candidates[1].confidence);
}

#[test]
fn repeated_calls_are_identical() {
    let presentation = input(&["trismus", "swelling"], &["partially_erupted_third_molar"], &[]);
    let first = rank_diagnoses(&presentation);
    let second = rank_diagnoses(&presentation);

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.diagnosis, b.diagnosis);
        assert_eq!(a.confidence, b.confidence);
    }
}
