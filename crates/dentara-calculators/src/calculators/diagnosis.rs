//! Provisional diagnosis ranking: weighted overlap between the reported
//! presentation and a static knowledge base of dental diagnoses.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::fields::InputField;
use crate::Calculator;

/// Relative weight of each evidence category. Clinical findings outrank
/// reported symptoms; vital signs contribute as a tie-breaker. The weights
/// are normalized over the categories a profile actually declares, so a
/// diagnosis with no expected vital signs is not penalized for them.
pub const FINDING_WEIGHT: f64 = 0.50;
pub const SYMPTOM_WEIGHT: f64 = 0.35;
pub const VITAL_WEIGHT: f64 = 0.15;

/// The reported presentation. Keys are snake_case identifiers matched
/// exactly against the knowledge base.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiagnosisInput {
    pub symptoms: Vec<String>,
    pub clinical_findings: Vec<String>,
    #[serde(default)]
    pub vital_signs: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiagnosisCandidate {
    pub diagnosis: String,
    pub icd_code: String,
    pub category: String,
    /// Weighted overlap ratio in [0, 1], 2 decimals.
    pub confidence: f64,
    pub matched_symptoms: usize,
    pub matched_findings: usize,
}

struct DiagnosisProfile {
    name: &'static str,
    icd_code: &'static str,
    category: &'static str,
    symptoms: &'static [&'static str],
    findings: &'static [&'static str],
    vital_signs: &'static [&'static str],
}

static KNOWLEDGE_BASE: &[DiagnosisProfile] = &[
    DiagnosisProfile {
        name: "Reversible pulpitis",
        icd_code: "K04.01",
        category: "Endodontic",
        symptoms: &["thermal_sensitivity", "pain_on_sweet", "short_sharp_pain"],
        findings: &["deep_caries", "defective_restoration", "cold_test_resolving"],
        vital_signs: &[],
    },
    DiagnosisProfile {
        name: "Irreversible pulpitis",
        icd_code: "K04.02",
        category: "Endodontic",
        symptoms: &[
            "spontaneous_pain",
            "lingering_thermal_pain",
            "night_pain",
            "throbbing_pain",
        ],
        findings: &["deep_caries", "cold_test_lingering", "widened_pdl_space"],
        vital_signs: &[],
    },
    DiagnosisProfile {
        name: "Acute apical abscess",
        icd_code: "K04.7",
        category: "Endodontic",
        symptoms: &["severe_pain", "swelling", "pain_on_biting", "malaise"],
        findings: &[
            "percussion_tenderness",
            "periapical_radiolucency",
            "fluctuant_swelling",
            "non_vital_pulp",
        ],
        vital_signs: &["fever", "lymphadenopathy"],
    },
    DiagnosisProfile {
        name: "Chronic apical periodontitis",
        icd_code: "K04.5",
        category: "Endodontic",
        symptoms: &["mild_discomfort", "occasional_pain_on_biting"],
        findings: &["periapical_radiolucency", "non_vital_pulp", "sinus_tract"],
        vital_signs: &[],
    },
    DiagnosisProfile {
        name: "Plaque-induced gingivitis",
        icd_code: "K05.10",
        category: "Periodontal",
        symptoms: &["bleeding_gums", "gum_tenderness"],
        findings: &[
            "marginal_erythema",
            "plaque_accumulation",
            "bleeding_on_probing",
        ],
        vital_signs: &[],
    },
    DiagnosisProfile {
        name: "Chronic periodontitis",
        icd_code: "K05.30",
        category: "Periodontal",
        symptoms: &["bleeding_gums", "loose_teeth", "bad_breath", "gum_recession"],
        findings: &[
            "pocket_depth_increased",
            "radiographic_bone_loss",
            "tooth_mobility",
            "calculus_deposits",
        ],
        vital_signs: &[],
    },
    DiagnosisProfile {
        name: "Periodontal abscess",
        icd_code: "K05.21",
        category: "Periodontal",
        symptoms: &["localized_swelling", "pain_on_chewing", "bad_taste"],
        findings: &["deep_pocket_with_suppuration", "tooth_mobility", "vital_pulp"],
        vital_signs: &["fever"],
    },
    DiagnosisProfile {
        name: "Necrotizing ulcerative gingivitis",
        icd_code: "A69.1",
        category: "Periodontal",
        symptoms: &["severe_gum_pain", "bad_breath", "metallic_taste", "malaise"],
        findings: &[
            "punched_out_papillae",
            "grey_pseudomembrane",
            "spontaneous_bleeding",
        ],
        vital_signs: &["fever", "lymphadenopathy"],
    },
    DiagnosisProfile {
        name: "Pericoronitis",
        icd_code: "K05.22",
        category: "Surgical",
        symptoms: &[
            "pain_distal_to_last_tooth",
            "trismus",
            "difficulty_swallowing",
            "swelling",
        ],
        findings: &[
            "partially_erupted_third_molar",
            "inflamed_operculum",
            "pus_under_operculum",
        ],
        vital_signs: &["fever", "lymphadenopathy"],
    },
    DiagnosisProfile {
        name: "Alveolar osteitis",
        icd_code: "K10.3",
        category: "Surgical",
        symptoms: &["severe_pain_post_extraction", "bad_taste", "bad_breath"],
        findings: &["empty_socket", "exposed_bone", "lost_clot"],
        vital_signs: &[],
    },
    DiagnosisProfile {
        name: "Cracked tooth syndrome",
        icd_code: "K03.81",
        category: "Endodontic",
        symptoms: &["sharp_pain_on_release", "pain_on_biting", "thermal_sensitivity"],
        findings: &["visible_crack_line", "positive_bite_test", "intact_restoration"],
        vital_signs: &[],
    },
    DiagnosisProfile {
        name: "Temporomandibular joint disorder",
        icd_code: "M26.60",
        category: "Temporomandibular",
        symptoms: &[
            "jaw_pain",
            "joint_clicking",
            "limited_opening",
            "morning_stiffness",
            "headache",
        ],
        findings: &["tmj_tenderness", "deviation_on_opening", "muscle_tenderness"],
        vital_signs: &[],
    },
    DiagnosisProfile {
        name: "Oral candidiasis",
        icd_code: "B37.0",
        category: "Mucosal",
        symptoms: &["burning_sensation", "altered_taste"],
        findings: &["white_wipeable_plaques", "erythematous_mucosa"],
        vital_signs: &[],
    },
];

/// Rank candidate diagnoses against the knowledge base.
///
/// A candidate appears only if it matches at least one symptom or one
/// clinical finding; vital signs alone never qualify a diagnosis. The
/// output is sorted by confidence descending, ties broken by matched
/// findings, then matched symptoms, then knowledge-base order.
pub fn rank_diagnoses(input: &DiagnosisInput) -> Vec<DiagnosisCandidate> {
    let symptoms: HashSet<&str> = input.symptoms.iter().map(String::as_str).collect();
    let findings: HashSet<&str> = input.clinical_findings.iter().map(String::as_str).collect();
    let vitals: HashSet<&str> = input.vital_signs.iter().map(String::as_str).collect();

    let mut candidates: Vec<DiagnosisCandidate> = KNOWLEDGE_BASE
        .iter()
        .filter_map(|profile| {
            let matched_symptoms = overlap(profile.symptoms, &symptoms);
            let matched_findings = overlap(profile.findings, &findings);
            let matched_vitals = overlap(profile.vital_signs, &vitals);

            if matched_symptoms == 0 && matched_findings == 0 {
                return None;
            }

            let confidence = weighted_confidence(
                (matched_symptoms, profile.symptoms.len()),
                (matched_findings, profile.findings.len()),
                (matched_vitals, profile.vital_signs.len()),
            );

            Some(DiagnosisCandidate {
                diagnosis: profile.name.to_string(),
                icd_code: profile.icd_code.to_string(),
                category: profile.category.to_string(),
                confidence,
                matched_symptoms,
                matched_findings,
            })
        })
        .collect();

    // Stable sort keeps knowledge-base declaration order for full ties.
    candidates.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| b.matched_findings.cmp(&a.matched_findings))
            .then_with(|| b.matched_symptoms.cmp(&a.matched_symptoms))
    });

    candidates
}

fn overlap(expected: &[&str], reported: &HashSet<&str>) -> usize {
    expected.iter().filter(|key| reported.contains(**key)).count()
}

/// Weighted mean of matched/expected ratios over the categories the profile
/// declares, clipped to [0, 1] and reported at 2 decimals. Monotone:
/// another match in any category never lowers the result.
fn weighted_confidence(
    symptoms: (usize, usize),
    findings: (usize, usize),
    vitals: (usize, usize),
) -> f64 {
    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for ((matched, expected), weight) in [
        (symptoms, SYMPTOM_WEIGHT),
        (findings, FINDING_WEIGHT),
        (vitals, VITAL_WEIGHT),
    ] {
        if expected > 0 {
            numerator += weight * (matched as f64 / expected as f64);
            denominator += weight;
        }
    }
    if denominator == 0.0 {
        return 0.0;
    }
    let confidence = (numerator / denominator).clamp(0.0, 1.0);
    (confidence * 100.0).round() / 100.0
}

/// Registry entry for the provisional-diagnosis engine.
pub struct ProvisionalDiagnosis;

impl Calculator for ProvisionalDiagnosis {
    fn id(&self) -> &str {
        "provisional_diagnosis"
    }

    fn name(&self) -> &str {
        "Provisional Diagnosis"
    }

    /// Inputs are symptom/finding key sets, not scalar form fields.
    fn fields(&self) -> &[InputField] {
        &[]
    }
}
