//! Cairo recession types (RT1–RT3) from two clinical observations:
//! interproximal attachment loss and extension to the mucogingival junction.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use dentara_core::models::tooth::ToothNumber;

use crate::fields::{InputField, ValueRange};
use crate::Calculator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "UPPERCASE")]
#[ts(export)]
pub enum RecessionType {
    Rt1,
    Rt2,
    Rt3,
}

impl std::fmt::Display for RecessionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rt1 => write!(f, "RT1"),
            Self::Rt2 => write!(f, "RT2"),
            Self::Rt3 => write!(f, "RT3"),
        }
    }
}

/// Classify a recession defect.
///
/// With no interproximal attachment loss the defect is RT1 regardless of
/// the MGJ flag; the flag only separates RT2 from RT3.
pub fn classify_recession(has_interdental_loss: bool, extends_to_mgj: bool) -> RecessionType {
    match (has_interdental_loss, extends_to_mgj) {
        (false, _) => RecessionType::Rt1,
        (true, false) => RecessionType::Rt2,
        (true, true) => RecessionType::Rt3,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecessionDetails {
    pub tooth: ToothNumber,
    pub classification: RecessionType,
    pub description: String,
    pub prognosis: String,
    pub treatment: String,
}

/// Static description, prognosis, and treatment text for a classified
/// defect on a given tooth.
pub fn recession_details(tooth: ToothNumber, classification: RecessionType) -> RecessionDetails {
    let (description, prognosis, treatment) = match classification {
        RecessionType::Rt1 => (
            "Gingival recession with no loss of interproximal attachment.",
            "Complete root coverage is achievable.",
            "Coronally advanced flap, with or without a connective tissue graft.",
        ),
        RecessionType::Rt2 => (
            "Gingival recession with interproximal attachment loss, not \
             extending to the mucogingival junction.",
            "Partial to complete root coverage can be expected.",
            "Coronally advanced flap with connective tissue graft; manage \
             the interproximal tissue first.",
        ),
        RecessionType::Rt3 => (
            "Gingival recession with interproximal attachment loss extending \
             to or beyond the mucogingival junction.",
            "Full root coverage is not achievable.",
            "Limited coverage goals only; graft to augment keratinized \
             tissue where indicated, otherwise monitor.",
        ),
    };

    RecessionDetails {
        tooth,
        classification,
        description: description.to_string(),
        prognosis: prognosis.to_string(),
        treatment: treatment.to_string(),
    }
}

/// Registry entry for the Cairo recession classifier.
pub struct CairoRecession;

impl Calculator for CairoRecession {
    fn id(&self) -> &str {
        "cairo_recession"
    }

    fn name(&self) -> &str {
        "Cairo Recession Classification"
    }

    fn fields(&self) -> &[InputField] {
        static FIELDS: LazyLock<Vec<InputField>> = LazyLock::new(|| {
            let flag = ValueRange {
                min: 0.0,
                max: 1.0,
                step: Some(1.0),
            };

            vec![
                InputField {
                    id: "has_interdental_loss".to_string(),
                    name: "Interproximal attachment loss present".to_string(),
                    unit: None,
                    range: flag,
                },
                InputField {
                    id: "extends_to_mgj".to_string(),
                    name: "Recession extends to the mucogingival junction".to_string(),
                    unit: None,
                    range: flag,
                },
            ]
        });
        &FIELDS
    }
}
