//! Smoking index: cigarettes/day × years smoked, tiered for periodontal and
//! oral-cancer risk. Not pack-years — the product is deliberately undivided.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::fields::{InputField, ValueRange};
use crate::Calculator;

/// Tier thresholds over the raw index. An index of exactly
/// `HIGH_THRESHOLD` is already High; above `VERY_HIGH_THRESHOLD` is
/// Very High.
pub const MODERATE_THRESHOLD: f64 = 100.0;
pub const HIGH_THRESHOLD: f64 = 200.0;
pub const VERY_HIGH_THRESHOLD: f64 = 400.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SmokingRisk {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl std::fmt::Display for SmokingRisk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Moderate => write!(f, "Moderate"),
            Self::High => write!(f, "High"),
            Self::VeryHigh => write!(f, "Very High"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SmokingIndexResult {
    pub index: f64,
    pub risk: SmokingRisk,
    pub perio_risk: String,
    pub oral_cancer_risk: String,
    /// Non-empty from `HIGH_THRESHOLD` upward: the actions are mandatory,
    /// not advisory, once the index reaches 200.
    pub mandatory_actions: Vec<String>,
}

pub fn calculate_smoking_index(cigarettes_per_day: f64, years_smoked: f64) -> SmokingIndexResult {
    let index = cigarettes_per_day * years_smoked;

    let risk = if index < MODERATE_THRESHOLD {
        SmokingRisk::Low
    } else if index < HIGH_THRESHOLD {
        SmokingRisk::Moderate
    } else if index <= VERY_HIGH_THRESHOLD {
        SmokingRisk::High
    } else {
        SmokingRisk::VeryHigh
    };

    let (perio_risk, oral_cancer_risk) = match risk {
        SmokingRisk::Low => (
            "Mildly elevated periodontal risk; monitor at routine recall.",
            "Baseline oral cancer risk; opportunistic screening at recall.",
        ),
        SmokingRisk::Moderate => (
            "Elevated periodontal risk; expect impaired healing response.",
            "Elevated oral cancer risk; examine mucosa at every visit.",
        ),
        SmokingRisk::High => (
            "High periodontal risk; attachment loss likely progressive.",
            "High oral cancer risk; systematic mucosal screening required.",
        ),
        SmokingRisk::VeryHigh => (
            "Severe periodontal risk; treatment outcomes significantly compromised.",
            "Severe oral cancer risk; screen every visit and biopsy any suspect lesion.",
        ),
    };

    let mandatory_actions = if index >= HIGH_THRESHOLD {
        vec![
            "Tobacco cessation referral".to_string(),
            "Oral cancer screening with full mucosal examination".to_string(),
            "Aggressive periodontal therapy".to_string(),
            "3-month periodontal recall".to_string(),
        ]
    } else {
        Vec::new()
    };

    SmokingIndexResult {
        index,
        risk,
        perio_risk: perio_risk.to_string(),
        oral_cancer_risk: oral_cancer_risk.to_string(),
        mandatory_actions,
    }
}

/// Registry entry for the smoking index calculator.
pub struct SmokingIndex;

impl Calculator for SmokingIndex {
    fn id(&self) -> &str {
        "smoking_index"
    }

    fn name(&self) -> &str {
        "Smoking Index"
    }

    fn fields(&self) -> &[InputField] {
        static FIELDS: LazyLock<Vec<InputField>> = LazyLock::new(|| {
            vec![
                InputField {
                    id: "cigarettes_per_day".to_string(),
                    name: "Cigarettes per day".to_string(),
                    unit: None,
                    range: ValueRange {
                        min: 0.0,
                        max: 100.0,
                        step: Some(1.0),
                    },
                },
                InputField {
                    id: "years_smoked".to_string(),
                    name: "Years of smoking".to_string(),
                    unit: Some("years".to_string()),
                    range: ValueRange {
                        min: 0.0,
                        max: 80.0,
                        step: Some(1.0),
                    },
                },
            ]
        });
        &FIELDS
    }
}
