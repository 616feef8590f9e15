//! OHI-S: Simplified Oral Hygiene Index (Greene & Vermillion).
//! Debris and calculus scored 0–3 on six index teeth; DI-S + CI-S = OHI-S.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::fields::{round1, InputField, ValueRange};
use crate::Calculator;

/// The six FDI index teeth examined for both debris and calculus.
pub const INDEX_TEETH: [u8; 6] = [16, 11, 26, 36, 31, 46];

/// Ordinal surface scores (0–3) keyed by FDI index tooth. Teeth without an
/// entry score 0, matching the permissive charting behavior: an unexamined
/// surface never fails the calculation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SurfaceScores(pub BTreeMap<u8, u8>);

impl SurfaceScores {
    pub fn score_for(&self, tooth: u8) -> u8 {
        self.0.get(&tooth).copied().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum OralHygiene {
    Good,
    Fair,
    Poor,
}

impl OralHygiene {
    pub fn recommendation(&self) -> &'static str {
        match self {
            Self::Good => {
                "Oral hygiene is satisfactory. Reinforce the current brushing \
                 and flossing routine; routine recall in 6 months."
            }
            Self::Fair => {
                "Plaque control needs improvement. Provide oral hygiene \
                 instruction and a prophylaxis; recall in 3-4 months."
            }
            Self::Poor => {
                "Heavy deposits present. Refer for scaling and root planing, \
                 then re-evaluate hygiene at a short recall."
            }
        }
    }
}

impl std::fmt::Display for OralHygiene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Good => write!(f, "Good"),
            Self::Fair => write!(f, "Fair"),
            Self::Poor => write!(f, "Poor"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OhisResult {
    /// DI-S: mean debris score across the six index teeth, 1 decimal.
    pub debris_index: f64,
    /// CI-S: mean calculus score across the six index teeth, 1 decimal.
    pub calculus_index: f64,
    /// OHI-S total = DI-S + CI-S, 1 decimal.
    pub total: f64,
    pub rating: OralHygiene,
    pub recommendation: String,
}

/// Upper bound of the "Good" band; the "Fair" band runs from the next
/// 1-decimal step up to `FAIR_MAX` inclusive.
pub const GOOD_MAX: f64 = 1.2;
pub const FAIR_MAX: f64 = 3.0;

pub fn calculate_ohis(debris: &SurfaceScores, calculus: &SurfaceScores) -> OhisResult {
    let debris_index = component_mean(debris);
    let calculus_index = component_mean(calculus);
    let total = round1(debris_index + calculus_index);

    let rating = if total <= GOOD_MAX {
        OralHygiene::Good
    } else if total <= FAIR_MAX {
        OralHygiene::Fair
    } else {
        OralHygiene::Poor
    };

    OhisResult {
        debris_index,
        calculus_index,
        total,
        rating,
        recommendation: rating.recommendation().to_string(),
    }
}

fn component_mean(scores: &SurfaceScores) -> f64 {
    let sum: u32 = INDEX_TEETH
        .iter()
        .map(|tooth| u32::from(scores.score_for(*tooth)))
        .sum();
    round1(f64::from(sum) / INDEX_TEETH.len() as f64)
}

/// Registry entry for the OHI-S calculator.
pub struct Ohis;

impl Calculator for Ohis {
    fn id(&self) -> &str {
        "ohis"
    }

    fn name(&self) -> &str {
        "OHI-S"
    }

    fn fields(&self) -> &[InputField] {
        static FIELDS: LazyLock<Vec<InputField>> = LazyLock::new(|| {
            let item_range = ValueRange {
                min: 0.0,
                max: 3.0,
                step: Some(1.0),
            };

            INDEX_TEETH
                .iter()
                .flat_map(|tooth| {
                    [
                        InputField {
                            id: format!("debris_{tooth}"),
                            name: format!("Debris score, tooth {tooth}"),
                            unit: None,
                            range: item_range,
                        },
                        InputField {
                            id: format!("calculus_{tooth}"),
                            name: format!("Calculus score, tooth {tooth}"),
                            unit: None,
                            range: item_range,
                        },
                    ]
                })
                .collect()
        });
        &FIELDS
    }
}
