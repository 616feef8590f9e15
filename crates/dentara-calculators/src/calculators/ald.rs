//! Arch-length discrepancy: space required (tooth width sums) versus space
//! available per arch, with a treatment recommendation driven by the worse
//! of the two discrepancies.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use dentara_core::models::tooth::{ToothMeasurement, ToothNumber};

use crate::fields::{round1, InputField, ValueRange};
use crate::Calculator;

/// Discrepancies below this call for extraction therapy.
pub const EXTRACTION_THRESHOLD_MM: f64 = -4.0;
/// Discrepancies in [`EXTRACTION_THRESHOLD_MM`, this) call for expansion;
/// milder crowding down to 0 is managed with interproximal reduction.
pub const EXPANSION_THRESHOLD_MM: f64 = -2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SpaceRecommendation {
    Extraction,
    Expansion,
    Ipr,
    None,
}

impl SpaceRecommendation {
    pub fn description(&self) -> &'static str {
        match self {
            Self::Extraction => "Severe crowding: extraction therapy indicated.",
            Self::Expansion => "Moderate crowding: arch expansion indicated.",
            Self::Ipr => "Mild crowding: interproximal reduction sufficient.",
            Self::None => "No crowding: no space management required.",
        }
    }
}

/// Space analysis for a single arch, all values in mm at 1 decimal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ArchAnalysis {
    /// Sum of mesiodistal widths over the charted teeth.
    pub required_mm: f64,
    /// Measured arch perimeter available to the caller.
    pub available_mm: f64,
    /// available − required. Negative = crowding, positive = spacing.
    pub discrepancy_mm: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AldCalculation {
    pub upper: ArchAnalysis,
    pub lower: ArchAnalysis,
    pub recommendation: SpaceRecommendation,
    pub summary: String,
}

fn analyze_arch(teeth: &[ToothMeasurement], available_mm: f64) -> ArchAnalysis {
    // Duplicate tooth entries are not rejected; they simply double-count.
    let required_mm = round1(teeth.iter().map(|t| t.mesiodistal_width_mm).sum());
    ArchAnalysis {
        required_mm,
        available_mm,
        discrepancy_mm: round1(available_mm - required_mm),
    }
}

/// Recommendation from the more severe (more negative) discrepancy.
pub fn recommendation_for(worst_discrepancy_mm: f64) -> SpaceRecommendation {
    if worst_discrepancy_mm < EXTRACTION_THRESHOLD_MM {
        SpaceRecommendation::Extraction
    } else if worst_discrepancy_mm < EXPANSION_THRESHOLD_MM {
        SpaceRecommendation::Expansion
    } else if worst_discrepancy_mm < 0.0 {
        SpaceRecommendation::Ipr
    } else {
        SpaceRecommendation::None
    }
}

pub fn calculate_ald(
    upper_teeth: &[ToothMeasurement],
    lower_teeth: &[ToothMeasurement],
    upper_available_mm: f64,
    lower_available_mm: f64,
) -> AldCalculation {
    let upper = analyze_arch(upper_teeth, upper_available_mm);
    let lower = analyze_arch(lower_teeth, lower_available_mm);

    let worst = upper.discrepancy_mm.min(lower.discrepancy_mm);
    let recommendation = recommendation_for(worst);
    let summary = format!(
        "Worst discrepancy {worst:.1} mm. {}",
        recommendation.description()
    );

    AldCalculation {
        upper,
        lower,
        recommendation,
        summary,
    }
}

/// Standard mesiodistal width in mm for a permanent tooth, by arch and
/// position. Pre-seeds the charting form; any entry may be overridden by a
/// measured value before calculating. Third molars are not part of the
/// analysis and have no standard width.
pub fn standard_width(tooth: ToothNumber) -> Option<f64> {
    let upper = tooth.is_upper();
    match (upper, tooth.position()) {
        (true, 1) => Some(8.5),
        (true, 2) => Some(6.5),
        (true, 3) => Some(7.5),
        (true, 4) => Some(7.0),
        (true, 5) => Some(6.8),
        (true, 6) => Some(10.0),
        (true, 7) => Some(9.5),
        (false, 1) => Some(5.0),
        (false, 2) => Some(5.5),
        (false, 3) => Some(7.0),
        (false, 4) => Some(7.0),
        (false, 5) => Some(7.2),
        (false, 6) => Some(11.0),
        (false, 7) => Some(10.5),
        _ => None,
    }
}

/// Registry entry for the arch-length-discrepancy calculator.
pub struct ArchLengthDiscrepancy;

impl Calculator for ArchLengthDiscrepancy {
    fn id(&self) -> &str {
        "ald"
    }

    fn name(&self) -> &str {
        "Arch Length Discrepancy"
    }

    fn fields(&self) -> &[InputField] {
        static FIELDS: LazyLock<Vec<InputField>> = LazyLock::new(|| {
            let perimeter = ValueRange {
                min: 50.0,
                max: 120.0,
                step: None,
            };
            let width = ValueRange {
                min: 3.0,
                max: 15.0,
                step: None,
            };

            vec![
                InputField {
                    id: "upper_arch_available".to_string(),
                    name: "Upper arch perimeter available".to_string(),
                    unit: Some("mm".to_string()),
                    range: perimeter,
                },
                InputField {
                    id: "lower_arch_available".to_string(),
                    name: "Lower arch perimeter available".to_string(),
                    unit: Some("mm".to_string()),
                    range: perimeter,
                },
                InputField {
                    id: "tooth_width".to_string(),
                    name: "Mesiodistal tooth width".to_string(),
                    unit: Some("mm".to_string()),
                    range: width,
                },
            ]
        });
        &FIELDS
    }
}
