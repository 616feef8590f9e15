//! WAR score for impacted third-molar extraction difficulty: Winter's
//! angulation + Pell & Gregory arch relationship + radiographic depth.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::fields::{InputField, ValueRange};
use crate::Calculator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum WinterAngulation {
    Vertical,
    Mesioangular,
    Horizontal,
    Distoangular,
}

impl WinterAngulation {
    pub fn points(&self) -> u8 {
        match self {
            Self::Vertical => 1,
            Self::Mesioangular => 2,
            Self::Horizontal => 3,
            Self::Distoangular => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ArchRelationship {
    ClassI,
    ClassII,
    ClassIII,
}

impl ArchRelationship {
    pub fn points(&self) -> u8 {
        match self {
            Self::ClassI => 1,
            Self::ClassII => 2,
            Self::ClassIII => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RadiographicDepth {
    PositionA,
    PositionB,
    PositionC,
}

impl RadiographicDepth {
    pub fn points(&self) -> u8 {
        match self {
            Self::PositionA => 1,
            Self::PositionB => 2,
            Self::PositionC => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ExtractionDifficulty {
    Easy,
    Moderate,
    Difficult,
}

/// Scores at or above this are difficult extractions; at or below
/// `EASY_MAX` they are easy. The band between is moderate.
pub const DIFFICULT_MIN: u8 = 7;
pub const EASY_MAX: u8 = 3;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WarAssessment {
    /// Sum of the three component points, 3–10.
    pub score: u8,
    pub difficulty: ExtractionDifficulty,
    pub estimated_duration: String,
    pub operative_notes: String,
}

pub fn calculate_war_score(
    winter: WinterAngulation,
    arch: ArchRelationship,
    depth: RadiographicDepth,
) -> WarAssessment {
    let score = winter.points() + arch.points() + depth.points();

    let difficulty = if score >= DIFFICULT_MIN {
        ExtractionDifficulty::Difficult
    } else if score > EASY_MAX {
        ExtractionDifficulty::Moderate
    } else {
        ExtractionDifficulty::Easy
    };

    let (estimated_duration, operative_notes) = match difficulty {
        ExtractionDifficulty::Easy => (
            "15-20 minutes",
            "Minimal surgical risk; straightforward elevation expected.",
        ),
        ExtractionDifficulty::Moderate => (
            "25-35 minutes",
            "Tooth sectioning likely; plan for a surgical flap.",
        ),
        ExtractionDifficulty::Difficult => (
            "45-60 minutes",
            "High complication risk including inferior alveolar nerve injury; \
             bone removal and sectioning expected.",
        ),
    };

    WarAssessment {
        score,
        difficulty,
        estimated_duration: estimated_duration.to_string(),
        operative_notes: operative_notes.to_string(),
    }
}

/// Registry entry for the WAR surgical-difficulty scorer.
pub struct WarScore;

impl Calculator for WarScore {
    fn id(&self) -> &str {
        "war"
    }

    fn name(&self) -> &str {
        "WAR Score"
    }

    fn fields(&self) -> &[InputField] {
        static FIELDS: LazyLock<Vec<InputField>> = LazyLock::new(|| {
            vec![
                InputField {
                    id: "winter_angulation".to_string(),
                    name: "Winter's angulation (1 vertical … 4 distoangular)".to_string(),
                    unit: None,
                    range: ValueRange {
                        min: 1.0,
                        max: 4.0,
                        step: Some(1.0),
                    },
                },
                InputField {
                    id: "arch_relationship".to_string(),
                    name: "Pell & Gregory arch relationship (class 1-3)".to_string(),
                    unit: None,
                    range: ValueRange {
                        min: 1.0,
                        max: 3.0,
                        step: Some(1.0),
                    },
                },
                InputField {
                    id: "radiographic_depth".to_string(),
                    name: "Radiographic depth (position A-C as 1-3)".to_string(),
                    unit: None,
                    range: ValueRange {
                        min: 1.0,
                        max: 3.0,
                        step: Some(1.0),
                    },
                },
            ]
        });
        &FIELDS
    }
}
