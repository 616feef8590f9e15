//! Cephalometric analysis: SNA, SNB, ANB, and FMA from eight traced
//! landmarks, with skeletal-class and vertical-pattern classification.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use dentara_core::models::landmark::Landmark;

use crate::error::CalculatorError;
use crate::fields::{round1, InputField, NormalRange};
use crate::geometry::{angle_at, angle_between_lines};
use crate::Calculator;

/// Landmark keys expected by [`CephalometricLandmarks::from_map`], in
/// tracing order.
pub const LANDMARK_KEYS: [&str; 8] = ["S", "N", "A", "B", "Or", "Po", "Go", "Gn"];

/// A fully traced landmark set. Every field is required, so a constructed
/// value is always safe to analyze — the completeness precondition lives in
/// the type, not in a runtime check inside the angle math.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CephalometricLandmarks {
    pub sella: Landmark,
    pub nasion: Landmark,
    pub a_point: Landmark,
    pub b_point: Landmark,
    pub orbitale: Landmark,
    pub porion: Landmark,
    pub gonion: Landmark,
    pub gnathion: Landmark,
}

impl CephalometricLandmarks {
    /// Build a landmark set from a partially traced map, failing with the
    /// full list of missing landmark names.
    pub fn from_map(map: &HashMap<String, Landmark>) -> Result<Self, CalculatorError> {
        let missing: Vec<String> = LANDMARK_KEYS
            .iter()
            .filter(|key| !map.contains_key(**key))
            .map(|key| key.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(CalculatorError::MissingLandmarks { missing });
        }

        Ok(Self {
            sella: map["S"],
            nasion: map["N"],
            a_point: map["A"],
            b_point: map["B"],
            orbitale: map["Or"],
            porion: map["Po"],
            gonion: map["Go"],
            gnathion: map["Gn"],
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SkeletalClass {
    ClassI,
    ClassII,
    ClassIII,
}

impl SkeletalClass {
    pub fn description(&self) -> &'static str {
        match self {
            Self::ClassI => "Skeletal Class I: maxilla and mandible in normal relation.",
            Self::ClassII => "Skeletal Class II: mandible retrognathic relative to the maxilla.",
            Self::ClassIII => "Skeletal Class III: mandible prognathic relative to the maxilla.",
        }
    }
}

impl std::fmt::Display for SkeletalClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ClassI => write!(f, "Class I"),
            Self::ClassII => write!(f, "Class II"),
            Self::ClassIII => write!(f, "Class III"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum VerticalPattern {
    Hypodivergent,
    Normodivergent,
    Hyperdivergent,
}

impl VerticalPattern {
    pub fn description(&self) -> &'static str {
        match self {
            Self::Hypodivergent => "Reduced mandibular plane angle: horizontal growth pattern.",
            Self::Normodivergent => "Mandibular plane angle within the normal band.",
            Self::Hyperdivergent => "Increased mandibular plane angle: vertical growth pattern.",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CephalometricAngles {
    /// Angle at N between N→S and N→A, degrees, 1 decimal.
    pub sna: f64,
    /// Angle at N between N→S and N→B, degrees, 1 decimal.
    pub snb: f64,
    /// ANB = SNA − SNB, signed. Taken as the difference of the two
    /// composing angles rather than re-derived from raw coordinates, so
    /// the three published values stay mutually consistent.
    pub anb: f64,
    /// Angle between the Frankfort horizontal (Or–Po) and the mandibular
    /// plane (Go–Gn), degrees, 1 decimal.
    pub fma: f64,
    pub skeletal_class: SkeletalClass,
    pub vertical_pattern: VerticalPattern,
}

/// ANB band assigned to Class I; below is Class III, above Class II.
pub const ANB_CLASS_I: NormalRange = NormalRange { min: 2.0, max: 4.0 };

/// FMA band assigned to normodivergent growth. A configuration constant:
/// clinics tuning their norms adjust this table, not the angle math.
pub const FMA_NORMAL: NormalRange = NormalRange { min: 22.0, max: 28.0 };

/// Per-angle normal bands, used for UI highlighting only — classification
/// goes through [`skeletal_class_for`] and [`vertical_pattern_for`].
pub const NORMAL_RANGES: [(&str, NormalRange); 4] = [
    ("sna", NormalRange { min: 80.0, max: 84.0 }),
    ("snb", NormalRange { min: 78.0, max: 82.0 }),
    ("anb", ANB_CLASS_I),
    ("fma", FMA_NORMAL),
];

/// Whether `value` falls inside the named angle's normal band. `None` for
/// an unknown angle id.
pub fn within_normal(angle: &str, value: f64) -> Option<bool> {
    NORMAL_RANGES
        .iter()
        .find(|(id, _)| *id == angle)
        .map(|(_, range)| range.contains(value))
}

pub fn skeletal_class_for(anb: f64) -> SkeletalClass {
    if anb < ANB_CLASS_I.min {
        SkeletalClass::ClassIII
    } else if anb <= ANB_CLASS_I.max {
        SkeletalClass::ClassI
    } else {
        SkeletalClass::ClassII
    }
}

pub fn vertical_pattern_for(fma: f64) -> VerticalPattern {
    if fma < FMA_NORMAL.min {
        VerticalPattern::Hypodivergent
    } else if fma <= FMA_NORMAL.max {
        VerticalPattern::Normodivergent
    } else {
        VerticalPattern::Hyperdivergent
    }
}

/// Compute all four angles and their classifications from a complete
/// landmark set.
pub fn calculate_angles(landmarks: &CephalometricLandmarks) -> CephalometricAngles {
    let sna = round1(angle_at(&landmarks.nasion, &landmarks.sella, &landmarks.a_point));
    let snb = round1(angle_at(&landmarks.nasion, &landmarks.sella, &landmarks.b_point));
    let anb = round1(sna - snb);
    let fma = round1(angle_between_lines(
        &landmarks.orbitale,
        &landmarks.porion,
        &landmarks.gonion,
        &landmarks.gnathion,
    ));

    CephalometricAngles {
        sna,
        snb,
        anb,
        fma,
        skeletal_class: skeletal_class_for(anb),
        vertical_pattern: vertical_pattern_for(fma),
    }
}

/// Registry entry for the cephalometric analysis.
pub struct Cephalometric;

impl Calculator for Cephalometric {
    fn id(&self) -> &str {
        "cephalometric"
    }

    fn name(&self) -> &str {
        "Cephalometric Analysis"
    }

    /// Inputs are traced landmarks, not scalar form fields; completeness is
    /// enforced by [`CephalometricLandmarks`] itself.
    fn fields(&self) -> &[InputField] {
        &[]
    }
}
