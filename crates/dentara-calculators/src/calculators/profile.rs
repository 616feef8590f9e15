//! Soft-tissue profile analysis: nasolabial angle and Ricketts E-line lip
//! distances from five traced landmarks.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use dentara_core::models::landmark::Landmark;

use crate::error::CalculatorError;
use crate::fields::{round1, InputField, NormalRange};
use crate::geometry::{angle_at, signed_distance};
use crate::Calculator;

/// Landmark keys expected by [`ProfileLandmarks::from_map`].
pub const LANDMARK_KEYS: [&str; 5] = [
    "nose_tip",
    "pronasale",
    "upper_lip",
    "lower_lip",
    "soft_tissue_pogonion",
];

/// A fully traced soft-tissue landmark set; all five points required.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProfileLandmarks {
    pub nose_tip: Landmark,
    pub pronasale: Landmark,
    pub upper_lip: Landmark,
    pub lower_lip: Landmark,
    pub soft_tissue_pogonion: Landmark,
}

impl ProfileLandmarks {
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
            nose_tip: map["nose_tip"],
            pronasale: map["pronasale"],
            upper_lip: map["upper_lip"],
            lower_lip: map["lower_lip"],
            soft_tissue_pogonion: map["soft_tissue_pogonion"],
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ProfileType {
    Convex,
    Straight,
    Concave,
}

impl std::fmt::Display for ProfileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Convex => write!(f, "Convex"),
            Self::Straight => write!(f, "Straight"),
            Self::Concave => write!(f, "Concave"),
        }
    }
}

/// Nasolabial-angle band classified as a straight profile. Clinical norms
/// vary by reference; the cutoffs live here, not inline in the classifier.
pub const NASOLABIAL_STRAIGHT: NormalRange = NormalRange { min: 90.0, max: 110.0 };

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProfileAnalysis {
    /// Angle at pronasale between pronasale→nose-tip and pronasale→upper
    /// lip, degrees, 1 decimal.
    pub nasolabial_angle: f64,
    /// Signed perpendicular distance from the upper lip to the E-line
    /// (nose tip → soft-tissue pogonion). Positive = protrusive beyond the
    /// line, negative = retrusive behind it.
    pub e_line_upper_lip: f64,
    /// As above, for the lower lip.
    pub e_line_lower_lip: f64,
    pub profile_type: ProfileType,
}

pub fn classify_profile(nasolabial_angle: f64) -> ProfileType {
    if nasolabial_angle < NASOLABIAL_STRAIGHT.min {
        ProfileType::Convex
    } else if nasolabial_angle <= NASOLABIAL_STRAIGHT.max {
        ProfileType::Straight
    } else {
        ProfileType::Concave
    }
}

pub fn analyze_profile(landmarks: &ProfileLandmarks) -> ProfileAnalysis {
    let nasolabial_angle = round1(angle_at(
        &landmarks.pronasale,
        &landmarks.nose_tip,
        &landmarks.upper_lip,
    ));

    let e_line_upper_lip = round1(signed_distance(
        &landmarks.upper_lip,
        &landmarks.nose_tip,
        &landmarks.soft_tissue_pogonion,
    ));
    let e_line_lower_lip = round1(signed_distance(
        &landmarks.lower_lip,
        &landmarks.nose_tip,
        &landmarks.soft_tissue_pogonion,
    ));

    ProfileAnalysis {
        nasolabial_angle,
        e_line_upper_lip,
        e_line_lower_lip,
        profile_type: classify_profile(nasolabial_angle),
    }
}

/// Registry entry for the soft-tissue profile analysis.
pub struct SoftTissueProfile;

impl Calculator for SoftTissueProfile {
    fn id(&self) -> &str {
        "profile"
    }

    fn name(&self) -> &str {
        "Soft-Tissue Profile"
    }

    /// Inputs are traced landmarks, not scalar form fields; completeness is
    /// enforced by [`ProfileLandmarks`] itself.
    fn fields(&self) -> &[InputField] {
        &[]
    }
}
