use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// An FDI two-digit tooth designation: quadrant (1–4) × position (1–8).
///
/// Construction is validated, so a held value is always a real permanent
/// tooth (11–18, 21–28, 31–38, 41–48).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[serde(try_from = "u8", into = "u8")]
#[ts(export)]
pub struct ToothNumber(u8);

impl ToothNumber {
    /// Quadrant digit, 1–4. Quadrants 1–2 are maxillary, 3–4 mandibular.
    pub fn quadrant(&self) -> u8 {
        self.0 / 10
    }

    /// Position within the quadrant, 1 (central incisor) to 8 (third molar).
    pub fn position(&self) -> u8 {
        self.0 % 10
    }

    pub fn is_upper(&self) -> bool {
        matches!(self.quadrant(), 1 | 2)
    }
}

impl TryFrom<u8> for ToothNumber {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        let quadrant = value / 10;
        let position = value % 10;
        if (1..=4).contains(&quadrant) && (1..=8).contains(&position) {
            Ok(Self(value))
        } else {
            Err(CoreError::InvalidToothNumber(value))
        }
    }
}

impl From<ToothNumber> for u8 {
    fn from(tooth: ToothNumber) -> u8 {
        tooth.0
    }
}

impl std::fmt::Display for ToothNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A mesiodistal width measurement for one tooth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ToothMeasurement {
    pub tooth: ToothNumber,
    pub mesiodistal_width_mm: f64,
}
