use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::models::tooth::ToothNumber;

/// One charted calculator run, as persisted by the surrounding application.
///
/// The engine itself never stores these; it only defines the shape. `inputs`
/// and `result` hold the calculator-specific payloads as opaque JSON so one
/// record type covers all calculators.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CalculationRecord {
    pub id: Uuid,
    pub patient_name: String,
    pub calculator_id: String,
    pub tooth: Option<ToothNumber>,
    pub inputs: serde_json::Value,
    pub result: serde_json::Value,
    pub notes: Option<String>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}
