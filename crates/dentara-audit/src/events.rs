use serde::Serialize;
use tracing::info;

use dentara_core::models::record::CalculationRecord;

use crate::error::AuditError;

/// A structured audit event for one charted calculation.
///
/// Events are logged via `tracing` so the embedding application can route
/// them to its log pipeline; `to_json` serves callers that additionally
/// keep a flat audit trail.
#[derive(Debug, Clone, Serialize)]
pub struct CalculationEvent {
    pub action: String,
    pub calculator_id: String,
    pub patient_ref: String,
    pub details: Option<serde_json::Value>,
}

impl CalculationEvent {
    pub fn new(
        action: impl Into<String>,
        calculator_id: impl Into<String>,
        patient_ref: impl Into<String>,
    ) -> Self {
        Self {
            action: action.into(),
            calculator_id: calculator_id.into(),
            patient_ref: patient_ref.into(),
            details: None,
        }
    }

    /// Build an event from a record about to be persisted.
    pub fn for_record(action: impl Into<String>, record: &CalculationRecord) -> Self {
        Self::new(action, record.calculator_id.clone(), record.patient_name.clone())
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Emit this audit event via tracing.
    pub fn emit(&self) {
        info!(
            audit.action = %self.action,
            audit.calculator_id = %self.calculator_id,
            audit.patient_ref = %self.patient_ref,
            "audit event"
        );
    }

    pub fn to_json(&self) -> Result<String, AuditError> {
        Ok(serde_json::to_string(self)?)
    }
}
