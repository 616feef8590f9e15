//! dentara-calculators
//!
//! Clinical scoring calculators for the Dentara charting UI. Pure data in,
//! pure data out — no persistence, no network, no shared state. Each
//! calculator module defines its input and result types, its named clinical
//! threshold tables, and the scoring function itself.

pub mod calculators;
pub mod error;
pub mod fields;
mod geometry;

use fields::{InputField, InputValue, ValidationError};

/// Trait implemented by each clinical calculator.
pub trait Calculator: Send + Sync {
    /// Unique identifier for this calculator (e.g., "ohis", "war").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "OHI-S", "WAR Score").
    fn name(&self) -> &str;

    /// The scalar form inputs this calculator expects. Calculators whose
    /// inputs are structural (landmark records, finding-key sets) declare
    /// no scalar fields; their preconditions are enforced by their typed
    /// input records instead.
    fn fields(&self) -> &[InputField];

    /// Range-check form entries against this calculator's declared fields.
    ///
    /// This is a service to the form layer, not a gate: the scoring
    /// functions themselves never reject numeric input.
    fn validate_inputs(&self, inputs: &[InputValue]) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        for entry in inputs {
            if let Some(field) = self.fields().iter().find(|f| f.id == entry.field_id)
                && !field.range.contains(entry.value)
            {
                errors.push(ValidationError {
                    field_id: entry.field_id.clone(),
                    value: entry.value,
                    expected_range: field.range,
                    message: format!(
                        "{}: {} value {} is outside range [{}, {}]",
                        self.name(),
                        field.name,
                        entry.value,
                        field.range.min,
                        field.range.max,
                    ),
                });
            }
        }
        errors
    }
}

/// Return all registered calculators.
pub fn all_calculators() -> Vec<Box<dyn Calculator>> {
    vec![
        Box::new(calculators::ohis::Ohis),
        Box::new(calculators::smoking::SmokingIndex),
        Box::new(calculators::recession::CairoRecession),
        Box::new(calculators::cephalometric::Cephalometric),
        Box::new(calculators::profile::SoftTissueProfile),
        Box::new(calculators::ald::ArchLengthDiscrepancy),
        Box::new(calculators::war::WarScore),
        Box::new(calculators::diagnosis::ProvisionalDiagnosis),
    ]
}

/// Look up a calculator by ID.
pub fn get_calculator(id: &str) -> Option<Box<dyn Calculator>> {
    all_calculators().into_iter().find(|c| c.id() == id)
}
