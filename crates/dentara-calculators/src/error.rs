use thiserror::Error;

use crate::fields::ValidationError;

#[derive(Debug, Error)]
pub enum CalculatorError {
    #[error("unknown calculator: {0}")]
    UnknownCalculator(String),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("missing required landmarks: {}", .missing.join(", "))]
    MissingLandmarks { missing: Vec<String> },
}
