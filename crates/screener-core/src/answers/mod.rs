//! Answer records.
//!
//! A screening form is submitted as [`RawAnswers`] (every field optional,
//! parsed from YAML/JSON) and turned into a validated [`AnswerRecord`]
//! before evaluation. Missing or malformed values are rejected here, never
//! treated as a pass or fail.

mod parser;
mod record;

pub use parser::RawAnswers;
pub use record::{
    Answer, AnswerRecord, BloodPressure, ConditioningFlags, InclusionAnswers, LabValues,
};

use thiserror::Error;

/// Errors raised while loading or validating answers.
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Failed to read answers file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("Unknown exclusion criterion: {0}")]
    UnknownExclusion(String),

    #[error("Field {field} must be a finite number")]
    NonFinite { field: &'static str },

    #[error("Field {field} is out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
}
