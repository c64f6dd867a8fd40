//! # screener-core
//!
//! Deterministic eligibility evaluation for an oncology trial.
//!
//! Given a completed screening form, the evaluator answers:
//! - Which inclusion criteria are met?
//! - Which values need confirmation?
//! - What disqualifies the candidate?
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: Same answers always produce the same findings, in the same order
//! 2. **Total**: Every inclusion and lab check produces exactly one finding
//! 3. **Fail fast**: Missing or malformed values are rejected, never scored
//! 4. **Stateless**: Evaluations share nothing and may run concurrently
//!
//! ## Example
//!
//! ```rust,ignore
//! use screener_core::{classify, evaluate, RawAnswers, Verdict};
//!
//! let record = RawAnswers::from_yaml_file("answers.yaml")?.into_record()?;
//! let result = evaluate(&record)?;
//!
//! match classify(&result) {
//!     Verdict::Eligible => println!("eligible"),
//!     Verdict::ConditionallyEligible => println!("confirm: {:?}", result.warnings),
//!     Verdict::Ineligible => println!("ineligible: {:?}", result.issues),
//! }
//! ```

pub mod answers;
pub mod checks;
pub mod criteria;
pub mod decision;
pub mod messages;
pub mod report;
pub mod types;
pub mod verdict;
pub mod wizard;

#[cfg(test)]
pub(crate) mod testing;

// Re-export main types at crate root
pub use answers::{
    Answer, AnswerRecord, BloodPressure, ConditioningFlags, InclusionAnswers, LabValues,
    RawAnswers, RecordError,
};
pub use checks::{standard_checks, Check, CheckGroup};
pub use criteria::{ExclusionCriterion, InclusionCriterion, LabFloor, EXCLUSION_CRITERIA};
pub use messages::Locale;
pub use report::ScreeningReport;
pub use types::{EvaluationResult, Finding, Outcome};
pub use verdict::{Verdict, VerdictClassifier, VerdictSummary};
pub use wizard::{Navigation, WizardState};

use thiserror::Error;

/// Errors that can occur during evaluation
#[derive(Error, Debug)]
pub enum EvaluationError {
    #[error("Invalid answers: {0}")]
    Record(#[from] RecordError),
}

/// Runs the standard checks over an answer record.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    locale: Locale,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render finding messages in `locale`.
    pub fn with_locale(locale: Locale) -> Self {
        Self { locale }
    }

    /// Evaluate a record against every inclusion and exclusion criterion.
    ///
    /// The record's preconditions are checked first; a record that fails
    /// them is rejected without producing any findings. Otherwise every
    /// check runs, in order, regardless of earlier outcomes.
    pub fn evaluate(&self, record: &AnswerRecord) -> Result<EvaluationResult, EvaluationError> {
        record.validate()?;

        let mut result = EvaluationResult::default();
        for check in standard_checks() {
            tracing::trace!(group = check.group().name(), "Running check");
            check.apply(record, self.locale, &mut result);
        }

        tracing::debug!(
            passed = result.passed.len(),
            warnings = result.warnings.len(),
            issues = result.issues.len(),
            unanswered = result.unanswered.len(),
            "Evaluation complete"
        );

        Ok(result)
    }
}

/// Evaluate a record with English messages.
///
/// This is the main entry point for screening evaluation.
pub fn evaluate(record: &AnswerRecord) -> Result<EvaluationResult, EvaluationError> {
    Evaluator::new().evaluate(record)
}

/// Derive the overall verdict from an evaluation result.
pub fn classify(result: &EvaluationResult) -> Verdict {
    VerdictClassifier::new().classify(result)
}
