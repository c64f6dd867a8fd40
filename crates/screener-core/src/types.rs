//! Core output types for screening evaluations.

use serde::{Deserialize, Serialize};

/// How a single check came out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Criterion satisfied
    Passed,

    /// Conditionally acceptable, needs confirmation
    Warning,

    /// Criterion violated, disqualifying
    Issue,
}

impl Outcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, Outcome::Passed)
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Outcome::Warning)
    }

    pub fn is_issue(&self) -> bool {
        matches!(self, Outcome::Issue)
    }
}

/// A single classified output unit produced by one check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Stable criterion id (e.g. "ecog", "exclusion.autoimmune")
    pub criterion: String,

    /// Which list the finding belongs to
    pub outcome: Outcome,

    /// Clinician-facing prose, rendered in the evaluator's locale
    pub message: String,
}

impl Finding {
    pub fn new(criterion: impl Into<String>, outcome: Outcome, message: impl Into<String>) -> Self {
        Self {
            criterion: criterion.into(),
            outcome,
            message: message.into(),
        }
    }
}

/// The classified result of one evaluation.
///
/// Order within each list follows evaluation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub passed: Vec<Finding>,
    pub warnings: Vec<Finding>,
    pub issues: Vec<Finding>,

    /// Exclusion criteria answered neither yes nor no. These produce no
    /// finding in the three lists above.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unanswered: Vec<String>,
}

impl EvaluationResult {
    /// Route a finding into the list matching its outcome.
    pub fn push(&mut self, finding: Finding) {
        match finding.outcome {
            Outcome::Passed => self.passed.push(finding),
            Outcome::Warning => self.warnings.push(finding),
            Outcome::Issue => self.issues.push(finding),
        }
    }

    /// Total number of findings across the three lists.
    pub fn total(&self) -> usize {
        self.passed.len() + self.warnings.len() + self.issues.len()
    }

    /// Find the finding produced for a criterion, whichever list holds it.
    pub fn finding(&self, criterion: &str) -> Option<&Finding> {
        self.passed
            .iter()
            .chain(self.warnings.iter())
            .chain(self.issues.iter())
            .find(|f| f.criterion == criterion)
    }
}
