//! Verdict classification: derives the overall verdict from finding counts.
//!
//! Strict priority, not configurable:
//! 1. Any issue → INELIGIBLE (warnings do not matter)
//! 2. Else any warning → CONDITIONALLY ELIGIBLE
//! 3. Else → ELIGIBLE

use serde::{Deserialize, Serialize};

use crate::messages::Locale;
use crate::types::EvaluationResult;

/// The three-way overall classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Eligible,
    ConditionallyEligible,
    Ineligible,
}

impl Verdict {
    pub fn is_ineligible(&self) -> bool {
        matches!(self, Verdict::Ineligible)
    }

    /// Headline for the result screen.
    pub fn title(&self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::En, Verdict::Eligible) => "Likely eligible",
            (Locale::En, Verdict::ConditionallyEligible) => "Possibly eligible with conditions",
            (Locale::En, Verdict::Ineligible) => "Likely ineligible",
            (Locale::Ja, Verdict::Eligible) => "適格の可能性あり",
            (Locale::Ja, Verdict::ConditionallyEligible) => "条件付き適格の可能性",
            (Locale::Ja, Verdict::Ineligible) => "不適格の可能性あり",
        }
    }

    /// One-line explanation under the headline.
    pub fn subtitle(&self, issue_count: usize, locale: Locale) -> String {
        match (locale, self) {
            (Locale::En, Verdict::Eligible) => {
                "All inclusion criteria are met and no exclusion criterion applies.".to_string()
            }
            (Locale::En, Verdict::ConditionallyEligible) => {
                "No exclusion criterion applies, but some items need confirmation.".to_string()
            }
            (Locale::En, Verdict::Ineligible) => {
                format!("{} disqualifying factor(s) detected.", issue_count)
            }
            (Locale::Ja, Verdict::Eligible) => {
                "すべての適格基準を満たし、除外基準に該当する項目はありません。".to_string()
            }
            (Locale::Ja, Verdict::ConditionallyEligible) => {
                "除外基準には該当しませんが、確認が必要な項目があります。".to_string()
            }
            (Locale::Ja, Verdict::Ineligible) => {
                format!("{}件の不適格要因が検出されました。", issue_count)
            }
        }
    }

    /// Status glyph shown next to the headline.
    pub fn icon(&self) -> &'static str {
        match self {
            Verdict::Eligible => "✓",
            Verdict::ConditionallyEligible => "⚠",
            Verdict::Ineligible => "✗",
        }
    }
}

/// Verdict plus the counts shown alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerdictSummary {
    pub verdict: Verdict,
    pub passed: usize,
    pub warnings: usize,
    pub issues: usize,
}

/// Derives verdicts from evaluation results.
pub struct VerdictClassifier;

impl VerdictClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, result: &EvaluationResult) -> Verdict {
        // Rule 1: any issue -> INELIGIBLE
        if !result.issues.is_empty() {
            return Verdict::Ineligible;
        }

        // Rule 2: any warning -> CONDITIONALLY ELIGIBLE
        if !result.warnings.is_empty() {
            return Verdict::ConditionallyEligible;
        }

        Verdict::Eligible
    }

    pub fn summarize(&self, result: &EvaluationResult) -> VerdictSummary {
        VerdictSummary {
            verdict: self.classify(result),
            passed: result.passed.len(),
            warnings: result.warnings.len(),
            issues: result.issues.len(),
        }
    }
}

impl Default for VerdictClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Finding, Outcome};

    fn result_with(passed: usize, warnings: usize, issues: usize) -> EvaluationResult {
        let mut result = EvaluationResult::default();
        for i in 0..passed {
            result.push(Finding::new(format!("p{}", i), Outcome::Passed, "ok"));
        }
        for i in 0..warnings {
            result.push(Finding::new(format!("w{}", i), Outcome::Warning, "check"));
        }
        for i in 0..issues {
            result.push(Finding::new(format!("i{}", i), Outcome::Issue, "fail"));
        }
        result
    }

    #[test]
    fn test_clean_result_is_eligible() {
        let verdict = VerdictClassifier::new().classify(&result_with(10, 0, 0));
        assert_eq!(verdict, Verdict::Eligible);
    }

    #[test]
    fn test_empty_result_is_eligible() {
        let verdict = VerdictClassifier::new().classify(&EvaluationResult::default());
        assert_eq!(verdict, Verdict::Eligible);
    }

    #[test]
    fn test_warnings_only_is_conditional() {
        let verdict = VerdictClassifier::new().classify(&result_with(10, 2, 0));
        assert_eq!(verdict, Verdict::ConditionallyEligible);
    }

    #[test]
    fn test_issue_takes_priority_over_warnings() {
        let verdict = VerdictClassifier::new().classify(&result_with(3, 5, 1));
        assert_eq!(verdict, Verdict::Ineligible);
    }

    #[test]
    fn test_summary_counts() {
        let summary = VerdictClassifier::new().summarize(&result_with(4, 2, 1));
        assert_eq!(summary.passed, 4);
        assert_eq!(summary.warnings, 2);
        assert_eq!(summary.issues, 1);
        assert_eq!(summary.verdict, Verdict::Ineligible);
    }

    #[test]
    fn test_ineligible_subtitle_counts_issues() {
        assert_eq!(
            Verdict::Ineligible.subtitle(3, Locale::Ja),
            "3件の不適格要因が検出されました。"
        );
        assert_eq!(Verdict::Eligible.title(Locale::Ja), "適格の可能性あり");
    }
}
