//! Exclusion criteria.
//!
//! The canonical list is walked in order. "Yes" means the criterion is met
//! and disqualifies; "no" passes. Any other answer produces no finding and
//! is recorded in `EvaluationResult::unanswered` instead.

use crate::answers::{Answer, AnswerRecord};
use crate::criteria::EXCLUSION_CRITERIA;
use crate::messages::{self, Locale};
use crate::types::{EvaluationResult, Finding, Outcome};

use super::{Check, CheckGroup};

pub struct ExclusionCheck;

impl Check for ExclusionCheck {
    fn group(&self) -> CheckGroup {
        CheckGroup::Exclusion
    }

    fn apply(&self, record: &AnswerRecord, locale: Locale, result: &mut EvaluationResult) {
        for criterion in &EXCLUSION_CRITERIA {
            let criterion_id = format!("exclusion.{}", criterion.id);
            match record.exclusion(criterion.id) {
                Answer::Yes => result.push(Finding::new(
                    criterion_id,
                    Outcome::Issue,
                    messages::exclusion(criterion, true, locale),
                )),
                Answer::No => result.push(Finding::new(
                    criterion_id,
                    Outcome::Passed,
                    messages::exclusion(criterion, false, locale),
                )),
                Answer::Unanswered => {
                    tracing::warn!(
                        criterion = criterion.id,
                        "Exclusion criterion unanswered, no finding emitted"
                    );
                    result.unanswered.push(criterion.id.to_string());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::eligible_record;

    #[test]
    fn test_all_no_pass_in_canonical_order() {
        let mut result = EvaluationResult::default();
        ExclusionCheck.apply(&eligible_record(), Locale::En, &mut result);

        assert_eq!(result.passed.len(), 28);
        assert_eq!(result.passed[0].criterion, "exclusion.cancer");
        assert_eq!(result.passed[27].criterion, "exclusion.compliance");
        assert!(result.unanswered.is_empty());
    }

    #[test]
    fn test_yes_is_issue_with_label() {
        let mut record = eligible_record();
        record.exclusions.insert("hepatitis".to_string(), Answer::Yes);

        let mut result = EvaluationResult::default();
        ExclusionCheck.apply(&record, Locale::Ja, &mut result);

        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].message, "除外基準に該当: B型/C型肝炎");
        assert_eq!(result.passed.len(), 27);
    }

    #[test]
    fn test_unanswered_emits_no_finding() {
        let mut record = eligible_record();
        record.exclusions.insert("gi".to_string(), Answer::Unanswered);
        record.exclusions.insert("ild".to_string(), Answer::Unanswered);

        let mut result = EvaluationResult::default();
        ExclusionCheck.apply(&record, Locale::En, &mut result);

        assert_eq!(result.total(), 26);
        assert_eq!(result.unanswered, vec!["ild".to_string(), "gi".to_string()]);
    }
}
