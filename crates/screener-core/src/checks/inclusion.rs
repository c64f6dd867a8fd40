//! Yes/no inclusion gates.

use crate::answers::AnswerRecord;
use crate::criteria::InclusionCriterion;
use crate::messages::{self, Locale};
use crate::types::{EvaluationResult, Finding, Outcome};

use super::{Check, CheckGroup};

/// "Yes" passes; "no" or anything else is an issue.
pub struct InclusionCheck;

impl Check for InclusionCheck {
    fn group(&self) -> CheckGroup {
        CheckGroup::Inclusion
    }

    fn apply(&self, record: &AnswerRecord, locale: Locale, result: &mut EvaluationResult) {
        for criterion in InclusionCriterion::ALL {
            let met = record.inclusion.get(criterion).is_yes();
            let outcome = if met { Outcome::Passed } else { Outcome::Issue };
            result.push(Finding::new(
                criterion.id(),
                outcome,
                messages::inclusion(criterion, met, locale),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::Answer;
    use crate::testing::eligible_record;

    #[test]
    fn test_all_yes_pass_in_order() {
        let mut result = EvaluationResult::default();
        InclusionCheck.apply(&eligible_record(), Locale::En, &mut result);

        let ids: Vec<&str> = result.passed.iter().map(|f| f.criterion.as_str()).collect();
        assert_eq!(
            ids,
            vec!["age", "consent", "diagnosis", "tissue", "recist", "prognosis", "contraception"]
        );
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_no_and_unanswered_are_issues() {
        let mut record = eligible_record();
        record.inclusion.tissue = Answer::No;
        record.inclusion.prognosis = Answer::Unanswered;

        let mut result = EvaluationResult::default();
        InclusionCheck.apply(&record, Locale::En, &mut result);

        assert_eq!(result.issues.len(), 2);
        assert_eq!(result.issues[0].message, "Tumor tissue sample cannot be submitted");
        assert_eq!(result.issues[1].criterion, "prognosis");
    }
}
