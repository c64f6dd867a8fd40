//! Performance status and blood pressure.

use crate::answers::{AnswerRecord, BloodPressure};
use crate::criteria::{
    BP_PASS_DIASTOLIC, BP_PASS_SYSTOLIC, BP_WARN_DIASTOLIC, BP_WARN_SYSTOLIC, ECOG_MAX,
};
use crate::decision::DecisionTable;
use crate::messages::{self, Locale};
use crate::types::{EvaluationResult, Finding, Outcome};

use super::{Check, CheckGroup};

fn negative_reading(bp: &BloodPressure) -> bool {
    bp.systolic < 0.0 || bp.diastolic < 0.0
}

fn within_normal(bp: &BloodPressure) -> bool {
    bp.systolic <= BP_PASS_SYSTOLIC && bp.diastolic <= BP_PASS_DIASTOLIC
}

fn within_warning_band(bp: &BloodPressure) -> bool {
    bp.systolic <= BP_WARN_SYSTOLIC && bp.diastolic <= BP_WARN_DIASTOLIC
}

/// ≤140/90 passes, ≤160/100 needs confirmation, anything else is an issue.
/// A negative reading is never plausible and always an issue.
pub const BLOOD_PRESSURE_TABLE: DecisionTable<BloodPressure> = DecisionTable::new(
    &[
        (negative_reading, Outcome::Issue),
        (within_normal, Outcome::Passed),
        (within_warning_band, Outcome::Warning),
    ],
    Outcome::Issue,
);

/// ECOG PS 0 or 1 passes.
pub struct PerformanceStatusCheck;

impl Check for PerformanceStatusCheck {
    fn group(&self) -> CheckGroup {
        CheckGroup::PerformanceStatus
    }

    fn apply(&self, record: &AnswerRecord, locale: Locale, result: &mut EvaluationResult) {
        let met = record.ecog <= ECOG_MAX;
        let outcome = if met { Outcome::Passed } else { Outcome::Issue };
        result.push(Finding::new(
            "ecog",
            outcome,
            messages::ecog(record.ecog, met, locale),
        ));
    }
}

pub struct BloodPressureCheck;

impl Check for BloodPressureCheck {
    fn group(&self) -> CheckGroup {
        CheckGroup::BloodPressure
    }

    fn apply(&self, record: &AnswerRecord, locale: Locale, result: &mut EvaluationResult) {
        let bp = &record.blood_pressure;
        let outcome = BLOOD_PRESSURE_TABLE.decide(bp);
        result.push(Finding::new(
            "blood_pressure",
            outcome,
            messages::blood_pressure(bp.systolic, bp.diastolic, outcome, locale),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::eligible_record;

    fn bp(systolic: f64, diastolic: f64) -> BloodPressure {
        BloodPressure { systolic, diastolic }
    }

    #[test]
    fn test_bp_boundaries() {
        assert_eq!(BLOOD_PRESSURE_TABLE.decide(&bp(140.0, 90.0)), Outcome::Passed);
        assert_eq!(BLOOD_PRESSURE_TABLE.decide(&bp(140.1, 90.0)), Outcome::Warning);
        assert_eq!(BLOOD_PRESSURE_TABLE.decide(&bp(160.0, 100.0)), Outcome::Warning);
        assert_eq!(BLOOD_PRESSURE_TABLE.decide(&bp(160.0, 100.5)), Outcome::Issue);
    }

    #[test]
    fn test_bp_one_reading_high_is_enough() {
        // Normal systolic does not rescue a high diastolic.
        assert_eq!(BLOOD_PRESSURE_TABLE.decide(&bp(110.0, 95.0)), Outcome::Warning);
        assert_eq!(BLOOD_PRESSURE_TABLE.decide(&bp(170.0, 70.0)), Outcome::Issue);
    }

    #[test]
    fn test_bp_negative_reading_is_issue() {
        assert_eq!(BLOOD_PRESSURE_TABLE.decide(&bp(-10.0, 80.0)), Outcome::Issue);
        assert_eq!(BLOOD_PRESSURE_TABLE.decide(&bp(120.0, -1.0)), Outcome::Issue);
        // Ruled out before the pass band, which a negative reading would satisfy.
        assert_eq!(BLOOD_PRESSURE_TABLE.decide(&bp(-10.0, -10.0)), Outcome::Issue);

        let mut record = eligible_record();
        record.blood_pressure = bp(-10.0, 80.0);

        let mut result = EvaluationResult::default();
        BloodPressureCheck.apply(&record, Locale::En, &mut result);

        assert_eq!(result.issues.len(), 1);
        assert!(result.issues[0].message.contains("-10/80"));
    }

    #[test]
    fn test_bp_finding_text() {
        let mut record = eligible_record();
        record.blood_pressure = bp(150.0, 95.0);

        let mut result = EvaluationResult::default();
        BloodPressureCheck.apply(&record, Locale::Ja, &mut result);

        assert_eq!(
            result.warnings[0].message,
            "血圧 150/95 mmHg — 適格基準(≤140/90)を超過。コントロール状況の確認要"
        );
    }

    #[test]
    fn test_ecog() {
        for (score, passes) in [(0, true), (1, true), (2, false), (4, false)] {
            let mut record = eligible_record();
            record.ecog = score;

            let mut result = EvaluationResult::default();
            PerformanceStatusCheck.apply(&record, Locale::En, &mut result);

            assert_eq!(result.passed.len() == 1, passes, "ECOG {}", score);
            let finding = result.finding("ecog").unwrap();
            assert!(finding.message.contains(&format!("ECOG PS {}", score)));
        }
    }
}
