//! Laboratory value checks.
//!
//! Simple floors (ANC, platelets, hemoglobin, eGFR, albumin) are a single
//! comparison each. The ULN-normalized values have a conditioning flag:
//! liver metastases relax the ALT limit, Gilbert syndrome and
//! anticoagulant therapy turn an out-of-range bilirubin or coagulation
//! value into a warning instead of an issue.

use crate::answers::AnswerRecord;
use crate::criteria::{
    LabFloor, ALT_ULN_MAX, ALT_ULN_MAX_LIVER_METS, BILIRUBIN_ULN_MAX, COAGULATION_ULN_MAX,
};
use crate::decision::DecisionTable;
use crate::messages::{self, Locale};
use crate::types::{EvaluationResult, Finding, Outcome};

use super::{Check, CheckGroup};

/// A ULN-normalized value together with the flag that conditions it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UlnReading {
    pub value: f64,
    pub flag: bool,
}

fn alt_within_limit(r: &UlnReading) -> bool {
    r.value <= ALT_ULN_MAX
}

fn alt_within_liver_mets_limit(r: &UlnReading) -> bool {
    r.flag && r.value <= ALT_ULN_MAX_LIVER_METS
}

fn bilirubin_within_limit(r: &UlnReading) -> bool {
    r.value <= BILIRUBIN_ULN_MAX
}

fn coagulation_within_limit(r: &UlnReading) -> bool {
    r.value <= COAGULATION_ULN_MAX
}

fn exception_applies(r: &UlnReading) -> bool {
    r.flag
}

/// Flag: liver metastases.
pub const ALT_TABLE: DecisionTable<UlnReading> = DecisionTable::new(
    &[
        (alt_within_limit, Outcome::Passed),
        (alt_within_liver_mets_limit, Outcome::Passed),
    ],
    Outcome::Issue,
);

/// Flag: Gilbert syndrome.
pub const BILIRUBIN_TABLE: DecisionTable<UlnReading> = DecisionTable::new(
    &[
        (bilirubin_within_limit, Outcome::Passed),
        (exception_applies, Outcome::Warning),
    ],
    Outcome::Issue,
);

/// Flag: anticoagulant therapy.
pub const COAGULATION_TABLE: DecisionTable<UlnReading> = DecisionTable::new(
    &[
        (coagulation_within_limit, Outcome::Passed),
        (exception_applies, Outcome::Warning),
    ],
    Outcome::Issue,
);

fn floor_value(record: &AnswerRecord, lab: LabFloor) -> f64 {
    let labs = &record.labs;
    match lab {
        LabFloor::Anc => labs.anc,
        LabFloor::Platelets => labs.platelets,
        LabFloor::Hemoglobin => labs.hemoglobin,
        LabFloor::Egfr => labs.egfr,
        LabFloor::Albumin => labs.albumin,
    }
}

/// Minimum thresholds, compared on the raw value.
pub struct LabFloorCheck;

impl Check for LabFloorCheck {
    fn group(&self) -> CheckGroup {
        CheckGroup::LabFloors
    }

    fn apply(&self, record: &AnswerRecord, locale: Locale, result: &mut EvaluationResult) {
        for lab in LabFloor::ALL {
            let value = floor_value(record, lab);
            let met = lab.passes(value);
            let outcome = if met { Outcome::Passed } else { Outcome::Issue };
            result.push(Finding::new(
                lab.id(),
                outcome,
                messages::lab_floor(lab, value, met, locale),
            ));
        }
    }
}

pub struct AltCheck;

impl Check for AltCheck {
    fn group(&self) -> CheckGroup {
        CheckGroup::Alt
    }

    fn apply(&self, record: &AnswerRecord, locale: Locale, result: &mut EvaluationResult) {
        let liver_metastases = record.conditions.liver_metastases;
        let reading = UlnReading {
            value: record.labs.alt_uln,
            flag: liver_metastases,
        };
        let threshold = if liver_metastases {
            ALT_ULN_MAX_LIVER_METS
        } else {
            ALT_ULN_MAX
        };

        let outcome = ALT_TABLE.decide(&reading);
        result.push(Finding::new(
            "alt",
            outcome,
            messages::alt(
                reading.value,
                threshold,
                liver_metastases,
                outcome.is_passed(),
                locale,
            ),
        ));
    }
}

pub struct BilirubinCheck;

impl Check for BilirubinCheck {
    fn group(&self) -> CheckGroup {
        CheckGroup::Bilirubin
    }

    fn apply(&self, record: &AnswerRecord, locale: Locale, result: &mut EvaluationResult) {
        let reading = UlnReading {
            value: record.labs.bilirubin_uln,
            flag: record.conditions.gilbert_syndrome,
        };
        let outcome = BILIRUBIN_TABLE.decide(&reading);
        result.push(Finding::new(
            "bilirubin",
            outcome,
            messages::bilirubin(reading.value, outcome, locale),
        ));
    }
}

pub struct CoagulationCheck;

impl Check for CoagulationCheck {
    fn group(&self) -> CheckGroup {
        CheckGroup::Coagulation
    }

    fn apply(&self, record: &AnswerRecord, locale: Locale, result: &mut EvaluationResult) {
        let reading = UlnReading {
            value: record.labs.coagulation_uln,
            flag: record.conditions.anticoagulant_therapy,
        };
        let outcome = COAGULATION_TABLE.decide(&reading);
        result.push(Finding::new(
            "coagulation",
            outcome,
            messages::coagulation(reading.value, outcome, locale),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::eligible_record;

    fn reading(value: f64, flag: bool) -> UlnReading {
        UlnReading { value, flag }
    }

    #[test]
    fn test_alt_threshold_depends_on_liver_mets() {
        assert_eq!(ALT_TABLE.decide(&reading(3.0, false)), Outcome::Issue);
        assert_eq!(ALT_TABLE.decide(&reading(3.0, true)), Outcome::Passed);
        assert_eq!(ALT_TABLE.decide(&reading(5.0, true)), Outcome::Passed);
        assert_eq!(ALT_TABLE.decide(&reading(5.01, true)), Outcome::Issue);
        assert_eq!(ALT_TABLE.decide(&reading(2.5, false)), Outcome::Passed);
    }

    #[test]
    fn test_bilirubin_exception_path() {
        assert_eq!(BILIRUBIN_TABLE.decide(&reading(1.5, false)), Outcome::Passed);
        assert_eq!(BILIRUBIN_TABLE.decide(&reading(2.0, true)), Outcome::Warning);
        assert_eq!(BILIRUBIN_TABLE.decide(&reading(2.0, false)), Outcome::Issue);
        // In-range values pass whether or not the flag is set.
        assert_eq!(BILIRUBIN_TABLE.decide(&reading(1.0, true)), Outcome::Passed);
    }

    #[test]
    fn test_coagulation_exception_path() {
        assert_eq!(COAGULATION_TABLE.decide(&reading(1.5, false)), Outcome::Passed);
        assert_eq!(COAGULATION_TABLE.decide(&reading(2.5, true)), Outcome::Warning);
        assert_eq!(COAGULATION_TABLE.decide(&reading(2.5, false)), Outcome::Issue);
    }

    #[test]
    fn test_lab_floors_at_threshold_pass() {
        let mut result = EvaluationResult::default();
        LabFloorCheck.apply(&eligible_record(), Locale::En, &mut result);

        assert_eq!(result.passed.len(), 5);
        assert_eq!(result.passed[1].message, "Platelets 100,000/μL: at or above the threshold");
    }

    #[test]
    fn test_anc_just_below_threshold() {
        let mut record = eligible_record();
        record.labs.anc = 1499.999;

        let mut result = EvaluationResult::default();
        LabFloorCheck.apply(&record, Locale::Ja, &mut result);

        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].message, "ANC 1499.999/μL — 基準値(≥1500)未満");
    }

    #[test]
    fn test_alt_issue_names_effective_threshold() {
        let mut record = eligible_record();
        record.labs.alt_uln = 6.0;
        record.conditions.liver_metastases = true;

        let mut result = EvaluationResult::default();
        AltCheck.apply(&record, Locale::En, &mut result);

        assert_eq!(result.issues[0].message, "ALT 6×ULN: above the limit (≤5×ULN)");
    }

    #[test]
    fn test_coagulation_warning_message() {
        let mut record = eligible_record();
        record.labs.coagulation_uln = 2.0;
        record.conditions.anticoagulant_therapy = true;

        let mut result = EvaluationResult::default();
        CoagulationCheck.apply(&record, Locale::Ja, &mut result);

        assert_eq!(
            result.warnings[0].message,
            "凝固検査 2×ULN — 抗凝固薬使用中のため治療範囲内であれば許容"
        );
    }
}
