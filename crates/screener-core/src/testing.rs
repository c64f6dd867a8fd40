//! Shared fixtures for unit tests.

use std::collections::BTreeMap;

use crate::answers::{
    Answer, AnswerRecord, BloodPressure, ConditioningFlags, InclusionAnswers, LabValues,
};
use crate::criteria::EXCLUSION_CRITERIA;

/// Every inclusion met, labs exactly at their thresholds, no exclusions.
pub const ELIGIBLE_YAML: &str = r#"
age: "yes"
consent: "yes"
diagnosis: "yes"
tissue: "yes"
recist: "yes"
prognosis: "yes"
ecog: 0
sbp: 120
dbp: 80
contraception: "yes"
anc: 1500
platelets: 100000
hemoglobin: 9.0
egfr: 60
albumin: 2.5
alt_uln: 2.5
liver_mets: false
tbil_uln: 1.5
gilbert: false
coag_uln: 1.5
anticoag: false
exclusions:
  cancer: "no"
  surgery: "no"
  transplant: "no"
  allergy: "no"
  cardiac: "no"
  cns: "no"
  ild: "no"
  autoimmune: "no"
  ae: "no"
  bleeding: "no"
  htn: "no"
  hiv: "no"
  imae: "no"
  hepatitis: "no"
  chf: "no"
  renal: "no"
  gi: "no"
  bowel: "no"
  wound: "no"
  liver: "no"
  chemo: "no"
  vaccine: "no"
  transfusion: "no"
  drugs: "no"
  radiation: "no"
  othertrial: "no"
  pregnant: "no"
  compliance: "no"
"#;

/// The record described by [`ELIGIBLE_YAML`], built directly.
pub fn eligible_record() -> AnswerRecord {
    AnswerRecord {
        inclusion: InclusionAnswers {
            age: Answer::Yes,
            consent: Answer::Yes,
            diagnosis: Answer::Yes,
            tissue: Answer::Yes,
            measurable_disease: Answer::Yes,
            prognosis: Answer::Yes,
            contraception: Answer::Yes,
        },
        ecog: 0,
        blood_pressure: BloodPressure {
            systolic: 120.0,
            diastolic: 80.0,
        },
        labs: LabValues {
            anc: 1500.0,
            platelets: 100_000.0,
            hemoglobin: 9.0,
            egfr: 60.0,
            albumin: 2.5,
            alt_uln: 2.5,
            bilirubin_uln: 1.5,
            coagulation_uln: 1.5,
        },
        conditions: ConditioningFlags::default(),
        exclusions: EXCLUSION_CRITERIA
            .iter()
            .map(|c| (c.id.to_string(), Answer::No))
            .collect::<BTreeMap<_, _>>(),
    }
}
