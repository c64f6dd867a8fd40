//! The validated answer record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::criteria::{InclusionCriterion, ECOG_DOMAIN_MAX, EXCLUSION_CRITERIA};

use super::RecordError;

/// A yes/no question answer.
///
/// Anything other than "yes" or "no" reads as `Unanswered`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Answer {
    Yes,
    No,
    Unanswered,
}

impl Answer {
    pub fn is_yes(&self) -> bool {
        matches!(self, Answer::Yes)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Answer::Yes => "yes",
            Answer::No => "no",
            Answer::Unanswered => "unanswered",
        }
    }
}

impl From<&str> for Answer {
    fn from(value: &str) -> Self {
        match value.trim() {
            "yes" => Answer::Yes,
            "no" => Answer::No,
            _ => Answer::Unanswered,
        }
    }
}

impl From<String> for Answer {
    fn from(value: String) -> Self {
        Answer::from(value.as_str())
    }
}

impl From<Answer> for String {
    fn from(value: Answer) -> Self {
        value.as_str().to_string()
    }
}

/// Yes/no inclusion gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InclusionAnswers {
    /// 18 years or older
    pub age: Answer,

    /// Able to sign the consent document
    pub consent: Answer,

    /// Confirmed advanced solid tumor, standard therapy failed or not tolerated
    pub diagnosis: Answer,

    /// Tumor tissue sample can be submitted
    pub tissue: Answer,

    /// Measurable disease per RECIST 1.1
    pub measurable_disease: Answer,

    /// Life expectancy of at least 12 weeks
    pub prognosis: Answer,

    /// Agrees to adequate contraception
    pub contraception: Answer,
}

impl InclusionAnswers {
    pub fn get(&self, criterion: InclusionCriterion) -> Answer {
        match criterion {
            InclusionCriterion::Age => self.age,
            InclusionCriterion::Consent => self.consent,
            InclusionCriterion::Diagnosis => self.diagnosis,
            InclusionCriterion::Tissue => self.tissue,
            InclusionCriterion::MeasurableDisease => self.measurable_disease,
            InclusionCriterion::Prognosis => self.prognosis,
            InclusionCriterion::Contraception => self.contraception,
        }
    }
}

/// Blood pressure reading in mmHg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BloodPressure {
    pub systolic: f64,
    pub diastolic: f64,
}

/// Laboratory values. ULN-normalized values are ratios.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabValues {
    /// Absolute neutrophil count, /μL
    pub anc: f64,
    /// Platelet count, /μL
    pub platelets: f64,
    /// g/dL
    pub hemoglobin: f64,
    /// mL/min/1.73m²
    pub egfr: f64,
    /// g/dL
    pub albumin: f64,
    pub alt_uln: f64,
    pub bilirubin_uln: f64,
    pub coagulation_uln: f64,
}

/// Flags that relax a threshold or open an exception path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditioningFlags {
    pub liver_metastases: bool,
    pub gilbert_syndrome: bool,
    pub anticoagulant_therapy: bool,
}

/// A fully populated set of screening answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub inclusion: InclusionAnswers,

    /// ECOG performance status, 0-4
    pub ecog: u8,

    pub blood_pressure: BloodPressure,

    pub labs: LabValues,

    #[serde(default)]
    pub conditions: ConditioningFlags,

    /// Exclusion answers keyed by criterion id
    pub exclusions: BTreeMap<String, Answer>,
}

impl AnswerRecord {
    /// Numeric fields with their form names, in form order.
    pub fn numeric_fields(&self) -> [(&'static str, f64); 10] {
        let bp = &self.blood_pressure;
        let labs = &self.labs;
        [
            ("sbp", bp.systolic),
            ("dbp", bp.diastolic),
            ("anc", labs.anc),
            ("platelets", labs.platelets),
            ("hemoglobin", labs.hemoglobin),
            ("egfr", labs.egfr),
            ("albumin", labs.albumin),
            ("alt_uln", labs.alt_uln),
            ("tbil_uln", labs.bilirubin_uln),
            ("coag_uln", labs.coagulation_uln),
        ]
    }

    /// Answer for an exclusion criterion. Absent ids read as `Unanswered`.
    pub fn exclusion(&self, id: &str) -> Answer {
        self.exclusions
            .get(id)
            .copied()
            .unwrap_or(Answer::Unanswered)
    }

    /// Check the preconditions evaluation relies on.
    pub fn validate(&self) -> Result<(), RecordError> {
        for (field, value) in self.numeric_fields() {
            if !value.is_finite() {
                return Err(RecordError::NonFinite { field });
            }
        }

        if self.ecog > ECOG_DOMAIN_MAX {
            return Err(RecordError::OutOfRange {
                field: "ecog",
                value: f64::from(self.ecog),
            });
        }

        if let Some(unknown) = self
            .exclusions
            .keys()
            .find(|id| !EXCLUSION_CRITERIA.iter().any(|c| c.id == id.as_str()))
        {
            return Err(RecordError::UnknownExclusion(unknown.clone()));
        }

        let missing: Vec<String> = EXCLUSION_CRITERIA
            .iter()
            .filter(|c| !self.exclusions.contains_key(c.id))
            .map(|c| format!("exclusions.{}", c.id))
            .collect();
        if !missing.is_empty() {
            return Err(RecordError::MissingFields(missing));
        }

        Ok(())
    }
}
