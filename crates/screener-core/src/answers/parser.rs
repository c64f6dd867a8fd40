//! Answer parsing from YAML/JSON.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::criteria::{find_exclusion, EXCLUSION_CRITERIA};

use super::record::{
    Answer, AnswerRecord, BloodPressure, ConditioningFlags, InclusionAnswers, LabValues,
};
use super::RecordError;

/// A screening form submission as entered.
///
/// Field names follow the screening form. Every field is optional here;
/// [`RawAnswers::into_record`] decides whether the submission is complete.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawAnswers {
    #[serde(default)]
    pub age: Option<Answer>,
    #[serde(default)]
    pub consent: Option<Answer>,
    #[serde(default)]
    pub diagnosis: Option<Answer>,
    #[serde(default)]
    pub tissue: Option<Answer>,
    #[serde(default)]
    pub recist: Option<Answer>,
    #[serde(default)]
    pub prognosis: Option<Answer>,
    #[serde(default)]
    pub ecog: Option<u8>,
    #[serde(default)]
    pub sbp: Option<f64>,
    #[serde(default)]
    pub dbp: Option<f64>,
    #[serde(default)]
    pub contraception: Option<Answer>,

    #[serde(default)]
    pub anc: Option<f64>,
    #[serde(default)]
    pub platelets: Option<f64>,
    #[serde(default)]
    pub hemoglobin: Option<f64>,
    #[serde(default)]
    pub egfr: Option<f64>,
    #[serde(default)]
    pub albumin: Option<f64>,
    #[serde(default)]
    pub alt_uln: Option<f64>,
    #[serde(default)]
    pub liver_mets: bool,
    #[serde(default)]
    pub tbil_uln: Option<f64>,
    #[serde(default)]
    pub gilbert: bool,
    #[serde(default)]
    pub coag_uln: Option<f64>,
    #[serde(default)]
    pub anticoag: bool,

    /// Exclusion answers keyed by criterion id
    #[serde(default)]
    pub exclusions: BTreeMap<String, Answer>,
}

impl RawAnswers {
    /// Parse answers from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, RecordError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse answers from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse answers from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, RecordError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse answers from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, RecordError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parse answers from a file, picking the format by extension
    /// (`.json` is JSON, anything else YAML).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RecordError> {
        let path = path.as_ref();
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json_file(path)
        } else {
            Self::from_yaml_file(path)
        }
    }

    /// Whether a form field has a value. Exclusions are addressed as
    /// `exclusions.<id>`; checkbox fields always count as present.
    pub fn has_field(&self, field: &str) -> bool {
        if let Some(id) = field.strip_prefix("exclusions.") {
            return self.exclusions.contains_key(id);
        }

        match field {
            "age" => self.age.is_some(),
            "consent" => self.consent.is_some(),
            "diagnosis" => self.diagnosis.is_some(),
            "tissue" => self.tissue.is_some(),
            "recist" => self.recist.is_some(),
            "prognosis" => self.prognosis.is_some(),
            "ecog" => self.ecog.is_some(),
            "sbp" => self.sbp.is_some(),
            "dbp" => self.dbp.is_some(),
            "contraception" => self.contraception.is_some(),
            "anc" => self.anc.is_some(),
            "platelets" => self.platelets.is_some(),
            "hemoglobin" => self.hemoglobin.is_some(),
            "egfr" => self.egfr.is_some(),
            "albumin" => self.albumin.is_some(),
            "alt_uln" => self.alt_uln.is_some(),
            "tbil_uln" => self.tbil_uln.is_some(),
            "coag_uln" => self.coag_uln.is_some(),
            "liver_mets" | "gilbert" | "anticoag" => true,
            _ => false,
        }
    }

    /// All required fields without a value, in form order.
    pub fn missing_fields(&self) -> Vec<String> {
        required_fields()
            .filter(|field| !self.has_field(field))
            .collect()
    }

    /// Build a validated record, failing on the first class of problem found:
    /// unknown exclusion ids, then missing fields, then out-of-range values.
    pub fn into_record(self) -> Result<AnswerRecord, RecordError> {
        if let Some(unknown) = self
            .exclusions
            .keys()
            .find(|id| find_exclusion(id).is_none())
        {
            return Err(RecordError::UnknownExclusion(unknown.clone()));
        }

        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(RecordError::MissingFields(missing));
        }

        // Every Option below is Some after the missing-field check.
        let record = AnswerRecord {
            inclusion: InclusionAnswers {
                age: required(self.age, "age")?,
                consent: required(self.consent, "consent")?,
                diagnosis: required(self.diagnosis, "diagnosis")?,
                tissue: required(self.tissue, "tissue")?,
                measurable_disease: required(self.recist, "recist")?,
                prognosis: required(self.prognosis, "prognosis")?,
                contraception: required(self.contraception, "contraception")?,
            },
            ecog: required(self.ecog, "ecog")?,
            blood_pressure: BloodPressure {
                systolic: required(self.sbp, "sbp")?,
                diastolic: required(self.dbp, "dbp")?,
            },
            labs: LabValues {
                anc: required(self.anc, "anc")?,
                platelets: required(self.platelets, "platelets")?,
                hemoglobin: required(self.hemoglobin, "hemoglobin")?,
                egfr: required(self.egfr, "egfr")?,
                albumin: required(self.albumin, "albumin")?,
                alt_uln: required(self.alt_uln, "alt_uln")?,
                bilirubin_uln: required(self.tbil_uln, "tbil_uln")?,
                coagulation_uln: required(self.coag_uln, "coag_uln")?,
            },
            conditions: ConditioningFlags {
                liver_metastases: self.liver_mets,
                gilbert_syndrome: self.gilbert,
                anticoagulant_therapy: self.anticoag,
            },
            exclusions: self.exclusions,
        };

        record.validate()?;
        Ok(record)
    }
}

/// Required form fields in form order.
fn required_fields() -> impl Iterator<Item = String> {
    const SCALAR_FIELDS: [&str; 18] = [
        "age",
        "consent",
        "diagnosis",
        "tissue",
        "recist",
        "prognosis",
        "ecog",
        "sbp",
        "dbp",
        "contraception",
        "anc",
        "platelets",
        "hemoglobin",
        "egfr",
        "albumin",
        "alt_uln",
        "tbil_uln",
        "coag_uln",
    ];

    SCALAR_FIELDS
        .into_iter()
        .map(str::to_string)
        .chain(EXCLUSION_CRITERIA.iter().map(|c| format!("exclusions.{}", c.id)))
}

fn required<T>(value: Option<T>, field: &str) -> Result<T, RecordError> {
    value.ok_or_else(|| RecordError::MissingFields(vec![field.to_string()]))
}
