//! The fixed criteria catalogue.
//!
//! Inclusion flags, lab floors and the 28 exclusion criteria are data,
//! iterated uniformly by the checks. Order here is evaluation order.

use serde::Serialize;

/// Systolic/diastolic ceiling for a passing blood pressure.
pub const BP_PASS_SYSTOLIC: f64 = 140.0;
pub const BP_PASS_DIASTOLIC: f64 = 90.0;

/// Systolic/diastolic ceiling for the needs-confirmation band.
pub const BP_WARN_SYSTOLIC: f64 = 160.0;
pub const BP_WARN_DIASTOLIC: f64 = 100.0;

/// Highest passing ECOG performance status.
pub const ECOG_MAX: u8 = 1;

/// Highest ECOG score the form accepts.
pub const ECOG_DOMAIN_MAX: u8 = 4;

pub const ALT_ULN_MAX: f64 = 2.5;
pub const ALT_ULN_MAX_LIVER_METS: f64 = 5.0;
pub const BILIRUBIN_ULN_MAX: f64 = 1.5;
pub const COAGULATION_ULN_MAX: f64 = 1.5;

/// Yes/no inclusion gates, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InclusionCriterion {
    Age,
    Consent,
    Diagnosis,
    Tissue,
    MeasurableDisease,
    Prognosis,
    Contraception,
}

impl InclusionCriterion {
    pub const ALL: [InclusionCriterion; 7] = [
        InclusionCriterion::Age,
        InclusionCriterion::Consent,
        InclusionCriterion::Diagnosis,
        InclusionCriterion::Tissue,
        InclusionCriterion::MeasurableDisease,
        InclusionCriterion::Prognosis,
        InclusionCriterion::Contraception,
    ];

    /// Stable id, also the form field name.
    pub fn id(&self) -> &'static str {
        match self {
            InclusionCriterion::Age => "age",
            InclusionCriterion::Consent => "consent",
            InclusionCriterion::Diagnosis => "diagnosis",
            InclusionCriterion::Tissue => "tissue",
            InclusionCriterion::MeasurableDisease => "recist",
            InclusionCriterion::Prognosis => "prognosis",
            InclusionCriterion::Contraception => "contraception",
        }
    }
}

/// A lab value with a minimum ("floor") threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LabFloor {
    Anc,
    Platelets,
    Hemoglobin,
    Egfr,
    Albumin,
}

impl LabFloor {
    pub const ALL: [LabFloor; 5] = [
        LabFloor::Anc,
        LabFloor::Platelets,
        LabFloor::Hemoglobin,
        LabFloor::Egfr,
        LabFloor::Albumin,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            LabFloor::Anc => "anc",
            LabFloor::Platelets => "platelets",
            LabFloor::Hemoglobin => "hemoglobin",
            LabFloor::Egfr => "egfr",
            LabFloor::Albumin => "albumin",
        }
    }

    /// Inclusive minimum.
    pub fn threshold(&self) -> f64 {
        match self {
            LabFloor::Anc => 1500.0,
            LabFloor::Platelets => 100_000.0,
            LabFloor::Hemoglobin => 9.0,
            LabFloor::Egfr => 60.0,
            LabFloor::Albumin => 2.5,
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            LabFloor::Anc | LabFloor::Platelets => "/μL",
            LabFloor::Hemoglobin | LabFloor::Albumin => " g/dL",
            LabFloor::Egfr => " mL/min/1.73m²",
        }
    }

    pub fn passes(&self, value: f64) -> bool {
        value >= self.threshold()
    }
}

/// A named exclusion criterion. Answering "yes" disqualifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExclusionCriterion {
    pub id: &'static str,
    pub label_en: &'static str,
    pub label_ja: &'static str,
}

const fn ex(
    id: &'static str,
    label_en: &'static str,
    label_ja: &'static str,
) -> ExclusionCriterion {
    ExclusionCriterion { id, label_en, label_ja }
}

/// Canonical exclusion list, in evaluation order.
pub const EXCLUSION_CRITERIA: [ExclusionCriterion; 28] = [
    ex("cancer", "Another malignancy within 24 months", "24ヵ月以内の重複がん"),
    ex("surgery", "Major surgery within 28 days", "28日以内の大手術"),
    ex("transplant", "History of bone marrow or organ transplant", "骨髄/臓器移植の既往"),
    ex("allergy", "Hypersensitivity to the investigational drug", "治験薬への過敏症"),
    ex(
        "cardiac",
        "Abnormal cardiac findings (significant heart disease, QTcF prolongation, etc.)",
        "心臓検査異常（重大な心疾患、QTcF延長等）",
    ),
    ex("cns", "Untreated brain/CNS metastases", "未治療の脳/CNS転移"),
    ex("ild", "History of ILD/pneumonitis", "ILD/肺臓炎の既往"),
    ex(
        "autoimmune",
        "Autoimmune disease within 2 years (requiring systemic therapy)",
        "2年以内の自己免疫疾患（全身療法を要したもの）",
    ),
    ex(
        "ae",
        "Unresolved adverse events from prior therapy (>Grade 1)",
        "前治療による未回復の副作用（>Grade 1）",
    ),
    ex("bleeding", "Significant bleeding within 1 month", "1ヵ月以内の重大な出血"),
    ex("htn", "Severe or uncontrolled hypertension", "重篤/コントロール不良の高血圧"),
    ex("hiv", "History of HIV infection", "HIV感染の既往"),
    ex(
        "imae",
        "History of serious immune-related adverse events",
        "免疫療法による重大な有害事象の既往",
    ),
    ex("hepatitis", "Hepatitis B or C", "B型/C型肝炎"),
    ex("chf", "Congestive heart failure / LVEF <50%", "うっ血性心不全/LVEF<50%"),
    ex("renal", "Active renal disease / nephrotic syndrome", "活動性腎疾患/ネフローゼ症候群"),
    ex("gi", "GI perforation, fistula or abscess", "消化管穿孔/瘻孔/膿瘍"),
    ex("bowel", "Bowel lesions / bowel obstruction", "腸病変/腸閉塞"),
    ex("wound", "Wound-healing complications", "創傷治癒の合併症"),
    ex("liver", "Cirrhosis / unstable liver disease", "肝硬変/不安定な肝疾患"),
    ex("chemo", "Anticancer therapy within 30 days", "30日以内の抗腫瘍薬投与"),
    ex("vaccine", "Live vaccine within 30 days", "30日以内の生ワクチン接種"),
    ex("transfusion", "Transfusion or CSF within 2 weeks", "2週間以内の輸血/CSF投与"),
    ex(
        "drugs",
        "Use of CYP inhibitors/inducers or QT-prolonging drugs",
        "CYP阻害剤/誘導剤、QT延長薬の使用",
    ),
    ex("radiation", "Recent radiotherapy", "直近の放射線療法"),
    ex("othertrial", "Participation in another clinical trial", "他の治験への参加"),
    ex("pregnant", "Pregnant or breastfeeding", "妊娠中/授乳中"),
    ex(
        "compliance",
        "Unable to comply with the schedule of activities (SoA)",
        "SoA遵守不可",
    ),
];

/// Look up an exclusion criterion by id.
pub fn find_exclusion(id: &str) -> Option<&'static ExclusionCriterion> {
    EXCLUSION_CRITERIA.iter().find(|c| c.id == id)
}

/// Number of checks that always produce exactly one finding
/// (inclusion flags, ECOG, blood pressure, lab floors, ALT, bilirubin,
/// coagulation).
pub const FIXED_CHECK_COUNT: usize =
    InclusionCriterion::ALL.len() + 1 + 1 + LabFloor::ALL.len() + 3;
