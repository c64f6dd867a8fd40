//! Finding and verdict prose.
//!
//! `Ja` reproduces the wording of the original screening form; `En`
//! carries the same content (criterion, values, exception applied).

use serde::{Deserialize, Serialize};

use crate::criteria::{ExclusionCriterion, InclusionCriterion, LabFloor};
use crate::types::Outcome;

/// Language used for finding messages and report text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ja,
}

/// Format a number the way the form displays it (no trailing `.0`).
pub fn number(value: f64) -> String {
    format!("{}", value)
}

/// Format a number with thousands separators in the integer part.
pub fn grouped(value: f64) -> String {
    let plain = number(value);
    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(plain.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }

    match frac_part {
        Some(frac) => format!("{sign}{out}.{frac}"),
        None => format!("{sign}{out}"),
    }
}

pub(crate) fn inclusion(criterion: InclusionCriterion, met: bool, locale: Locale) -> String {
    let text = match (locale, criterion, met) {
        (Locale::En, InclusionCriterion::Age, true) => "Age requirement met (18 years or older)",
        (Locale::En, InclusionCriterion::Age, false) => "Age requirement not met (under 18)",
        (Locale::En, InclusionCriterion::Consent, true) => "Able to give informed consent",
        (Locale::En, InclusionCriterion::Consent, false) => {
            "Unable to sign the informed consent document"
        }
        (Locale::En, InclusionCriterion::Diagnosis, true) => {
            "Advanced solid tumor pathologically confirmed; \
             standard therapy failed or not tolerated"
        }
        (Locale::En, InclusionCriterion::Diagnosis, false) => {
            "Advanced solid tumor not confirmed, or prior standard therapy requirement not met"
        }
        (Locale::En, InclusionCriterion::Tissue, true) => "Tumor tissue sample can be submitted",
        (Locale::En, InclusionCriterion::Tissue, false) => {
            "Tumor tissue sample cannot be submitted"
        }
        (Locale::En, InclusionCriterion::MeasurableDisease, true) => {
            "Measurable disease per RECIST 1.1"
        }
        (Locale::En, InclusionCriterion::MeasurableDisease, false) => {
            "No measurable disease per RECIST 1.1"
        }
        (Locale::En, InclusionCriterion::Prognosis, true) => "Life expectancy of 12 weeks or more",
        (Locale::En, InclusionCriterion::Prognosis, false) => "Life expectancy under 12 weeks",
        (Locale::En, InclusionCriterion::Contraception, true) => {
            "Agrees to use adequate contraception"
        }
        (Locale::En, InclusionCriterion::Contraception, false) => {
            "Does not agree to use adequate contraception"
        }

        (Locale::Ja, InclusionCriterion::Age, true) => "年齢要件（18歳以上）を満たす",
        (Locale::Ja, InclusionCriterion::Age, false) => "年齢要件を満たさない（18歳未満）",
        (Locale::Ja, InclusionCriterion::Consent, true) => "同意能力あり",
        (Locale::Ja, InclusionCriterion::Consent, false) => "同意説明文書への署名能力なし",
        (Locale::Ja, InclusionCriterion::Diagnosis, true) => {
            "進行固形がんの病理学的確認あり、標準治療無効/不耐"
        }
        (Locale::Ja, InclusionCriterion::Diagnosis, false) => {
            "進行固形がんの確認が得られていない、又は標準治療歴の条件を満たさない"
        }
        (Locale::Ja, InclusionCriterion::Tissue, true) => "腫瘍組織検体の提出が可能",
        (Locale::Ja, InclusionCriterion::Tissue, false) => "腫瘍組織検体を提出できない",
        (Locale::Ja, InclusionCriterion::MeasurableDisease, true) => {
            "RECIST 1.1に基づく測定可能病変あり"
        }
        (Locale::Ja, InclusionCriterion::MeasurableDisease, false) => {
            "RECIST 1.1に基づく測定可能病変なし"
        }
        (Locale::Ja, InclusionCriterion::Prognosis, true) => "12週間以上の生存見込みあり",
        (Locale::Ja, InclusionCriterion::Prognosis, false) => "12週間以上の生存見込みがない",
        (Locale::Ja, InclusionCriterion::Contraception, true) => "適切な避妊への同意あり",
        (Locale::Ja, InclusionCriterion::Contraception, false) => "適切な避妊への同意が得られない",
    };
    text.to_string()
}

pub(crate) fn ecog(score: u8, met: bool, locale: Locale) -> String {
    match (locale, met) {
        (Locale::En, true) => format!("ECOG PS {score}: meets the criterion"),
        (Locale::En, false) => format!("ECOG PS {score}: PS 0-1 required (ineligible)"),
        (Locale::Ja, true) => format!("ECOG PS {score} — 基準を満たす"),
        (Locale::Ja, false) => format!("ECOG PS {score} — PS 0-1が必要（不適格）"),
    }
}

pub(crate) fn blood_pressure(
    systolic: f64,
    diastolic: f64,
    outcome: Outcome,
    locale: Locale,
) -> String {
    let reading = format!("{}/{}", number(systolic), number(diastolic));
    match (locale, outcome) {
        (Locale::En, Outcome::Passed) => {
            format!("Blood pressure {reading} mmHg: within normal range")
        }
        (Locale::En, Outcome::Warning) => format!(
            "Blood pressure {reading} mmHg: above the eligibility limit (≤140/90); \
             confirm how well it is controlled"
        ),
        (Locale::En, Outcome::Issue) => format!(
            "Blood pressure {reading} mmHg: may meet the exclusion criterion \
             (severe or uncontrolled hypertension)"
        ),
        (Locale::Ja, Outcome::Passed) => format!("血圧 {reading} mmHg — 正常範囲"),
        (Locale::Ja, Outcome::Warning) => format!(
            "血圧 {reading} mmHg — 適格基準(≤140/90)を超過。コントロール状況の確認要"
        ),
        (Locale::Ja, Outcome::Issue) => format!(
            "血圧 {reading} mmHg — 除外基準に該当する可能性（重篤/コントロール不良の高血圧）"
        ),
    }
}

fn lab_name(lab: LabFloor, locale: Locale) -> &'static str {
    match (locale, lab) {
        (_, LabFloor::Anc) => "ANC",
        (_, LabFloor::Egfr) => "eGFR",
        (Locale::En, LabFloor::Platelets) => "Platelets",
        (Locale::En, LabFloor::Hemoglobin) => "Hemoglobin",
        (Locale::En, LabFloor::Albumin) => "Albumin",
        (Locale::Ja, LabFloor::Platelets) => "血小板",
        (Locale::Ja, LabFloor::Hemoglobin) => "ヘモグロビン",
        (Locale::Ja, LabFloor::Albumin) => "アルブミン",
    }
}

fn lab_threshold(lab: LabFloor) -> &'static str {
    match lab {
        LabFloor::Anc => "1500",
        LabFloor::Platelets => "100,000",
        LabFloor::Hemoglobin => "9.0",
        LabFloor::Egfr => "60",
        LabFloor::Albumin => "2.5",
    }
}

pub(crate) fn lab_floor(lab: LabFloor, value: f64, met: bool, locale: Locale) -> String {
    let shown = match lab {
        LabFloor::Platelets => grouped(value),
        _ => number(value),
    };
    let name = lab_name(lab, locale);
    let unit = lab.unit();
    let threshold = lab_threshold(lab);

    match (locale, met) {
        (Locale::En, true) => format!("{name} {shown}{unit}: at or above the threshold"),
        (Locale::En, false) => format!("{name} {shown}{unit}: below the threshold (≥{threshold})"),
        (Locale::Ja, true) => format!("{name} {shown}{unit} — 基準値以上"),
        (Locale::Ja, false) => format!("{name} {shown}{unit} — 基準値(≥{threshold})未満"),
    }
}

pub(crate) fn alt(
    value: f64,
    threshold: f64,
    liver_metastases: bool,
    met: bool,
    locale: Locale,
) -> String {
    let shown = number(value);
    match (locale, met) {
        (Locale::En, true) => {
            let note = if liver_metastases {
                " (liver metastases: ≤5×ULN)"
            } else {
                ""
            };
            format!("ALT {shown}×ULN: within the limit{note}")
        }
        (Locale::En, false) => format!(
            "ALT {shown}×ULN: above the limit (≤{}×ULN)",
            number(threshold)
        ),
        (Locale::Ja, true) => {
            let note = if liver_metastases {
                "（肝転移あり：≤5×ULN）"
            } else {
                ""
            };
            format!("ALT {shown}×ULN — 基準値以下{note}")
        }
        (Locale::Ja, false) => format!("ALT {shown}×ULN — 基準値(≤{}×ULN)超過", number(threshold)),
    }
}

pub(crate) fn bilirubin(value: f64, outcome: Outcome, locale: Locale) -> String {
    let shown = number(value);
    match (locale, outcome) {
        (Locale::En, Outcome::Passed) => format!("Total bilirubin {shown}×ULN: within the limit"),
        (Locale::En, Outcome::Warning) => format!(
            "Total bilirubin {shown}×ULN: acceptable with Gilbert syndrome \
             if direct bilirubin is below 1.5×ULN"
        ),
        (Locale::En, Outcome::Issue) => {
            format!("Total bilirubin {shown}×ULN: above the limit (≤1.5×ULN)")
        }
        (Locale::Ja, Outcome::Passed) => format!("総ビリルビン {shown}×ULN — 基準値以下"),
        (Locale::Ja, Outcome::Warning) => format!(
            "総ビリルビン {shown}×ULN — ジルベール症候群のため直接ビリルビンが1.5×ULN未満であれば許容"
        ),
        (Locale::Ja, Outcome::Issue) => format!("総ビリルビン {shown}×ULN — 基準値(≤1.5×ULN)超過"),
    }
}

pub(crate) fn coagulation(value: f64, outcome: Outcome, locale: Locale) -> String {
    let shown = number(value);
    match (locale, outcome) {
        (Locale::En, Outcome::Passed) => format!("Coagulation {shown}×ULN: within the limit"),
        (Locale::En, Outcome::Warning) => format!(
            "Coagulation {shown}×ULN: acceptable on anticoagulant therapy \
             if within the therapeutic range"
        ),
        (Locale::En, Outcome::Issue) => {
            format!("Coagulation {shown}×ULN: above the limit (≤1.5×ULN)")
        }
        (Locale::Ja, Outcome::Passed) => format!("凝固検査 {shown}×ULN — 基準値以下"),
        (Locale::Ja, Outcome::Warning) => format!(
            "凝固検査 {shown}×ULN — 抗凝固薬使用中のため治療範囲内であれば許容"
        ),
        (Locale::Ja, Outcome::Issue) => format!("凝固検査 {shown}×ULN — 基準値(≤1.5×ULN)超過"),
    }
}

/// Localized label of an exclusion criterion.
pub fn exclusion_label(criterion: &ExclusionCriterion, locale: Locale) -> &'static str {
    match locale {
        Locale::En => criterion.label_en,
        Locale::Ja => criterion.label_ja,
    }
}

pub(crate) fn exclusion(criterion: &ExclusionCriterion, met: bool, locale: Locale) -> String {
    let label = exclusion_label(criterion, locale);
    match (locale, met) {
        (Locale::En, true) => format!("Exclusion criterion met: {label}"),
        (Locale::En, false) => format!("Exclusion criterion not met: {label}"),
        (Locale::Ja, true) => format!("除外基準に該当: {label}"),
        (Locale::Ja, false) => format!("除外基準に非該当: {label}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_drops_trailing_zero() {
        assert_eq!(number(1500.0), "1500");
        assert_eq!(number(9.0), "9");
        assert_eq!(number(2.5), "2.5");
        assert_eq!(number(1499.999), "1499.999");
    }

    #[test]
    fn test_grouped() {
        assert_eq!(grouped(100000.0), "100,000");
        assert_eq!(grouped(1234567.0), "1,234,567");
        assert_eq!(grouped(999.0), "999");
        assert_eq!(grouped(150000.5), "150,000.5");
    }

    #[test]
    fn test_lab_floor_ja_matches_form_wording() {
        assert_eq!(
            lab_floor(LabFloor::Platelets, 95000.0, false, Locale::Ja),
            "血小板 95,000/μL — 基準値(≥100,000)未満"
        );
        assert_eq!(
            lab_floor(LabFloor::Hemoglobin, 9.0, true, Locale::Ja),
            "ヘモグロビン 9 g/dL — 基準値以上"
        );
    }

    #[test]
    fn test_alt_notes_liver_exception() {
        let text = alt(3.0, 5.0, true, true, Locale::Ja);
        assert_eq!(text, "ALT 3×ULN — 基準値以下（肝転移あり：≤5×ULN）");

        let text = alt(3.0, 2.5, false, false, Locale::En);
        assert_eq!(text, "ALT 3×ULN: above the limit (≤2.5×ULN)");
    }

    #[test]
    fn test_blood_pressure_includes_both_readings() {
        let text = blood_pressure(150.0, 95.0, Outcome::Warning, Locale::En);
        assert!(text.contains("150/95"));
    }

    #[test]
    fn test_locale_serde() {
        assert_eq!(serde_json::to_string(&Locale::Ja).unwrap(), "\"ja\"");
    }
}
