//! Screening report: verdict, counts and findings ready for display.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::criteria::find_exclusion;
use crate::messages::{exclusion_label, Locale};
use crate::types::{EvaluationResult, Finding};
use crate::verdict::{VerdictClassifier, VerdictSummary};

/// Everything the result screen shows for one evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningReport {
    pub summary: VerdictSummary,
    pub result: EvaluationResult,
    pub locale: Locale,
    pub evaluated_at: DateTime<Utc>,
}

impl ScreeningReport {
    pub fn new(result: EvaluationResult, locale: Locale) -> Self {
        Self {
            summary: VerdictClassifier::new().summarize(&result),
            result,
            locale,
            evaluated_at: Utc::now(),
        }
    }

    /// Render as plain text: headline, counts, issues, warnings, passed
    /// items, unanswered exclusions, then the investigator disclaimer.
    pub fn render_text(&self) -> String {
        let locale = self.locale;
        let verdict = self.summary.verdict;
        let labels = SectionLabels::for_locale(locale);

        let mut lines = vec![
            format!("{} {}", verdict.icon(), verdict.title(locale)),
            verdict.subtitle(self.summary.issues, locale),
            String::new(),
            format!(
                "{}: {}  {}: {}  {}: {}",
                labels.passed_stat,
                self.summary.passed,
                labels.warnings_stat,
                self.summary.warnings,
                labels.issues_stat,
                self.summary.issues,
            ),
        ];

        push_section(&mut lines, labels.issues_title, "✗", &self.result.issues, locale);
        push_section(&mut lines, labels.warnings_title, "!", &self.result.warnings, locale);
        push_section(&mut lines, labels.passed_title, "✓", &self.result.passed, locale);

        if !self.result.unanswered.is_empty() {
            lines.push(String::new());
            lines.push(section_heading(
                labels.unanswered_title,
                self.result.unanswered.len(),
                locale,
            ));
            lines.extend(self.result.unanswered.iter().map(|id| {
                let label = find_exclusion(id)
                    .map(|c| exclusion_label(c, locale))
                    .unwrap_or(id.as_str());
                format!("  ? {}", label)
            }));
        }

        lines.push(String::new());
        lines.push(labels.disclaimer.to_string());

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

struct SectionLabels {
    passed_stat: &'static str,
    warnings_stat: &'static str,
    issues_stat: &'static str,
    issues_title: &'static str,
    warnings_title: &'static str,
    passed_title: &'static str,
    unanswered_title: &'static str,
    disclaimer: &'static str,
}

impl SectionLabels {
    fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::En => Self {
                passed_stat: "Met",
                warnings_stat: "To confirm",
                issues_stat: "Disqualifying",
                issues_title: "Disqualifying factors",
                warnings_title: "Items to confirm",
                passed_title: "Criteria met",
                unanswered_title: "Unanswered exclusion criteria",
                disclaimer: "Important: this screening result is for reference only. \
                             The final eligibility decision must be made by the \
                             (sub-)investigator based on clinical judgment. \
                             Protocol-defined exceptions may apply to individual patients; \
                             refer to the study protocol for details.",
            },
            Locale::Ja => Self {
                passed_stat: "適合項目",
                warnings_stat: "要確認",
                issues_stat: "不適格要因",
                issues_title: "不適格要因",
                warnings_title: "要確認事項",
                passed_title: "適合項目",
                unanswered_title: "未回答の除外基準",
                disclaimer: "重要: 本ツールによる判定は参考情報であり、最終的な適格性の判断は\
                             治験責任（分担）医師が臨床的判断に基づいて行ってください。\
                             個々の患者の状況により、プロトコールに定められた例外規定が\
                             適用される場合があります。詳細は治験実施計画書を参照してください。",
            },
        }
    }
}

fn section_heading(title: &str, count: usize, locale: Locale) -> String {
    match locale {
        Locale::En => format!("{} ({})", title, count),
        Locale::Ja => format!("{} ({}件)", title, count),
    }
}

fn push_section(
    lines: &mut Vec<String>,
    title: &str,
    marker: &str,
    findings: &[Finding],
    locale: Locale,
) {
    if findings.is_empty() {
        return;
    }

    lines.push(String::new());
    lines.push(section_heading(title, findings.len(), locale));
    lines.extend(
        findings
            .iter()
            .map(|finding| format!("  {} {}", marker, finding.message)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Outcome;
    use crate::verdict::Verdict;

    fn sample_result() -> EvaluationResult {
        let mut result = EvaluationResult::default();
        result.push(Finding::new(
            "age",
            Outcome::Passed,
            "Age requirement met (18 years or older)",
        ));
        result.push(Finding::new(
            "blood_pressure",
            Outcome::Warning,
            "Blood pressure 150/95 mmHg",
        ));
        result
    }

    #[test]
    fn test_report_summary() {
        let report = ScreeningReport::new(sample_result(), Locale::En);
        assert_eq!(report.summary.verdict, Verdict::ConditionallyEligible);
        assert_eq!(report.summary.warnings, 1);
    }

    #[test]
    fn test_render_text_sections_in_order() {
        let text = ScreeningReport::new(sample_result(), Locale::En).render_text();

        assert!(text.starts_with("⚠ Possibly eligible with conditions"));
        assert!(!text.contains("Disqualifying factors"));
        let warn_at = text.find("Items to confirm (1)").unwrap();
        let pass_at = text.find("Criteria met (1)").unwrap();
        assert!(warn_at < pass_at);
        assert!(text.contains("  ! Blood pressure 150/95 mmHg"));
        assert!(text.ends_with("refer to the study protocol for details.\n"));
    }

    #[test]
    fn test_render_text_blank_line_between_sections() {
        let text = ScreeningReport::new(sample_result(), Locale::En).render_text();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "Met: 1  To confirm: 1  Disqualifying: 0");
        assert_eq!(lines[4], "");
        assert_eq!(lines[5], "Items to confirm (1)");
        assert_eq!(lines[6], "  ! Blood pressure 150/95 mmHg");
    }

    #[test]
    fn test_render_text_lists_unanswered() {
        let mut result = sample_result();
        result.unanswered.push("hiv".to_string());

        let text = ScreeningReport::new(result, Locale::Ja).render_text();
        assert!(text.contains("未回答の除外基準 (1件)"));
        assert!(text.contains("  ? HIV感染の既往"));
    }

    #[test]
    fn test_report_serializes() {
        let report = ScreeningReport::new(sample_result(), Locale::En);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["summary"]["verdict"], "conditionally_eligible");
        assert_eq!(json["locale"], "en");
        assert!(json["evaluated_at"].is_string());
    }
}
