//! Screening form navigation.
//!
//! The form is six steps long. Navigation state is an explicit value:
//! `next` and `back` return a new state rather than mutating anything,
//! and moving forward requires the current step's fields to be filled.
//! Submitting from the last step hands over to the evaluator.

use serde::Serialize;
use thiserror::Error;

use crate::answers::RawAnswers;
use crate::criteria::EXCLUSION_CRITERIA;
use crate::messages::Locale;

/// Number of form steps.
pub const TOTAL_STEPS: u8 = 6;

/// A form step and the fields it asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub number: u8,
    pub label_en: &'static str,
    pub label_ja: &'static str,
    pub fields: Vec<String>,
}

impl Step {
    pub fn label(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.label_en,
            Locale::Ja => self.label_ja,
        }
    }
}

const LABELS: [(&str, &str); TOTAL_STEPS as usize] = [
    ("Basic requirements", "基本要件"),
    ("Disease & PS", "疾患・PS"),
    ("Lab values", "検査値"),
    ("Exclusions I", "除外①"),
    ("Exclusions II", "除外②"),
    ("Treatment history", "治療歴"),
];

/// Where the exclusion list is split across steps 4, 5 and 6.
const EXCLUSION_SPLITS: [(usize, usize); 3] = [(0, 10), (10, 20), (20, 28)];

/// Describe a step. Numbers outside `1..=TOTAL_STEPS` yield `None`.
pub fn step(number: u8) -> Option<Step> {
    if !(1..=TOTAL_STEPS).contains(&number) {
        return None;
    }

    let fields: Vec<String> = match number {
        1 => to_fields(&["age", "consent", "diagnosis", "tissue"]),
        2 => to_fields(&["recist", "prognosis", "ecog", "sbp", "dbp", "contraception"]),
        3 => to_fields(&[
            "anc",
            "platelets",
            "hemoglobin",
            "egfr",
            "albumin",
            "alt_uln",
            "tbil_uln",
            "coag_uln",
        ]),
        n => {
            let (start, end) = EXCLUSION_SPLITS[usize::from(n) - 4];
            EXCLUSION_CRITERIA[start..end]
                .iter()
                .map(|c| format!("exclusions.{}", c.id))
                .collect()
        }
    };

    let (label_en, label_ja) = LABELS[usize::from(number) - 1];
    Some(Step {
        number,
        label_en,
        label_ja,
        fields,
    })
}

fn to_fields(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

/// All steps in order.
pub fn steps() -> Vec<Step> {
    (1..=TOTAL_STEPS).filter_map(step).collect()
}

/// Required fields of `number` that have no value in `answers`.
pub fn missing_for_step(number: u8, answers: &RawAnswers) -> Vec<String> {
    step(number)
        .map(|s| {
            s.fields
                .into_iter()
                .filter(|field| !answers.has_field(field))
                .collect()
        })
        .unwrap_or_default()
}

/// Raised when moving forward from a step with unfilled fields.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Step {step} has unanswered fields: {}", .missing.join(", "))]
pub struct StepIncomplete {
    pub step: u8,
    pub missing: Vec<String>,
}

/// Result of moving forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Now on this step
    Step(WizardState),

    /// Last step completed; answers are ready for evaluation
    Submit,
}

/// Current position in the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WizardState {
    current_step: u8,
}

impl WizardState {
    pub fn first() -> Self {
        Self { current_step: 1 }
    }

    /// Jump to a step, if it exists.
    pub fn at(step: u8) -> Option<Self> {
        (1..=TOTAL_STEPS)
            .contains(&step)
            .then_some(Self { current_step: step })
    }

    pub fn current_step(&self) -> u8 {
        self.current_step
    }

    pub fn step(&self) -> Step {
        // current_step is kept within 1..=TOTAL_STEPS by every constructor
        step(self.current_step).unwrap_or_else(|| unreachable!("wizard step out of range"))
    }

    pub fn is_last(&self) -> bool {
        self.current_step == TOTAL_STEPS
    }

    /// Fraction of the form reached, `step / TOTAL_STEPS`.
    pub fn progress(&self) -> f64 {
        f64::from(self.current_step) / f64::from(TOTAL_STEPS)
    }

    /// Move forward once the current step is complete.
    pub fn next(self, answers: &RawAnswers) -> Result<Navigation, StepIncomplete> {
        let missing = missing_for_step(self.current_step, answers);
        if !missing.is_empty() {
            return Err(StepIncomplete {
                step: self.current_step,
                missing,
            });
        }

        if self.is_last() {
            Ok(Navigation::Submit)
        } else {
            Ok(Navigation::Step(Self {
                current_step: self.current_step + 1,
            }))
        }
    }

    /// Move back one step; stays on step 1.
    pub fn back(self) -> Self {
        Self {
            current_step: self.current_step.saturating_sub(1).max(1),
        }
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::first()
    }
}
