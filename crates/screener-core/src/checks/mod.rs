//! Eligibility checks.
//!
//! Each check inspects one aspect of an [`AnswerRecord`] and appends its
//! findings to the result. Checks run in a fixed order and never look at
//! each other's outcomes.

mod exclusion;
mod inclusion;
mod labs;
mod vitals;

pub use exclusion::ExclusionCheck;
pub use inclusion::InclusionCheck;
pub use labs::{
    AltCheck, BilirubinCheck, CoagulationCheck, LabFloorCheck, UlnReading, ALT_TABLE,
    BILIRUBIN_TABLE, COAGULATION_TABLE,
};
pub use vitals::{BloodPressureCheck, PerformanceStatusCheck, BLOOD_PRESSURE_TABLE};

use serde::{Deserialize, Serialize};

use crate::answers::AnswerRecord;
use crate::messages::Locale;
use crate::types::EvaluationResult;

/// The check groups, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckGroup {
    Inclusion,
    PerformanceStatus,
    BloodPressure,
    LabFloors,
    Alt,
    Bilirubin,
    Coagulation,
    Exclusion,
}

impl CheckGroup {
    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            CheckGroup::Inclusion => "Inclusion criteria",
            CheckGroup::PerformanceStatus => "ECOG performance status",
            CheckGroup::BloodPressure => "Blood pressure",
            CheckGroup::LabFloors => "Laboratory minimums",
            CheckGroup::Alt => "ALT",
            CheckGroup::Bilirubin => "Total bilirubin",
            CheckGroup::Coagulation => "Coagulation",
            CheckGroup::Exclusion => "Exclusion criteria",
        }
    }
}

/// A single group of eligibility checks.
pub trait Check: Send + Sync {
    /// Which group this check implements.
    fn group(&self) -> CheckGroup;

    /// Append this check's findings to `result`, in order.
    fn apply(&self, record: &AnswerRecord, locale: Locale, result: &mut EvaluationResult);
}

/// All checks in evaluation order.
pub fn standard_checks() -> [&'static dyn Check; 8] {
    [
        &InclusionCheck,
        &PerformanceStatusCheck,
        &BloodPressureCheck,
        &LabFloorCheck,
        &AltCheck,
        &BilirubinCheck,
        &CoagulationCheck,
        &ExclusionCheck,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_check_order() {
        let groups: Vec<CheckGroup> = standard_checks().iter().map(|c| c.group()).collect();
        assert_eq!(
            groups,
            vec![
                CheckGroup::Inclusion,
                CheckGroup::PerformanceStatus,
                CheckGroup::BloodPressure,
                CheckGroup::LabFloors,
                CheckGroup::Alt,
                CheckGroup::Bilirubin,
                CheckGroup::Coagulation,
                CheckGroup::Exclusion,
            ]
        );
    }
}
