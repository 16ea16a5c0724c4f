//! Decision-tree fallback
//!
//! Applied only when no profile qualified. Each leaf names a fixed label
//! index ordinal; `decide` returns `None` when the random fallback
//! should take over.

use serde::{Deserialize, Serialize};

use crate::knowledge::labels::{
    LabelIndex, BRONCHIAL_ASTHMA, CHICKEN_POX, DENGUE, FUNGAL_INFECTION, GASTROENTERITIS,
    MALARIA, TYPHOID,
};
use crate::types::{DiseaseLabel, SymptomSet};

/// Leaf of the decision tree that fired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeRule {
    /// fever + cough + rash
    FeverCoughRash,
    /// fever + cough, no rash
    FeverCough,
    /// fever + headache, no cough
    FeverHeadache,
    /// fever + abdominal pain or diarrhea
    FeverDigestive,
    /// fever and nothing more specific
    FeverOnly,
    /// rash or itching without fever
    Skin,
    /// shortness of breath or wheezing without fever or skin symptoms
    Respiratory,
}

impl TreeRule {
    /// Label index ordinal this leaf resolves to
    pub fn ordinal(&self) -> usize {
        match self {
            TreeRule::FeverCoughRash => CHICKEN_POX,
            TreeRule::FeverCough => MALARIA,
            TreeRule::FeverHeadache => DENGUE,
            TreeRule::FeverDigestive => GASTROENTERITIS,
            TreeRule::FeverOnly => TYPHOID,
            TreeRule::Skin => FUNGAL_INFECTION,
            TreeRule::Respiratory => BRONCHIAL_ASTHMA,
        }
    }

    pub fn label(&self) -> DiseaseLabel {
        LabelIndex::fixed(self.ordinal())
    }

    pub fn describe(&self) -> &'static str {
        match self {
            TreeRule::FeverCoughRash => "fever, cough and rash",
            TreeRule::FeverCough => "fever and cough",
            TreeRule::FeverHeadache => "fever and headache",
            TreeRule::FeverDigestive => "fever with abdominal pain or diarrhea",
            TreeRule::FeverOnly => "fever",
            TreeRule::Skin => "rash or itching",
            TreeRule::Respiratory => "shortness of breath or wheezing",
        }
    }
}

/// Walk the tree for `symptoms`
pub fn decide(symptoms: &SymptomSet) -> Option<TreeRule> {
    if symptoms.contains("fever") {
        let rule = if symptoms.contains("cough") {
            if symptoms.contains("rash") {
                TreeRule::FeverCoughRash
            } else {
                TreeRule::FeverCough
            }
        } else if symptoms.contains("headache") {
            TreeRule::FeverHeadache
        } else if symptoms.contains_any(&["abdominal pain", "diarrhea"]) {
            TreeRule::FeverDigestive
        } else {
            TreeRule::FeverOnly
        };
        Some(rule)
    } else if symptoms.contains_any(&["rash", "itching"]) {
        Some(TreeRule::Skin)
    } else if symptoms.contains_any(&["shortness of breath", "wheezing"]) {
        Some(TreeRule::Respiratory)
    } else {
        None
    }
}
