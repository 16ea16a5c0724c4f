//! Diagnosis report
//!
//! A classified label joined with its descriptive record and the symptoms
//! as the user reported them. This is what the CLI prints and what
//! `--json` serializes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::classifier::{Classification, MatchStage};
use crate::knowledge::{disease_info, find_disease_info};
use crate::types::{DiseaseLabel, SymptomSet};

/// Final result of a diagnosis request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnosis {
    /// Likely condition
    pub label: DiseaseLabel,

    /// Symptoms as submitted, normalized
    pub symptoms: SymptomSet,

    pub description: String,

    pub recommendations: Vec<String>,

    /// Stage of the classifier that produced the label
    pub matched_by: MatchStage,

    /// Whether `description` is the generic fallback text
    pub generic_info: bool,

    pub generated_at: DateTime<Utc>,
}

impl Diagnosis {
    /// Build a report for `classification`
    pub fn new(classification: Classification, symptoms: SymptomSet) -> Self {
        let info = disease_info(classification.label.as_str());
        let generic_info = find_disease_info(classification.label.as_str()).is_none();

        Self {
            label: classification.label,
            symptoms,
            description: info.description.to_string(),
            recommendations: info.recommendations.iter().map(|r| r.to_string()).collect(),
            matched_by: classification.stage,
            generic_info,
            generated_at: Utc::now(),
        }
    }

    /// One-line summary for history listings
    pub fn summary(&self) -> String {
        format!(
            "{} ({} symptom{}: {})",
            self.label,
            self.symptoms.len(),
            if self.symptoms.len() == 1 { "" } else { "s" },
            self.symptoms.as_slice().join(", ")
        )
    }
}
