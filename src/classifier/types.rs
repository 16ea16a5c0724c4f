//! Classification result types

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::classifier::tree::TreeRule;
use crate::types::DiseaseLabel;

/// Which stage of the classifier produced a label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum MatchStage {
    /// A known profile qualified (first one in table order)
    Profile { index: usize, overlap: usize },

    /// No profile qualified; the fixed decision tree chose
    DecisionTree { rule: TreeRule },

    /// Nothing matched; uniform pick from the label index
    RandomFallback { ordinal: usize },
}

impl MatchStage {
    /// Only the random fallback is non-deterministic
    pub fn is_deterministic(&self) -> bool {
        !matches!(self, MatchStage::RandomFallback { .. })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStage::Profile { .. } => "profile",
            MatchStage::DecisionTree { .. } => "decision_tree",
            MatchStage::RandomFallback { .. } => "random_fallback",
        }
    }
}

impl fmt::Display for MatchStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchStage::Profile { index, overlap } => {
                write!(f, "profile #{} ({} symptoms in common)", index, overlap)
            }
            MatchStage::DecisionTree { rule } => write!(f, "decision tree ({})", rule.describe()),
            MatchStage::RandomFallback { ordinal } => {
                write!(f, "random fallback (label #{})", ordinal)
            }
        }
    }
}

/// Label plus the stage that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub label: DiseaseLabel,
    pub stage: MatchStage,
}

impl Classification {
    pub fn new(label: DiseaseLabel, stage: MatchStage) -> Self {
        Self { label, stage }
    }
}
