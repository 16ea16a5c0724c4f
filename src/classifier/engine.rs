//! Symptom classifier
//!
//! Two-stage heuristic: ordered profile matching, then the decision tree,
//! then a uniform pick over the label index. Total over every input,
//! including the empty set (which always reaches the random pick).

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

use crate::classifier::rules::ProfileMatcher;
use crate::classifier::tree;
use crate::classifier::types::{Classification, MatchStage};
use crate::knowledge::LabelIndex;
use crate::types::{DiseaseLabel, SymptomSet};

/// Rule-based classifier with an owned random source
pub struct SymptomClassifier {
    matcher: ProfileMatcher,
    rng: Mutex<StdRng>,
    seed: Option<u64>,
}

impl Default for SymptomClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl SymptomClassifier {
    /// Classifier whose random fallback is seeded from entropy
    pub fn new() -> Self {
        Self {
            matcher: ProfileMatcher::new(),
            rng: Mutex::new(StdRng::from_entropy()),
            seed: None,
        }
    }

    /// Classifier with a reproducible random fallback
    pub fn with_seed(seed: u64) -> Self {
        Self {
            matcher: ProfileMatcher::new(),
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            seed: Some(seed),
        }
    }

    /// Seeded if `seed` is set, entropy otherwise
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Classify a symptom set, reporting the stage that decided
    pub fn classify(&self, symptoms: &SymptomSet) -> Classification {
        if let Some(m) = self.matcher.find(symptoms) {
            return Classification::new(
                m.profile.label(),
                MatchStage::Profile {
                    index: m.index,
                    overlap: m.overlap,
                },
            );
        }

        if let Some(rule) = tree::decide(symptoms) {
            debug!("decision tree rule {:?} fired", rule);
            return Classification::new(rule.label(), MatchStage::DecisionTree { rule });
        }

        let ordinal = self.random_ordinal();
        info!(
            "no rule matched {} symptom(s); random fallback picked #{}",
            symptoms.len(),
            ordinal
        );
        Classification::new(LabelIndex::fixed(ordinal), MatchStage::RandomFallback { ordinal })
    }

    /// Classify and keep only the label
    pub fn classify_label(&self, symptoms: &SymptomSet) -> DiseaseLabel {
        self.classify(symptoms).label
    }

    fn random_ordinal(&self) -> usize {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(0..LabelIndex::len())
    }
}
