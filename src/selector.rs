//! Symptom selection state
//!
//! Backs the interactive picker: free-text entry, quick picks from the
//! common-symptom list, removal, and the submit check.

use crate::errors::{DiagnosisError, Result};
use crate::knowledge::COMMON_SYMPTOMS;
use crate::types::SymptomSet;

/// Number of quick-pick suggestions shown by default
pub const DEFAULT_MAX_SUGGESTIONS: usize = 8;

/// Selected symptoms plus suggestion settings
#[derive(Debug, Clone)]
pub struct SymptomSelector {
    selected: SymptomSet,
    max_suggestions: usize,
}

impl Default for SymptomSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl SymptomSelector {
    pub fn new() -> Self {
        Self::with_max_suggestions(DEFAULT_MAX_SUGGESTIONS)
    }

    pub fn with_max_suggestions(max_suggestions: usize) -> Self {
        Self {
            selected: SymptomSet::new(),
            max_suggestions,
        }
    }

    /// Add a typed symptom; empty or already-selected input is ignored
    pub fn add(&mut self, raw: &str) -> bool {
        self.selected.insert(raw)
    }

    /// Add the n-th current suggestion (0-based)
    pub fn pick_suggestion(&mut self, n: usize) -> Option<&'static str> {
        let symptom = self.suggestions().get(n).copied()?;
        self.selected.insert(symptom);
        Some(symptom)
    }

    pub fn remove(&mut self, raw: &str) -> bool {
        self.selected.remove(raw)
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn selected(&self) -> &SymptomSet {
        &self.selected
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Common symptoms not selected yet, in list order, capped
    pub fn suggestions(&self) -> Vec<&'static str> {
        COMMON_SYMPTOMS
            .iter()
            .copied()
            .filter(|s| !self.selected.contains(s))
            .take(self.max_suggestions)
            .collect()
    }

    /// Symptoms to submit; refuses an empty selection
    pub fn submit(&self) -> Result<SymptomSet> {
        if self.selected.is_empty() {
            return Err(DiagnosisError::NoSymptoms);
        }
        Ok(self.selected.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_normalizes_and_dedups() {
        let mut selector = SymptomSelector::new();
        assert!(selector.add("  Fever "));
        assert!(!selector.add("fever"));
        assert!(!selector.add("   "));
        assert_eq!(selector.selected().as_slice(), &["fever"]);
    }

    #[test]
    fn test_suggestions_skip_selected_and_cap() {
        let mut selector = SymptomSelector::new();
        assert_eq!(
            selector.suggestions(),
            vec!["fever", "cough", "headache", "fatigue", "nausea", "vomiting", "diarrhea", "rash"]
        );

        selector.add("cough");
        let suggestions = selector.suggestions();
        assert_eq!(suggestions.len(), 8);
        assert!(!suggestions.contains(&"cough"));
        assert_eq!(suggestions[7], "shortness of breath");
    }

    #[test]
    fn test_pick_suggestion() {
        let mut selector = SymptomSelector::with_max_suggestions(3);
        assert_eq!(selector.pick_suggestion(1), Some("cough"));
        assert_eq!(selector.suggestions(), vec!["fever", "headache", "fatigue"]);
        assert_eq!(selector.pick_suggestion(5), None);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut selector = SymptomSelector::new();
        selector.add("rash");
        selector.add("itching");
        assert!(selector.remove("Rash"));
        assert!(!selector.remove("rash"));
        selector.clear();
        assert!(selector.is_empty());
    }

    #[test]
    fn test_submit_requires_a_symptom() {
        let mut selector = SymptomSelector::new();
        assert!(matches!(selector.submit(), Err(DiagnosisError::NoSymptoms)));
        selector.add("dizziness");
        assert_eq!(selector.submit().unwrap().len(), 1);
    }
}
