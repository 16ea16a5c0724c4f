//! Symptom tokens and symptom sets
//!
//! A token is a lowercased, trimmed symptom name. A `SymptomSet` keeps the
//! order in which symptoms were reported (so reports echo them back the
//! way the user entered them) but never holds the same token twice.

use serde::{Deserialize, Serialize};

/// Normalize a raw symptom string into a token
///
/// Returns `None` for input that is empty after trimming.
pub fn normalize_symptom(raw: &str) -> Option<String> {
    let token = raw.trim().to_lowercase();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

/// Insertion-ordered set of normalized symptom tokens
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SymptomSet {
    tokens: Vec<String>,
}

impl SymptomSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from raw strings, normalizing and dropping duplicates
    pub fn from_tokens<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for item in raw {
            set.insert(item.as_ref());
        }
        set
    }

    /// Insert a raw symptom; returns true if it was new
    pub fn insert(&mut self, raw: &str) -> bool {
        match normalize_symptom(raw) {
            Some(token) if !self.tokens.contains(&token) => {
                self.tokens.push(token);
                true
            }
            _ => false,
        }
    }

    /// Remove a symptom; returns true if it was present
    pub fn remove(&mut self, raw: &str) -> bool {
        let Some(token) = normalize_symptom(raw) else {
            return false;
        };
        let before = self.tokens.len();
        self.tokens.retain(|t| *t != token);
        self.tokens.len() != before
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// True if any of the given tokens is present
    pub fn contains_any(&self, tokens: &[&str]) -> bool {
        tokens.iter().any(|t| self.contains(t))
    }

    /// Number of the given reference tokens present in this set
    pub fn overlap(&self, reference: &[&str]) -> usize {
        reference.iter().filter(|t| self.contains(t)).count()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tokens
    }
}

impl From<Vec<String>> for SymptomSet {
    fn from(raw: Vec<String>) -> Self {
        Self::from_tokens(raw)
    }
}

impl From<SymptomSet> for Vec<String> {
    fn from(set: SymptomSet) -> Self {
        set.tokens
    }
}

impl<S: AsRef<str>> FromIterator<S> for SymptomSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_tokens(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_symptom() {
        assert_eq!(normalize_symptom("  Fever "), Some("fever".to_string()));
        assert_eq!(normalize_symptom("Shortness of Breath"), Some("shortness of breath".to_string()));
        assert_eq!(normalize_symptom("   "), None);
        assert_eq!(normalize_symptom(""), None);
    }

    #[test]
    fn test_from_tokens_dedups_and_keeps_order() {
        let set = SymptomSet::from_tokens(["Cough", "fever", "cough ", "FEVER", "rash"]);
        assert_eq!(set.as_slice(), &["cough", "fever", "rash"]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_insert_and_remove() {
        let mut set = SymptomSet::new();
        assert!(set.insert("headache"));
        assert!(!set.insert("Headache"));
        assert!(!set.insert("  "));
        assert!(set.remove("HEADACHE"));
        assert!(!set.remove("headache"));
        assert!(set.is_empty());
    }

    #[test]
    fn test_overlap_counts_reference_tokens() {
        let set = SymptomSet::from_tokens(["fever", "cough", "rash"]);
        assert_eq!(set.overlap(&["fever", "cough", "sore throat", "runny nose"]), 2);
        assert_eq!(set.overlap(&["dizziness"]), 0);
        assert!(set.contains_any(&["itching", "rash"]));
        assert!(!set.contains_any(&["itching", "wheezing"]));
    }

    #[test]
    fn test_collect() {
        let set: SymptomSet = vec!["nausea".to_string(), "vomiting".to_string()].into_iter().collect();
        assert!(set.contains("nausea"));
        assert!(set.contains("vomiting"));
    }

    #[test]
    fn test_deserialize_normalizes() {
        let set: SymptomSet = serde_json::from_str(r#"["Fever", " fever", "Cough", ""]"#).unwrap();
        assert_eq!(set.as_slice(), &["fever", "cough"]);
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"["fever","cough"]"#);
    }
}
