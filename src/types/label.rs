//! Disease label type
//!
//! Labels are opaque strings. Every label the built-in classifier returns
//! is a `'static` literal from the knowledge tables, so the common case
//! borrows; labels coming from other providers are owned.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Identifier of a named condition, shown to the end user
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiseaseLabel(Cow<'static, str>);

impl DiseaseLabel {
    /// Wrap a literal from one of the static tables
    pub const fn from_static(label: &'static str) -> Self {
        Self(Cow::Borrowed(label))
    }

    /// Wrap a label produced at runtime
    pub fn new(label: impl Into<String>) -> Self {
        Self(Cow::Owned(label.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0.into_owned()
    }
}

impl fmt::Display for DiseaseLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DiseaseLabel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for DiseaseLabel {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for DiseaseLabel {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl From<&'static str> for DiseaseLabel {
    fn from(label: &'static str) -> Self {
        Self::from_static(label)
    }
}

impl From<String> for DiseaseLabel {
    fn from(label: String) -> Self {
        Self::new(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_and_owned_compare_equal() {
        let a = DiseaseLabel::from_static("Malaria");
        let b = DiseaseLabel::new("Malaria".to_string());
        assert_eq!(a, b);
        assert_eq!(a, "Malaria");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let label = DiseaseLabel::from_static("Chicken pox");
        let json = serde_json::to_string(&label).unwrap();
        assert_eq!(json, "\"Chicken pox\"");

        let back: DiseaseLabel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, label);
    }

    #[test]
    fn test_display() {
        let label = DiseaseLabel::from("Dengue");
        assert_eq!(label.to_string(), "Dengue");
        assert_eq!(label.into_string(), "Dengue");
    }
}
