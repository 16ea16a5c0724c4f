//! Type definitions module
//!
//! Core value types shared by the classifier, service and front end.

pub mod label;
pub mod symptom;

// Re-export commonly used types
pub use label::DiseaseLabel;
pub use symptom::{normalize_symptom, SymptomSet};

// Report types
pub mod diagnosis;
pub use diagnosis::Diagnosis;
