//! symptomcheck - rule-based symptom checker
//!
//! Maps a set of reported symptoms to one of 24 disease labels.
//!
//! # Architecture
//!
//! - **knowledge**: label index, known profiles, disease info tables
//! - **classifier**: profile match, decision tree, random fallback
//! - **service**: async diagnosis with simulated latency and cancellation
//! - **selector** / **repl** / **cli**: terminal front end

pub mod errors;
pub mod types;
pub mod knowledge;
pub mod classifier;
pub mod service;
pub mod selector;
pub mod telemetry;
pub mod cli;
pub mod repl;

// Re-export commonly used types
pub use errors::{DiagnosisError, Result};
pub use classifier::{Classification, MatchStage, SymptomClassifier};
pub use service::{CancelToken, DiagnosisProvider, DiagnosisService, MockPredictor};
pub use selector::SymptomSelector;
pub use types::{Diagnosis, DiseaseLabel, SymptomSet};
