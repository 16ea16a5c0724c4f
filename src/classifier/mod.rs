//! Symptom classifier
//!
//! An explicit decision procedure: ordered profile rules, a fixed
//! fallback tree and a uniform sampler. There is no learned model.

pub mod engine;
pub mod rules;
pub mod tree;
pub mod types;

pub use engine::SymptomClassifier;
pub use rules::{ProfileMatch, ProfileMatcher, MIN_OVERLAP, MIN_SYMPTOMS};
pub use tree::TreeRule;
pub use types::{Classification, MatchStage};
