//! Static knowledge tables
//!
//! Profile table, label index, disease descriptions and common symptoms.
//! All of it is immutable source data.

pub mod info;
pub mod labels;
pub mod profiles;
pub mod symptoms;

pub use info::{disease_info, find_disease_info, lookup_condition, DiseaseInfo, GENERIC_INFO};
pub use labels::{LabelIndex, LABEL_COUNT};
pub use profiles::{KnownProfile, KNOWN_PROFILES};
pub use symptoms::{known_symptoms, COMMON_SYMPTOMS};
