//! Known symptom profiles
//!
//! Declaration order matters: the matcher returns the first profile that
//! qualifies, not the one with the best overlap.

use crate::types::DiseaseLabel;

/// A reference symptom set associated with one label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownProfile {
    pub symptoms: &'static [&'static str],
    pub label: &'static str,
}

impl KnownProfile {
    pub fn label(&self) -> DiseaseLabel {
        DiseaseLabel::from_static(self.label)
    }
}

const fn profile(symptoms: &'static [&'static str], label: &'static str) -> KnownProfile {
    KnownProfile { symptoms, label }
}

/// Profile table, in match order
pub static KNOWN_PROFILES: &[KnownProfile] = &[
    profile(&["fever", "cough", "sore throat", "runny nose"], "Common Cold"),
    profile(&["fever", "cough", "shortness of breath", "fatigue"], "COVID-19"),
    profile(&["fever", "diarrhea", "coughing", "cold"], "Chicken pox"),
    profile(&["headache", "nausea", "sensitivity to light", "vomiting"], "Migraine"),
    profile(&["fever", "headache", "joint pain", "rash"], "Dengue"),
    profile(&["abdominal pain", "nausea", "fever", "diarrhea"], "Gastroenteritis"),
    profile(&["fever", "chills", "sweating", "headache"], "Malaria"),
    profile(&["rash", "itching", "redness", "swelling"], "Allergy"),
    profile(&["shortness of breath", "wheezing", "chest tightness", "cough"], "Bronchial Asthma"),
    profile(&["cough", "chest pain", "fever", "fatigue"], "Pneumonia"),
    profile(&["fever", "headache", "stiff neck", "sensitivity to light"], "Meningitis"),
    profile(&["fatigue", "increased thirst", "frequent urination", "hunger"], "Diabetes"),
    profile(&["fatigue", "weakness", "pale skin", "shortness of breath"], "Anemia"),
    profile(&["joint pain", "joint stiffness", "swelling", "reduced range of motion"], "Arthritis"),
    profile(&["heartburn", "regurgitation", "chest pain", "difficulty swallowing"], "GERD"),
    profile(&["high fever", "headache", "abdominal pain", "diarrhea"], "Typhoid"),
    profile(&["yellowish skin", "dark urine", "fatigue", "abdominal pain"], "Jaundice"),
    profile(&["abdominal pain", "bloating", "constipation", "diarrhea"], "Irritable Bowel Syndrome"),
    profile(&["itching", "rash", "redness", "scaling"], "Fungal infection"),
];
