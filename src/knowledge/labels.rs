//! Label index: the fixed ordinal table used by the fallback branches

use crate::types::DiseaseLabel;

/// Number of labels in the index
pub const LABEL_COUNT: usize = 24;

pub const FUNGAL_INFECTION: usize = 0;
pub const GASTROENTERITIS: usize = 8;
pub const BRONCHIAL_ASTHMA: usize = 9;
pub const MALARIA: usize = 15;
pub const CHICKEN_POX: usize = 16;
pub const DENGUE: usize = 17;
pub const TYPHOID: usize = 18;

static LABELS: [&str; LABEL_COUNT] = [
    "Fungal infection",
    "Allergy",
    "GERD",
    "Chronic cholestasis",
    "Drug Reaction",
    "Peptic ulcer disease",
    "AIDS",
    "Diabetes",
    "Gastroenteritis",
    "Bronchial Asthma",
    "Hypertension",
    "Migraine",
    "Cervical spondylosis",
    "Paralysis (brain hemorrhage)",
    "Jaundice",
    "Malaria",
    "Chicken pox",
    "Dengue",
    "Typhoid",
    "Hepatitis A",
    "Hepatitis B",
    "Hepatitis C",
    "Hepatitis D",
    "Hepatitis E",
];

/// Read-only view over the ordinal → label table
#[derive(Debug, Clone, Copy, Default)]
pub struct LabelIndex;

impl LabelIndex {
    /// Label at `ordinal`, if in range
    pub fn get(ordinal: usize) -> Option<DiseaseLabel> {
        LABELS.get(ordinal).copied().map(DiseaseLabel::from_static)
    }

    /// Ordinal of a label, if it is part of the index
    pub fn ordinal_of(label: &str) -> Option<usize> {
        LABELS.iter().position(|l| *l == label)
    }

    pub fn contains(label: &str) -> bool {
        Self::ordinal_of(label).is_some()
    }

    pub fn len() -> usize {
        LABEL_COUNT
    }

    /// All `(ordinal, label)` pairs in ordinal order
    pub fn entries() -> impl Iterator<Item = (usize, &'static str)> {
        LABELS.iter().copied().enumerate()
    }

    /// Label for one of the ordinal constants in this module
    pub(crate) fn fixed(ordinal: usize) -> DiseaseLabel {
        DiseaseLabel::from_static(LABELS[ordinal % LABEL_COUNT])
    }
}
