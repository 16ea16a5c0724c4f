//! Common symptoms offered as quick picks by the selector

pub static COMMON_SYMPTOMS: &[&str] = &[
    "fever",
    "cough",
    "headache",
    "fatigue",
    "nausea",
    "vomiting",
    "diarrhea",
    "rash",
    "shortness of breath",
    "sore throat",
    "muscle pain",
    "cold",
    "chills",
    "weight loss",
    "joint pain",
    "dizziness",
    "chest pain",
    "abdominal pain",
];

/// Symptoms mentioned anywhere in the knowledge tables, sorted and unique
pub fn known_symptoms() -> Vec<&'static str> {
    let mut all: Vec<&'static str> = COMMON_SYMPTOMS
        .iter()
        .copied()
        .chain(super::KNOWN_PROFILES.iter().flat_map(|p| p.symptoms.iter().copied()))
        .collect();
    all.sort_unstable();
    all.dedup();
    all
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_symptoms() {
        assert_eq!(COMMON_SYMPTOMS.len(), 18);
        assert_eq!(COMMON_SYMPTOMS[0], "fever");
    }

    #[test]
    fn test_known_symptoms_unique_and_sorted() {
        let known = known_symptoms();
        assert!(known.windows(2).all(|w| w[0] < w[1]));
        assert!(known.contains(&"wheezing"));
        assert!(known.contains(&"weight loss"));
    }
}
