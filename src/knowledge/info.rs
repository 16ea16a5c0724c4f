//! Descriptive text for each condition
//!
//! Consumed by reports only; the classifier never reads this table. Labels
//! without an entry (e.g. "Common Cold", which the profile table can
//! return) get the generic record.

use serde::Serialize;
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::knowledge::{LabelIndex, KNOWN_PROFILES};
use crate::types::DiseaseLabel;

/// Description and recommendations for a condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiseaseInfo {
    pub description: &'static str,
    pub recommendations: &'static [&'static str],
}

/// Record used when a label has no entry of its own
pub static GENERIC_INFO: DiseaseInfo = DiseaseInfo {
    description: "A medical condition that affects the body and may require professional medical attention.",
    recommendations: &[
        "Consult with a healthcare professional for proper diagnosis and treatment",
        "Follow prescribed treatment plans",
        "Monitor your symptoms",
    ],
};

static DISEASE_INFO: &[(&str, DiseaseInfo)] = &[
    ("Fungal infection", DiseaseInfo {
        description: "A fungal infection occurs when fungi multiply and overgrow in or on the body, often causing irritation, inflammation, or other symptoms.",
        recommendations: &["Keep the affected area clean and dry", "Use prescribed antifungal medications", "Avoid sharing personal items"],
    }),
    ("Allergy", DiseaseInfo {
        description: "An allergic reaction occurs when your immune system overreacts to substances that are generally harmless to most people.",
        recommendations: &["Identify and avoid allergens", "Take antihistamines as prescribed", "Seek emergency care for severe reactions"],
    }),
    ("GERD", DiseaseInfo {
        description: "Gastroesophageal reflux disease (GERD) is a chronic condition where stomach acid flows back into the esophagus, causing irritation.",
        recommendations: &["Avoid trigger foods", "Don't lie down after eating", "Elevate head when sleeping"],
    }),
    ("Chronic cholestasis", DiseaseInfo {
        description: "A condition characterized by decreased bile flow resulting in the accumulation of bile acids in the liver and bloodstream.",
        recommendations: &["Follow a low-fat diet", "Take prescribed medications", "Regular monitoring of liver function"],
    }),
    ("Drug Reaction", DiseaseInfo {
        description: "An adverse response to a medication that may range from mild to severe, including allergic reactions.",
        recommendations: &["Stop taking the suspected medication", "Seek immediate medical attention", "Inform all healthcare providers about the reaction"],
    }),
    ("Peptic ulcer disease", DiseaseInfo {
        description: "Open sores that develop on the inside lining of the stomach, upper small intestine, or esophagus.",
        recommendations: &["Take prescribed antibiotics and acid-suppressing medications", "Avoid NSAIDs", "Limit alcohol consumption"],
    }),
    ("AIDS", DiseaseInfo {
        description: "Acquired immunodeficiency syndrome (AIDS) is a chronic condition caused by the human immunodeficiency virus (HIV).",
        recommendations: &["Adhere to antiretroviral therapy", "Regular medical checkups", "Practice safe behaviors to prevent transmission"],
    }),
    ("Diabetes", DiseaseInfo {
        description: "A group of diseases that affect how your body uses blood sugar (glucose).",
        recommendations: &["Monitor blood sugar regularly", "Follow a balanced diet", "Take prescribed medications or insulin as directed"],
    }),
    ("Gastroenteritis", DiseaseInfo {
        description: "An inflammation of the lining of the intestines caused by a virus, bacteria, or parasites.",
        recommendations: &["Stay hydrated", "Rest and avoid solid foods initially", "Gradually reintroduce mild foods"],
    }),
    ("Bronchial Asthma", DiseaseInfo {
        description: "A condition in which your airways narrow and swell and may produce extra mucus, making breathing difficult.",
        recommendations: &["Use prescribed inhalers correctly", "Identify and avoid triggers", "Follow your asthma action plan"],
    }),
    ("Hypertension", DiseaseInfo {
        description: "A common condition where the long-term force of blood against artery walls is high enough to cause health problems.",
        recommendations: &["Regular blood pressure monitoring", "Follow a low-sodium diet", "Take prescribed medications consistently"],
    }),
    ("Migraine", DiseaseInfo {
        description: "A headache disorder characterized by recurrent headaches that are moderate to severe.",
        recommendations: &["Identify and avoid triggers", "Take medications at first sign of a migraine", "Establish regular sleep patterns"],
    }),
    ("Cervical spondylosis", DiseaseInfo {
        description: "Age-related wear and tear affecting the spinal disks in your neck, causing pain and stiffness.",
        recommendations: &["Physical therapy exercises", "Use proper posture", "Apply heat or cold to the affected area"],
    }),
    ("Paralysis (brain hemorrhage)", DiseaseInfo {
        description: "Loss of muscle function caused by bleeding in the brain that damages the nervous system.",
        recommendations: &["Follow rehabilitation therapy", "Make home modifications for safety", "Prevent complications with proper positioning"],
    }),
    ("Jaundice", DiseaseInfo {
        description: "A condition in which the skin, whites of the eyes, and mucous membranes turn yellow due to a high level of bilirubin.",
        recommendations: &["Identify and treat the underlying cause", "Rest and stay hydrated", "Follow a special diet if recommended"],
    }),
    ("Malaria", DiseaseInfo {
        description: "A mosquito-borne disease caused by a parasite that leads to fever, chills, and flu-like illness.",
        recommendations: &["Complete the full course of prescribed antimalarial drugs", "Rest and stay hydrated", "Use mosquito prevention measures"],
    }),
    ("Chicken pox", DiseaseInfo {
        description: "A highly contagious viral infection causing an itchy, blister-like rash on the skin.",
        recommendations: &["Avoid scratching the blisters", "Use calamine lotion or other anti-itch medications", "Stay isolated until all blisters have crusted over"],
    }),
    ("Dengue", DiseaseInfo {
        description: "A mosquito-borne viral disease that causes fever, headaches, and pain in muscles and joints.",
        recommendations: &["Rest and stay hydrated", "Take acetaminophen for fever and pain", "Avoid aspirin and NSAIDs"],
    }),
    ("Typhoid", DiseaseInfo {
        description: "A bacterial infection that can spread throughout the body, affecting many organs.",
        recommendations: &["Complete the full course of antibiotics", "Rest and stay hydrated", "Practice strict hand hygiene"],
    }),
    ("Hepatitis A", DiseaseInfo {
        description: "A highly contagious liver infection caused by the hepatitis A virus.",
        recommendations: &["Rest and maintain adequate nutrition", "Avoid alcohol", "Follow up with your healthcare provider regularly"],
    }),
    ("Hepatitis B", DiseaseInfo {
        description: "A serious liver infection caused by the hepatitis B virus that can be chronic.",
        recommendations: &["Follow your medical treatment plan", "Avoid alcohol", "Get regular liver function tests"],
    }),
    ("Hepatitis C", DiseaseInfo {
        description: "An infection caused by a virus that attacks the liver and leads to inflammation.",
        recommendations: &["Complete the full course of antiviral medications", "Avoid alcohol", "Get vaccinated against hepatitis A and B"],
    }),
    ("Hepatitis D", DiseaseInfo {
        description: "A serious liver disease caused by the hepatitis D virus, which requires hepatitis B virus to replicate.",
        recommendations: &["Take prescribed medications", "Avoid alcohol", "Get regular liver function tests"],
    }),
    ("Hepatitis E", DiseaseInfo {
        description: "A liver disease caused by the hepatitis E virus, commonly spread through contaminated water.",
        recommendations: &["Rest and maintain adequate hydration", "Follow dietary recommendations", "Avoid alcohol"],
    }),
];

fn table() -> &'static HashMap<&'static str, &'static DiseaseInfo> {
    static TABLE: OnceLock<HashMap<&'static str, &'static DiseaseInfo>> = OnceLock::new();
    TABLE.get_or_init(|| DISEASE_INFO.iter().map(|(label, info)| (*label, info)).collect())
}

/// Info for `label`, or the generic record if there is none
pub fn disease_info(label: &str) -> &'static DiseaseInfo {
    find_disease_info(label).unwrap_or(&GENERIC_INFO)
}

/// Info for `label` only if it has a dedicated entry
pub fn find_disease_info(label: &str) -> Option<&'static DiseaseInfo> {
    table().get(label).copied()
}

/// Resolve a typed condition name (case-insensitive) against every label
/// the classifier can return, indexed or profile-only
pub fn lookup_condition(query: &str) -> Option<(DiseaseLabel, &'static DiseaseInfo)> {
    let query = query.trim();
    LabelIndex::entries()
        .map(|(_, label)| label)
        .chain(KNOWN_PROFILES.iter().map(|p| p.label))
        .find(|label| label.eq_ignore_ascii_case(query))
        .map(|label| (DiseaseLabel::from_static(label), disease_info(label)))
}
