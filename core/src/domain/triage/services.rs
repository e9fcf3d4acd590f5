use crate::domain::triage::entities::{Priority, SymptomSet, TriageAssessment, TriageRule};

pub const URGENT_SYMPTOMS: [&str; 2] = ["Chest Pain", "Shortness of Breath"];

pub const IMMEDIATE_ATTENTION: &str =
    "Seek immediate medical attention. These symptoms may indicate a serious condition.";
pub const GENERAL_PRACTITIONER_WITHIN_24H: &str =
    "Recommended to consult with a general practitioner within 24 hours.";
pub const MONITOR_AND_CONSULT: &str =
    "Monitor symptoms. If they persist or worsen, consult with a healthcare provider.";

/// Evaluated top to bottom; the first matching rule wins.
pub const DEFAULT_RULES: [TriageRule; 3] = [
    TriageRule::new(
        "urgent-symptom",
        Priority::Urgent,
        IMMEDIATE_ATTENTION,
        |symptoms| symptoms.contains_any(&URGENT_SYMPTOMS),
    ),
    TriageRule::new(
        "fever-with-others",
        Priority::High,
        GENERAL_PRACTITIONER_WITHIN_24H,
        |symptoms| symptoms.contains("Fever") && symptoms.len() > 2,
    ),
    TriageRule::new(
        "many-symptoms",
        Priority::Medium,
        MONITOR_AND_CONSULT,
        |symptoms| symptoms.len() > 3,
    ),
];

pub const FALLBACK_RULE: TriageRule =
    TriageRule::new("fallback", Priority::Low, MONITOR_AND_CONSULT, |_| true);

#[derive(Debug, Clone)]
pub struct TriageClassifier {
    rules: Vec<TriageRule>,
    fallback: TriageRule,
}

impl TriageClassifier {
    pub fn new(rules: Vec<TriageRule>, fallback: TriageRule) -> Self {
        Self { rules, fallback }
    }

    pub fn rules(&self) -> &[TriageRule] {
        &self.rules
    }

    pub fn classify(&self, symptoms: &SymptomSet) -> TriageAssessment {
        self.rules
            .iter()
            .find(|rule| rule.matches(symptoms))
            .unwrap_or(&self.fallback)
            .assess()
    }
}

impl Default for TriageClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_RULES.to_vec(), FALLBACK_RULE)
    }
}
