use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

/// Catalog entry a patient can pick when describing a consultation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Symptom {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl Symptom {
    pub fn new(name: String, category: String, description: String) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            name,
            category,
            description,
            created_at: now,
        }
    }
}

/// Catalog shipped with every fresh store: `(name, category, description)`.
pub const STANDARD_CATALOG: [(&str, &str, &str); 11] = [
    ("Chest Pain", "Cardiovascular", "Pain, pressure or tightness in the chest"),
    ("Palpitations", "Cardiovascular", "Racing, pounding or irregular heartbeat"),
    ("Nausea", "Digestive", "Feeling sick to the stomach"),
    ("Abdominal Pain", "Digestive", "Pain or cramping in the stomach area"),
    ("Fever", "General", "Body temperature above 38°C"),
    ("Fatigue", "General", "Persistent tiredness or lack of energy"),
    ("Headache", "Neurological", "Pain in the head or neck"),
    ("Dizziness", "Neurological", "Light-headedness or loss of balance"),
    ("Shortness of Breath", "Respiratory", "Difficulty breathing or breathlessness"),
    ("Cough", "Respiratory", "Dry or productive cough"),
    ("Sore Throat", "Respiratory", "Pain or irritation in the throat"),
];

pub fn standard_catalog() -> Vec<Symptom> {
    STANDARD_CATALOG
        .iter()
        .map(|(name, category, description)| {
            Symptom::new(
                name.to_string(),
                category.to_string(),
                description.to_string(),
            )
        })
        .collect()
}
