pub mod create_symptom;
pub mod get_symptoms;
