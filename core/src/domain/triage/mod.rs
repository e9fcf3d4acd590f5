pub mod entities;
pub mod services;

pub use entities::{Priority, SymptomSet, TriageAssessment, TriageRule};
pub use services::TriageClassifier;
