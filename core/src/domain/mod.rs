pub mod authentication;
pub mod common;
pub mod consultation;
pub mod symptom;
pub mod triage;
