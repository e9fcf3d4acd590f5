//! Process-local adapters used with `--store memory` and in tests.

pub mod consultation_repository;
pub mod symptom_repository;

pub use consultation_repository::InMemoryConsultationRepository;
pub use symptom_repository::InMemorySymptomRepository;
