pub mod mappers;
pub mod repositories;

pub use repositories::consultation_repository::PostgresConsultationRepository;
