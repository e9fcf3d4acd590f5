pub mod accept_consultation;
pub mod complete_consultation;
pub mod create_consultation;
pub mod get_consultation;
pub mod get_consultation_overview;
pub mod get_consultations;
pub mod get_doctor_queue;
