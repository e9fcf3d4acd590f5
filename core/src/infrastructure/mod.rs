pub mod consultation;
pub mod db;
pub mod memory;
pub mod store;
pub mod symptom;
