use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateConsultationValidator {
    /// Symptom names picked from the catalog. Duplicates are collapsed.
    #[validate(length(min = 1, message = "at least one symptom is required"))]
    pub symptoms: Vec<String>,

    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CompleteConsultationValidator {
    #[validate(length(min = 1, message = "notes are required"))]
    pub notes: String,
}
