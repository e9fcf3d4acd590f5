use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateSymptomValidator {
    #[validate(length(min = 1, max = 255, message = "name is required"))]
    pub name: String,

    #[validate(length(min = 1, max = 255, message = "category is required"))]
    pub category: String,

    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
}
