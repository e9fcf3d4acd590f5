use axum::extract::State;
use curely_core::domain::symptom::{
    entities::Symptom, ports::SymptomService, value_objects::CreateSymptomInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
        symptom::validators::CreateSymptomValidator,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateSymptomResponse {
    pub data: Symptom,
}

#[utoipa::path(
    post,
    path = "",
    tag = "symptom",
    summary = "Add a catalog symptom",
    responses(
        (status = 201, body = CreateSymptomResponse),
        (status = 403, description = "Caller is not an administrator"),
        (status = 409, description = "A symptom with this name already exists"),
    ),
    request_body = CreateSymptomValidator
)]
pub async fn create_symptom(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreateSymptomValidator>,
) -> Result<Response<CreateSymptomResponse>, ApiError> {
    let symptom = state
        .service
        .create_symptom(
            identity,
            CreateSymptomInput {
                name: payload.name,
                category: payload.category,
                description: payload.description,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateSymptomResponse { data: symptom }))
}
