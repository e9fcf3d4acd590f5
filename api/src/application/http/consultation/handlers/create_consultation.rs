use axum::extract::State;
use curely_core::domain::consultation::{
    entities::Consultation, ports::ConsultationService, value_objects::CreateConsultationInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        consultation::validators::CreateConsultationValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateConsultationResponse {
    pub data: Consultation,
}

#[utoipa::path(
    post,
    path = "",
    tag = "consultation",
    summary = "Submit a consultation",
    description = "Creates a pending consultation for the calling patient. Priority and recommendation are computed from the symptoms.",
    responses(
        (status = 201, body = CreateConsultationResponse),
        (status = 400, description = "Missing symptoms or description"),
        (status = 403, description = "Caller is not a patient"),
    ),
    request_body = CreateConsultationValidator
)]
pub async fn create_consultation(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreateConsultationValidator>,
) -> Result<Response<CreateConsultationResponse>, ApiError> {
    let consultation = state
        .service
        .create_consultation(
            identity,
            CreateConsultationInput {
                symptoms: payload.symptoms,
                description: payload.description,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateConsultationResponse {
        data: consultation,
    }))
}
