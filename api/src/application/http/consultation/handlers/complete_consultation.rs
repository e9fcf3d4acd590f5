use axum::extract::{Path, State};
use curely_core::domain::consultation::{
    entities::Consultation, ports::ConsultationService, value_objects::CompleteConsultationInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        consultation::validators::CompleteConsultationValidator,
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
pub struct CompleteConsultationResponse {
    pub data: Consultation,
}

#[utoipa::path(
    post,
    path = "/{consultation_id}/complete",
    tag = "consultation",
    summary = "Complete a consultation",
    description = "Closes an assigned consultation with the assigned doctor's notes. Notes are stored verbatim.",
    params(
        ("consultation_id" = Uuid, Path, description = "Consultation ID"),
    ),
    responses(
        (status = 200, body = CompleteConsultationResponse),
        (status = 400, description = "Notes are blank"),
        (status = 403, description = "Caller is not the assigned doctor"),
        (status = 404, description = "Consultation not found"),
        (status = 409, description = "Consultation is not assigned"),
    ),
    request_body = CompleteConsultationValidator
)]
pub async fn complete_consultation(
    Path(consultation_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CompleteConsultationValidator>,
) -> Result<Response<CompleteConsultationResponse>, ApiError> {
    let consultation = state
        .service
        .complete_consultation(
            identity,
            CompleteConsultationInput {
                consultation_id,
                notes: payload.notes,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(CompleteConsultationResponse {
        data: consultation,
    }))
}
