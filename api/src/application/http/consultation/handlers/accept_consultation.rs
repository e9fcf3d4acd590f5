use axum::extract::{Path, State};
use curely_core::domain::consultation::{
    entities::Consultation, ports::ConsultationService, value_objects::AcceptConsultationInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AcceptConsultationResponse {
    pub data: Consultation,
}

#[utoipa::path(
    post,
    path = "/{consultation_id}/accept",
    tag = "consultation",
    summary = "Accept a consultation",
    description = "Assigns a pending, unassigned consultation to the calling doctor.",
    params(
        ("consultation_id" = Uuid, Path, description = "Consultation ID"),
    ),
    responses(
        (status = 200, body = AcceptConsultationResponse),
        (status = 403, description = "Caller is not a doctor"),
        (status = 404, description = "Consultation not found"),
        (status = 409, description = "Consultation is no longer pending"),
    ),
)]
pub async fn accept_consultation(
    Path(consultation_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<AcceptConsultationResponse>, ApiError> {
    let consultation = state
        .service
        .accept_consultation(identity, AcceptConsultationInput { consultation_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AcceptConsultationResponse { data: consultation }))
}
