use axum::extract::{Path, State};
use curely_core::domain::consultation::{
    entities::Consultation, ports::ConsultationService, value_objects::GetConsultationInput,
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
pub struct GetConsultationResponse {
    pub data: Consultation,
}

#[utoipa::path(
    get,
    path = "/{consultation_id}",
    tag = "consultation",
    summary = "Get a consultation",
    params(
        ("consultation_id" = Uuid, Path, description = "Consultation ID"),
    ),
    responses(
        (status = 200, body = GetConsultationResponse),
        (status = 403, description = "Caller may not view this consultation"),
        (status = 404, description = "Consultation not found"),
    ),
)]
pub async fn get_consultation(
    Path(consultation_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetConsultationResponse>, ApiError> {
    let consultation = state
        .service
        .get_consultation(identity, GetConsultationInput { consultation_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetConsultationResponse { data: consultation }))
}
