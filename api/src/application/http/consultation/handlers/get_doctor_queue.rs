use axum::extract::State;
use curely_core::domain::consultation::{entities::Consultation, ports::ConsultationService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetDoctorQueueResponse {
    pub data: Vec<Consultation>,
}

#[utoipa::path(
    get,
    path = "/queue",
    tag = "consultation",
    summary = "Doctor queue",
    description = "The calling doctor's own consultations followed by every unassigned pending consultation, each part newest first.",
    responses(
        (status = 200, body = GetDoctorQueueResponse),
        (status = 403, description = "Caller is not a doctor"),
    ),
)]
pub async fn get_doctor_queue(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetDoctorQueueResponse>, ApiError> {
    let consultations = state
        .service
        .get_doctor_queue(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetDoctorQueueResponse {
        data: consultations,
    }))
}
