use axum::extract::State;
use curely_core::domain::consultation::{
    ports::ConsultationService, value_objects::ConsultationOverview,
};
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
pub struct GetConsultationOverviewResponse {
    pub data: ConsultationOverview,
}

#[utoipa::path(
    get,
    path = "/overview",
    tag = "consultation",
    summary = "Consultation overview",
    description = "Counts of every consultation by status and by priority.",
    responses(
        (status = 200, body = GetConsultationOverviewResponse),
        (status = 403, description = "Caller is not an administrator"),
    ),
)]
pub async fn get_consultation_overview(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetConsultationOverviewResponse>, ApiError> {
    let overview = state
        .service
        .get_consultation_overview(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetConsultationOverviewResponse { data: overview }))
}
