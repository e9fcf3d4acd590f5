use axum::extract::State;
use curely_core::domain::symptom::{ports::SymptomService, value_objects::SymptomCategoryGroup};
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
pub struct GetSymptomsResponse {
    pub data: Vec<SymptomCategoryGroup>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "symptom",
    summary = "Symptom catalog",
    description = "All selectable symptoms grouped by category. Categories and names are sorted alphabetically.",
    responses(
        (status = 200, body = GetSymptomsResponse),
    ),
)]
pub async fn get_symptoms(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetSymptomsResponse>, ApiError> {
    let groups = state
        .service
        .get_symptoms(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetSymptomsResponse { data: groups }))
}
