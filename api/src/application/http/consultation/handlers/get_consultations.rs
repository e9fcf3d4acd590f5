use axum::extract::State;
use curely_core::domain::{
    authentication::value_objects::Role,
    consultation::{
        entities::{Consultation, ConsultationStatus},
        ports::ConsultationService,
        value_objects::GetConsultationsFilter,
    },
    triage::Priority,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        query_extractor::QueryParamsExtractor,
        query_params::QueryParams,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

/// Documented shape of the query string; parsed by [`QueryParamsExtractor`].
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetConsultationsQuery {
    #[serde(rename = "filter[status]")]
    pub status: Option<ConsultationStatus>,
    #[serde(rename = "filter[priority]")]
    pub priority: Option<Priority>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetConsultationsResponse {
    pub data: Vec<Consultation>,
}

fn filter_from_query(query: &QueryParams) -> Result<GetConsultationsFilter, ApiError> {
    let status = query
        .filter
        .get("status")
        .map(str::parse::<ConsultationStatus>)
        .transpose()
        .map_err(ApiError::BadRequest)?;
    let priority = query
        .filter
        .get("priority")
        .map(str::parse::<Priority>)
        .transpose()
        .map_err(ApiError::BadRequest)?;

    Ok(GetConsultationsFilter {
        status,
        priority,
        offset: Some(query.pagination.offset),
        limit: Some(query.pagination.limit),
    })
}

#[utoipa::path(
    get,
    path = "",
    tag = "consultation",
    summary = "List consultations",
    description = "Patients receive their own consultations. Administrators receive every consultation and may filter by status and priority. Results are newest first.",
    params(GetConsultationsQuery),
    responses(
        (status = 200, body = GetConsultationsResponse),
        (status = 400, description = "Unknown status or priority filter"),
        (status = 403, description = "Doctors use the queue endpoint"),
    ),
)]
pub async fn get_consultations(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    QueryParamsExtractor(query): QueryParamsExtractor,
) -> Result<Response<GetConsultationsResponse>, ApiError> {
    let consultations = match identity.role() {
        Role::Patient => state.service.get_patient_consultations(identity).await,
        _ => {
            let filter = filter_from_query(&query)?;
            state.service.get_consultations(identity, filter).await
        }
    }
    .map_err(ApiError::from)?;

    Ok(Response::OK(GetConsultationsResponse {
        data: consultations,
    }))
}
