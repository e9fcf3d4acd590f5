use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    accept_consultation::{__path_accept_consultation, accept_consultation},
    complete_consultation::{__path_complete_consultation, complete_consultation},
    create_consultation::{__path_create_consultation, create_consultation},
    get_consultation::{__path_get_consultation, get_consultation},
    get_consultation_overview::{__path_get_consultation_overview, get_consultation_overview},
    get_consultations::{__path_get_consultations, get_consultations},
    get_doctor_queue::{__path_get_doctor_queue, get_doctor_queue},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(
    create_consultation,
    get_consultations,
    get_doctor_queue,
    get_consultation_overview,
    get_consultation,
    accept_consultation,
    complete_consultation
))]
pub struct ConsultationApiDoc;

pub fn consultation_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/consultations"),
            get(get_consultations).post(create_consultation),
        )
        .route(
            &format!("{root_path}/consultations/queue"),
            get(get_doctor_queue),
        )
        .route(
            &format!("{root_path}/consultations/overview"),
            get(get_consultation_overview),
        )
        .route(
            &format!("{root_path}/consultations/{{consultation_id}}"),
            get(get_consultation),
        )
        .route(
            &format!("{root_path}/consultations/{{consultation_id}}/accept"),
            post(accept_consultation),
        )
        .route(
            &format!("{root_path}/consultations/{{consultation_id}}/complete"),
            post(complete_consultation),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
