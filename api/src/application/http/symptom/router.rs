use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    create_symptom::{__path_create_symptom, create_symptom},
    get_symptoms::{__path_get_symptoms, get_symptoms},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(get_symptoms, create_symptom))]
pub struct SymptomApiDoc;

pub fn symptom_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/symptoms", state.args.server.root_path),
            get(get_symptoms).post(create_symptom),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
