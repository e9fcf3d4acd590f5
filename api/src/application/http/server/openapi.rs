use utoipa::OpenApi;

use crate::application::http::{
    consultation::router::ConsultationApiDoc,
    health::__path_health,
    symptom::router::SymptomApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Curely API",
        description = "Consultation triage and lifecycle for patients, doctors and administrators."
    ),
    paths(health),
    nest(
        (path = "/consultations", api = ConsultationApiDoc),
        (path = "/symptoms", api = SymptomApiDoc),
    ),
    tags(
        (name = "consultation", description = "Consultation triage and lifecycle"),
        (name = "symptom", description = "Symptom catalog"),
        (name = "health", description = "Service health"),
    )
)]
pub struct ApiDoc;
