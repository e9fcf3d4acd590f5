use chrono::{TimeZone, Utc};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError, consultation::entities::Consultation,
};
use crate::entity::consultations::Model as ConsultationModel;

impl TryFrom<ConsultationModel> for Consultation {
    type Error = CoreError;

    fn try_from(model: ConsultationModel) -> Result<Self, Self::Error> {
        let priority = model.priority.parse().map_err(|e| {
            error!("consultation {} has an unreadable priority: {}", model.id, e);
            CoreError::InternalServerError
        })?;
        let status = model.status.parse().map_err(|e| {
            error!("consultation {} has an unreadable status: {}", model.id, e);
            CoreError::InternalServerError
        })?;

        Ok(Consultation {
            id: model.id,
            patient_id: model.patient_id,
            doctor_id: model.doctor_id,
            symptoms: model.symptoms,
            description: model.description,
            ai_recommendation: model.ai_recommendation,
            doctor_notes: model.doctor_notes,
            priority,
            status,
            created_at: Utc.from_utc_datetime(&model.created_at),
            updated_at: Utc.from_utc_datetime(&model.updated_at),
        })
    }
}
