use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    consultation::{
        entities::Consultation,
        ports::ConsultationRepository,
        value_objects::{ConsultationPatch, ConsultationQuery},
    },
};
use crate::entity::consultations::{
    ActiveModel as ConsultationActiveModel, Column as ConsultationColumn,
    Entity as ConsultationEntity,
};

#[derive(Debug, Clone)]
pub struct PostgresConsultationRepository {
    pub db: DatabaseConnection,
}

impl PostgresConsultationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ConsultationRepository for PostgresConsultationRepository {
    async fn create(&self, consultation: Consultation) -> Result<Consultation, CoreError> {
        let created = ConsultationEntity::insert(ConsultationActiveModel {
            id: Set(consultation.id),
            patient_id: Set(consultation.patient_id),
            doctor_id: Set(consultation.doctor_id),
            symptoms: Set(consultation.symptoms),
            description: Set(consultation.description),
            ai_recommendation: Set(consultation.ai_recommendation),
            doctor_notes: Set(consultation.doctor_notes),
            priority: Set(consultation.priority.to_string()),
            status: Set(consultation.status.to_string()),
            created_at: Set(consultation.created_at.naive_utc()),
            updated_at: Set(consultation.updated_at.naive_utc()),
        })
        .exec_with_returning(&self.db)
        .await
        .map_err(|e| {
            error!("Failed to create consultation: {}", e);
            CoreError::InternalServerError
        })?;

        Consultation::try_from(created)
    }

    async fn get_by_id(&self, consultation_id: Uuid) -> Result<Option<Consultation>, CoreError> {
        ConsultationEntity::find_by_id(consultation_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get consultation by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Consultation::try_from)
            .transpose()
    }

    async fn update(
        &self,
        consultation_id: Uuid,
        patch: ConsultationPatch,
    ) -> Result<Consultation, CoreError> {
        let model = ConsultationActiveModel {
            id: Unchanged(consultation_id),
            doctor_id: patch.doctor_id.map_or(NotSet, |id| Set(Some(id))),
            status: patch
                .status
                .map_or(NotSet, |status| Set(status.to_string())),
            doctor_notes: patch.doctor_notes.map_or(NotSet, Set),
            updated_at: Set(patch.updated_at.naive_utc()),
            ..Default::default()
        };

        let updated = ConsultationEntity::update(model)
            .exec(&self.db)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => CoreError::NotFound,
                e => {
                    error!("Failed to update consultation: {}", e);
                    CoreError::InternalServerError
                }
            })?;

        Consultation::try_from(updated)
    }

    async fn query(&self, query: ConsultationQuery) -> Result<Vec<Consultation>, CoreError> {
        let mut select = ConsultationEntity::find();

        if let Some(patient_id) = query.patient_id {
            select = select.filter(ConsultationColumn::PatientId.eq(patient_id));
        }

        if let Some(doctor_id) = query.doctor_id {
            select = select.filter(ConsultationColumn::DoctorId.eq(doctor_id));
        }

        if let Some(status) = query.status {
            select = select.filter(ConsultationColumn::Status.eq(status.as_str()));
        }

        if let Some(priority) = query.priority {
            select = select.filter(ConsultationColumn::Priority.eq(priority.as_str()));
        }

        if query.unassigned {
            select = select.filter(ConsultationColumn::DoctorId.is_null());
        }

        select = select.order_by_desc(ConsultationColumn::CreatedAt);

        if let Some(offset) = query.offset {
            select = select.offset(offset);
        }

        if let Some(limit) = query.limit {
            select = select.limit(limit);
        }

        select
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to query consultations: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(Consultation::try_from)
            .collect()
    }
}
