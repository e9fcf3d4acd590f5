//! Backend-selected adapters. Each variant forwards to the concrete
//! repository chosen at startup from [`StoreBackend`].
//!
//! [`StoreBackend`]: crate::domain::common::StoreBackend

use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        consultation::{
            entities::Consultation,
            ports::ConsultationRepository,
            value_objects::{ConsultationPatch, ConsultationQuery},
        },
        symptom::{entities::Symptom, ports::SymptomRepository},
    },
    infrastructure::{
        consultation::PostgresConsultationRepository,
        memory::{InMemoryConsultationRepository, InMemorySymptomRepository},
        symptom::PostgresSymptomRepository,
    },
};

#[derive(Debug, Clone)]
pub enum ConsultationStore {
    Postgres(PostgresConsultationRepository),
    Memory(InMemoryConsultationRepository),
}

impl ConsultationRepository for ConsultationStore {
    async fn create(&self, consultation: Consultation) -> Result<Consultation, CoreError> {
        match self {
            ConsultationStore::Postgres(repository) => repository.create(consultation).await,
            ConsultationStore::Memory(repository) => repository.create(consultation).await,
        }
    }

    async fn get_by_id(&self, consultation_id: Uuid) -> Result<Option<Consultation>, CoreError> {
        match self {
            ConsultationStore::Postgres(repository) => repository.get_by_id(consultation_id).await,
            ConsultationStore::Memory(repository) => repository.get_by_id(consultation_id).await,
        }
    }

    async fn update(
        &self,
        consultation_id: Uuid,
        patch: ConsultationPatch,
    ) -> Result<Consultation, CoreError> {
        match self {
            ConsultationStore::Postgres(repository) => {
                repository.update(consultation_id, patch).await
            }
            ConsultationStore::Memory(repository) => repository.update(consultation_id, patch).await,
        }
    }

    async fn query(&self, query: ConsultationQuery) -> Result<Vec<Consultation>, CoreError> {
        match self {
            ConsultationStore::Postgres(repository) => repository.query(query).await,
            ConsultationStore::Memory(repository) => repository.query(query).await,
        }
    }
}

#[derive(Debug, Clone)]
pub enum SymptomStore {
    Postgres(PostgresSymptomRepository),
    Memory(InMemorySymptomRepository),
}

impl SymptomRepository for SymptomStore {
    async fn list(&self) -> Result<Vec<Symptom>, CoreError> {
        match self {
            SymptomStore::Postgres(repository) => repository.list().await,
            SymptomStore::Memory(repository) => repository.list().await,
        }
    }

    async fn get_by_name(&self, name: String) -> Result<Option<Symptom>, CoreError> {
        match self {
            SymptomStore::Postgres(repository) => repository.get_by_name(name).await,
            SymptomStore::Memory(repository) => repository.get_by_name(name).await,
        }
    }

    async fn create(&self, symptom: Symptom) -> Result<Symptom, CoreError> {
        match self {
            SymptomStore::Postgres(repository) => repository.create(symptom).await,
            SymptomStore::Memory(repository) => repository.create(symptom).await,
        }
    }
}
