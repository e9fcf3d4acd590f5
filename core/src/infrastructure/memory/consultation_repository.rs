use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    consultation::{
        entities::Consultation,
        ports::ConsultationRepository,
        value_objects::{ConsultationPatch, ConsultationQuery},
    },
};

#[derive(Debug, Clone, Default)]
pub struct InMemoryConsultationRepository {
    consultations: Arc<RwLock<HashMap<Uuid, Consultation>>>,
}

impl InMemoryConsultationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConsultationRepository for InMemoryConsultationRepository {
    async fn create(&self, consultation: Consultation) -> Result<Consultation, CoreError> {
        let mut consultations = self.consultations.write().await;
        if consultations.contains_key(&consultation.id) {
            return Err(CoreError::Conflict(format!(
                "consultation {} already exists",
                consultation.id
            )));
        }

        consultations.insert(consultation.id, consultation.clone());
        Ok(consultation)
    }

    async fn get_by_id(&self, consultation_id: Uuid) -> Result<Option<Consultation>, CoreError> {
        Ok(self.consultations.read().await.get(&consultation_id).cloned())
    }

    async fn update(
        &self,
        consultation_id: Uuid,
        patch: ConsultationPatch,
    ) -> Result<Consultation, CoreError> {
        let mut consultations = self.consultations.write().await;
        let consultation = consultations
            .get_mut(&consultation_id)
            .ok_or(CoreError::NotFound)?;

        consultation.apply(&patch);
        Ok(consultation.clone())
    }

    async fn query(&self, query: ConsultationQuery) -> Result<Vec<Consultation>, CoreError> {
        let consultations = self.consultations.read().await;

        let mut matching: Vec<Consultation> = consultations
            .values()
            .filter(|consultation| query.matches(consultation))
            .cloned()
            .collect();

        matching.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        let offset = query.offset.unwrap_or(0) as usize;
        let limit = query.limit.map_or(usize::MAX, |limit| limit as usize);

        Ok(matching.into_iter().skip(offset).take(limit).collect())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;
    use crate::domain::{
        consultation::entities::{ConsultationConfig, ConsultationStatus},
        triage::{SymptomSet, TriageClassifier},
    };

    fn consultation(age_minutes: i64) -> Consultation {
        let symptoms = SymptomSet::new(["Headache"]);
        let assessment = TriageClassifier::default().classify(&symptoms);
        let mut consultation = Consultation::new(ConsultationConfig {
            patient_id: Uuid::new_v4(),
            symptoms,
            description: "stored".to_string(),
            assessment,
        });
        consultation.created_at = Utc::now() - Duration::minutes(age_minutes);
        consultation
    }

    #[tokio::test]
    async fn test_query_orders_newest_first_and_paginates() {
        let repository = InMemoryConsultationRepository::new();
        let old = repository.create(consultation(30)).await.unwrap();
        let mid = repository.create(consultation(20)).await.unwrap();
        let new = repository.create(consultation(10)).await.unwrap();

        let all = repository.query(ConsultationQuery::default()).await.unwrap();
        let ids: Vec<Uuid> = all.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![new.id, mid.id, old.id]);

        let page = repository
            .query(ConsultationQuery {
                offset: Some(1),
                limit: Some(1),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].id, mid.id);
    }

    #[tokio::test]
    async fn test_update_applies_patch() {
        let repository = InMemoryConsultationRepository::new();
        let stored = repository.create(consultation(1)).await.unwrap();
        let doctor_id = Uuid::new_v4();

        let patch = stored.accept(doctor_id).unwrap();
        let updated = repository.update(stored.id, patch).await.unwrap();

        assert_eq!(updated.status, ConsultationStatus::Assigned);
        assert_eq!(updated.doctor_id, Some(doctor_id));
        assert_eq!(
            repository.get_by_id(stored.id).await.unwrap(),
            Some(updated)
        );
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let repository = InMemoryConsultationRepository::new();
        let patch = consultation(1).accept(Uuid::new_v4()).unwrap();

        assert_eq!(
            repository.update(Uuid::new_v4(), patch).await,
            Err(CoreError::NotFound)
        );
    }

    #[tokio::test]
    async fn test_last_writer_wins() {
        let repository = InMemoryConsultationRepository::new();
        let stored = repository.create(consultation(1)).await.unwrap();
        let (first, second) = (Uuid::new_v4(), Uuid::new_v4());

        // Both patches are built from the same pending snapshot.
        let first_patch = stored.accept(first).unwrap();
        let second_patch = stored.accept(second).unwrap();
        repository.update(stored.id, first_patch).await.unwrap();
        repository.update(stored.id, second_patch).await.unwrap();

        let current = repository.get_by_id(stored.id).await.unwrap().unwrap();
        assert_eq!(current.doctor_id, Some(second));
    }
}
