use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::{
    common::entities::app_errors::CoreError,
    symptom::{
        entities::{Symptom, standard_catalog},
        ports::SymptomRepository,
    },
};

#[derive(Debug, Clone, Default)]
pub struct InMemorySymptomRepository {
    symptoms: Arc<RwLock<Vec<Symptom>>>,
}

impl InMemorySymptomRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-filled with the standard symptom catalog.
    pub fn with_standard_catalog() -> Self {
        Self {
            symptoms: Arc::new(RwLock::new(standard_catalog())),
        }
    }
}

impl SymptomRepository for InMemorySymptomRepository {
    async fn list(&self) -> Result<Vec<Symptom>, CoreError> {
        let mut symptoms = self.symptoms.read().await.clone();
        symptoms.sort_by(|a, b| {
            a.category
                .cmp(&b.category)
                .then_with(|| a.name.cmp(&b.name))
        });

        Ok(symptoms)
    }

    async fn get_by_name(&self, name: String) -> Result<Option<Symptom>, CoreError> {
        Ok(self
            .symptoms
            .read()
            .await
            .iter()
            .find(|symptom| symptom.name == name)
            .cloned())
    }

    async fn create(&self, symptom: Symptom) -> Result<Symptom, CoreError> {
        let mut symptoms = self.symptoms.write().await;
        if symptoms.iter().any(|existing| existing.name == symptom.name) {
            return Err(CoreError::Conflict(format!(
                "symptom '{}' already exists",
                symptom.name
            )));
        }

        symptoms.push(symptom.clone());
        Ok(symptom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::symptom::entities::STANDARD_CATALOG;

    #[tokio::test]
    async fn test_standard_catalog_is_seeded() {
        let repository = InMemorySymptomRepository::with_standard_catalog();

        let symptoms = repository.list().await.unwrap();
        assert_eq!(symptoms.len(), STANDARD_CATALOG.len());
        assert_eq!(symptoms[0].category, "Cardiovascular");

        let chest_pain = repository
            .get_by_name("Chest Pain".to_string())
            .await
            .unwrap();
        assert!(chest_pain.is_some());
        assert!(InMemorySymptomRepository::new().list().await.unwrap().is_empty());
    }
}
