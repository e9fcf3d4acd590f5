use tracing::{info, instrument};

use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, policies::ensure_policy, services::Service},
    consultation::ports::ConsultationRepository,
    symptom::{
        entities::Symptom,
        ports::{SymptomPolicy, SymptomRepository, SymptomService},
        value_objects::{CreateSymptomInput, SymptomCategoryGroup, group_by_category},
    },
};

fn required(field: &str, value: String) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Invalid(format!("{field} is required")));
    }

    Ok(trimmed.to_string())
}

impl<CO, SY> SymptomService for Service<CO, SY>
where
    CO: ConsultationRepository,
    SY: SymptomRepository,
{
    async fn get_symptoms(&self, identity: Identity) -> Result<Vec<SymptomCategoryGroup>, CoreError> {
        ensure_policy(
            self.policy.can_view_symptoms(&identity).await,
            "insufficient permissions",
        )?;

        let symptoms = self.symptom_repository.list().await?;
        Ok(group_by_category(symptoms))
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    async fn create_symptom(
        &self,
        identity: Identity,
        input: CreateSymptomInput,
    ) -> Result<Symptom, CoreError> {
        ensure_policy(
            self.policy.can_create_symptom(&identity).await,
            "only administrators can manage the symptom catalog",
        )?;

        let name = required("name", input.name)?;
        let category = required("category", input.category)?;
        let description = required("description", input.description)?;

        if self
            .symptom_repository
            .get_by_name(name.clone())
            .await?
            .is_some()
        {
            return Err(CoreError::Conflict(format!(
                "symptom '{name}' already exists"
            )));
        }

        let symptom = self
            .symptom_repository
            .create(Symptom::new(name, category, description))
            .await?;

        info!(symptom_id = %symptom.id, "symptom added to catalog");
        Ok(symptom)
    }
}
