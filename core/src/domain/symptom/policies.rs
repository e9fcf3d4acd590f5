use crate::domain::{
    authentication::value_objects::{Identity, Role},
    common::{entities::app_errors::CoreError, policies::CurelyPolicy},
    symptom::ports::SymptomPolicy,
};

impl SymptomPolicy for CurelyPolicy {
    async fn can_view_symptoms(&self, identity: &Identity) -> Result<bool, CoreError> {
        Ok(CurelyPolicy::has_one_of_roles(
            identity,
            &[Role::Patient, Role::Doctor, Role::Admin],
        ))
    }

    async fn can_create_symptom(&self, identity: &Identity) -> Result<bool, CoreError> {
        Ok(identity.has_role(Role::Admin))
    }
}
