use crate::domain::{
    authentication::value_objects::{Identity, Role},
    common::{entities::app_errors::CoreError, policies::CurelyPolicy},
    consultation::{entities::Consultation, ports::ConsultationPolicy},
};

impl ConsultationPolicy for CurelyPolicy {
    async fn can_create_consultation(&self, identity: &Identity) -> Result<bool, CoreError> {
        Ok(identity.has_role(Role::Patient))
    }

    async fn can_view_consultation(
        &self,
        identity: &Identity,
        consultation: &Consultation,
    ) -> Result<bool, CoreError> {
        let allowed = match identity.role() {
            Role::Admin => true,
            Role::Patient => consultation.patient_id == identity.id(),
            // Open cases are visible to every doctor so they can be picked up.
            Role::Doctor => consultation.is_assigned_to(identity.id()) || consultation.is_open(),
        };

        Ok(allowed)
    }

    async fn can_view_own_consultations(&self, identity: &Identity) -> Result<bool, CoreError> {
        Ok(identity.has_role(Role::Patient))
    }

    async fn can_view_doctor_queue(&self, identity: &Identity) -> Result<bool, CoreError> {
        Ok(identity.has_role(Role::Doctor))
    }

    async fn can_view_all_consultations(&self, identity: &Identity) -> Result<bool, CoreError> {
        Ok(CurelyPolicy::has_one_of_roles(identity, &[Role::Admin]))
    }

    async fn can_resolve_consultation(&self, identity: &Identity) -> Result<bool, CoreError> {
        Ok(identity.has_role(Role::Doctor))
    }
}
