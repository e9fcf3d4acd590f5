use std::sync::Arc;

use crate::domain::{
    authentication::services::JwtKeys,
    common::{AuthConfig, policies::CurelyPolicy},
    consultation::ports::ConsultationRepository,
    symptom::ports::SymptomRepository,
    triage::services::TriageClassifier,
};

/// Application service implementing every domain service trait over a pair
/// of repositories.
pub struct Service<CO, SY>
where
    CO: ConsultationRepository,
    SY: SymptomRepository,
{
    pub(crate) consultation_repository: Arc<CO>,
    pub(crate) symptom_repository: Arc<SY>,
    pub(crate) policy: CurelyPolicy,
    pub(crate) classifier: Arc<TriageClassifier>,
    pub(crate) jwt_keys: Arc<JwtKeys>,
}

impl<CO, SY> Service<CO, SY>
where
    CO: ConsultationRepository,
    SY: SymptomRepository,
{
    pub fn new(consultation_repository: CO, symptom_repository: SY, auth: &AuthConfig) -> Self {
        Self {
            consultation_repository: Arc::new(consultation_repository),
            symptom_repository: Arc::new(symptom_repository),
            policy: CurelyPolicy::new(),
            classifier: Arc::new(TriageClassifier::default()),
            jwt_keys: Arc::new(JwtKeys::from_config(auth)),
        }
    }
}

impl<CO, SY> Clone for Service<CO, SY>
where
    CO: ConsultationRepository,
    SY: SymptomRepository,
{
    fn clone(&self) -> Self {
        Self {
            consultation_repository: Arc::clone(&self.consultation_repository),
            symptom_repository: Arc::clone(&self.symptom_repository),
            policy: self.policy.clone(),
            classifier: Arc::clone(&self.classifier),
            jwt_keys: Arc::clone(&self.jwt_keys),
        }
    }
}
