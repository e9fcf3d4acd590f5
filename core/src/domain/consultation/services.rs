use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, policies::ensure_policy, services::Service},
    consultation::{
        entities::{Consultation, ConsultationConfig},
        ports::{ConsultationPolicy, ConsultationRepository, ConsultationService},
        value_objects::{
            AcceptConsultationInput, CompleteConsultationInput, ConsultationOverview,
            ConsultationQuery, CreateConsultationInput, GetConsultationInput,
            GetConsultationsFilter,
        },
    },
    symptom::ports::SymptomRepository,
    triage::entities::SymptomSet,
};

impl<CO, SY> Service<CO, SY>
where
    CO: ConsultationRepository,
    SY: SymptomRepository,
{
    async fn fetch_consultation(&self, consultation_id: Uuid) -> Result<Consultation, CoreError> {
        self.consultation_repository
            .get_by_id(consultation_id)
            .await?
            .ok_or(CoreError::NotFound)
    }
}

impl<CO, SY> ConsultationService for Service<CO, SY>
where
    CO: ConsultationRepository,
    SY: SymptomRepository,
{
    #[instrument(skip(self, input), fields(patient_id = %identity.id()))]
    async fn create_consultation(
        &self,
        identity: Identity,
        input: CreateConsultationInput,
    ) -> Result<Consultation, CoreError> {
        ensure_policy(
            self.policy.can_create_consultation(&identity).await,
            "only patients can submit consultations",
        )?;

        if input.symptoms.iter().any(|s| s.trim().is_empty()) {
            return Err(CoreError::Invalid(
                "symptom names must not be blank".to_string(),
            ));
        }

        let symptoms = SymptomSet::new(input.symptoms.iter().map(|s| s.trim()));
        if symptoms.is_empty() {
            return Err(CoreError::Invalid(
                "at least one symptom is required".to_string(),
            ));
        }
        if input.description.trim().is_empty() {
            return Err(CoreError::Invalid("description is required".to_string()));
        }

        for name in symptoms.iter() {
            if self
                .symptom_repository
                .get_by_name(name.to_string())
                .await?
                .is_none()
            {
                return Err(CoreError::Invalid(format!(
                    "symptom '{name}' is not in the catalog"
                )));
            }
        }

        let assessment = self.classifier.classify(&symptoms);
        let consultation = Consultation::new(ConsultationConfig {
            patient_id: identity.id(),
            symptoms,
            description: input.description,
            assessment,
        });

        let consultation = self.consultation_repository.create(consultation).await?;

        info!(
            consultation_id = %consultation.id,
            priority = %consultation.priority,
            "consultation created"
        );

        Ok(consultation)
    }

    async fn get_consultation(
        &self,
        identity: Identity,
        input: GetConsultationInput,
    ) -> Result<Consultation, CoreError> {
        let consultation = self.fetch_consultation(input.consultation_id).await?;

        ensure_policy(
            self.policy
                .can_view_consultation(&identity, &consultation)
                .await,
            "insufficient permissions",
        )?;

        Ok(consultation)
    }

    async fn get_patient_consultations(
        &self,
        identity: Identity,
    ) -> Result<Vec<Consultation>, CoreError> {
        ensure_policy(
            self.policy.can_view_own_consultations(&identity).await,
            "insufficient permissions",
        )?;

        self.consultation_repository
            .query(ConsultationQuery::by_patient(identity.id()))
            .await
    }

    async fn get_doctor_queue(&self, identity: Identity) -> Result<Vec<Consultation>, CoreError> {
        ensure_policy(
            self.policy.can_view_doctor_queue(&identity).await,
            "insufficient permissions",
        )?;

        let mut queue = self
            .consultation_repository
            .query(ConsultationQuery::by_doctor(identity.id()))
            .await?;

        let open = self
            .consultation_repository
            .query(ConsultationQuery::open())
            .await?;

        queue.extend(open);
        Ok(queue)
    }

    async fn get_consultations(
        &self,
        identity: Identity,
        filter: GetConsultationsFilter,
    ) -> Result<Vec<Consultation>, CoreError> {
        ensure_policy(
            self.policy.can_view_all_consultations(&identity).await,
            "insufficient permissions",
        )?;

        self.consultation_repository.query(filter.into()).await
    }

    async fn get_consultation_overview(
        &self,
        identity: Identity,
    ) -> Result<ConsultationOverview, CoreError> {
        ensure_policy(
            self.policy.can_view_all_consultations(&identity).await,
            "insufficient permissions",
        )?;

        let consultations = self
            .consultation_repository
            .query(ConsultationQuery::default())
            .await?;

        Ok(ConsultationOverview::from_consultations(&consultations))
    }

    #[instrument(skip(self, input), fields(doctor_id = %identity.id(), consultation_id = %input.consultation_id))]
    async fn accept_consultation(
        &self,
        identity: Identity,
        input: AcceptConsultationInput,
    ) -> Result<Consultation, CoreError> {
        ensure_policy(
            self.policy.can_resolve_consultation(&identity).await,
            "only doctors can accept consultations",
        )?;

        let consultation = self.fetch_consultation(input.consultation_id).await?;
        let patch = consultation.accept(identity.id())?;

        let consultation = self
            .consultation_repository
            .update(consultation.id, patch)
            .await?;

        info!("consultation accepted");
        Ok(consultation)
    }

    #[instrument(skip(self, input), fields(doctor_id = %identity.id(), consultation_id = %input.consultation_id))]
    async fn complete_consultation(
        &self,
        identity: Identity,
        input: CompleteConsultationInput,
    ) -> Result<Consultation, CoreError> {
        ensure_policy(
            self.policy.can_resolve_consultation(&identity).await,
            "only doctors can complete consultations",
        )?;

        let consultation = self.fetch_consultation(input.consultation_id).await?;
        let patch = consultation.complete(identity.id(), &input.notes)?;

        let consultation = self
            .consultation_repository
            .update(consultation.id, patch)
            .await?;

        info!("consultation completed");
        Ok(consultation)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;
    use crate::{
        domain::{
            authentication::value_objects::Role,
            common::AuthConfig,
            consultation::{entities::ConsultationStatus, value_objects::ConsultationPatch},
            triage::entities::Priority,
        },
        infrastructure::memory::{InMemoryConsultationRepository, InMemorySymptomRepository},
    };

    type TestService = Service<InMemoryConsultationRepository, InMemorySymptomRepository>;

    fn auth() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".to_string(),
            leeway_seconds: 0,
        }
    }

    fn service() -> TestService {
        Service::new(
            InMemoryConsultationRepository::new(),
            InMemorySymptomRepository::with_standard_catalog(),
            &auth(),
        )
    }

    fn patient() -> Identity {
        Identity::new(Uuid::new_v4(), Role::Patient)
    }

    fn doctor() -> Identity {
        Identity::new(Uuid::new_v4(), Role::Doctor)
    }

    fn admin() -> Identity {
        Identity::new(Uuid::new_v4(), Role::Admin)
    }

    fn input(symptoms: &[&str]) -> CreateConsultationInput {
        CreateConsultationInput {
            symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
            description: "Started two days ago".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_consultation_classifies_and_stores() {
        let service = service();
        let patient = patient();

        let consultation = service
            .create_consultation(patient.clone(), input(&["Fever", "Cough", "Headache"]))
            .await
            .unwrap();

        assert_eq!(consultation.patient_id, patient.id());
        assert_eq!(consultation.status, ConsultationStatus::Pending);
        assert_eq!(consultation.doctor_id, None);
        assert_eq!(consultation.priority, Priority::High);

        let stored = service
            .get_consultation(
                patient,
                GetConsultationInput {
                    consultation_id: consultation.id,
                },
            )
            .await
            .unwrap();
        assert_eq!(stored, consultation);
    }

    #[tokio::test]
    async fn test_create_consultation_rejects_empty_input() {
        let service = service();

        let result = service.create_consultation(patient(), input(&[])).await;
        assert!(matches!(result, Err(CoreError::Invalid(_))));

        let result = service
            .create_consultation(
                patient(),
                CreateConsultationInput {
                    symptoms: vec!["Headache".to_string()],
                    description: "  ".to_string(),
                },
            )
            .await;
        assert!(matches!(result, Err(CoreError::Invalid(_))));

        let result = service
            .create_consultation(patient(), input(&["Headache", " "]))
            .await;
        assert!(matches!(result, Err(CoreError::Invalid(_))));
    }

    #[tokio::test]
    async fn test_create_consultation_normalizes_symptom_names() {
        let service = service();

        let consultation = service
            .create_consultation(patient(), input(&[" Chest Pain ", "Fever", "Fever\t"]))
            .await
            .unwrap();

        assert_eq!(consultation.priority, Priority::Urgent);
        assert_eq!(
            consultation.symptoms,
            vec!["Chest Pain".to_string(), "Fever".to_string()]
        );
    }

    #[tokio::test]
    async fn test_create_consultation_rejects_unknown_symptoms() {
        let repository = InMemoryConsultationRepository::new();
        let service = Service::new(
            repository.clone(),
            InMemorySymptomRepository::with_standard_catalog(),
            &auth(),
        );

        let result = service
            .create_consultation(patient(), input(&["Chest Pain ", "Not A Catalog Symptom"]))
            .await;
        assert_eq!(
            result,
            Err(CoreError::Invalid(
                "symptom 'Not A Catalog Symptom' is not in the catalog".to_string()
            ))
        );
        assert!(
            repository
                .query(ConsultationQuery::default())
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_only_patients_create_consultations() {
        let service = service();

        for identity in [doctor(), admin()] {
            let result = service
                .create_consultation(identity, input(&["Headache"]))
                .await;
            assert!(matches!(result, Err(CoreError::Forbidden(_))));
        }
    }

    #[tokio::test]
    async fn test_accept_then_complete() {
        let service = service();
        let doctor = doctor();
        let created = service
            .create_consultation(patient(), input(&["Chest Pain"]))
            .await
            .unwrap();

        let accepted = service
            .accept_consultation(
                doctor.clone(),
                AcceptConsultationInput {
                    consultation_id: created.id,
                },
            )
            .await
            .unwrap();
        assert_eq!(accepted.status, ConsultationStatus::Assigned);
        assert_eq!(accepted.doctor_id, Some(doctor.id()));

        let completed = service
            .complete_consultation(
                doctor,
                CompleteConsultationInput {
                    consultation_id: created.id,
                    notes: "Referred to cardiology.".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(completed.status, ConsultationStatus::Completed);
        assert_eq!(completed.doctor_notes, "Referred to cardiology.");
        assert_eq!(completed.priority, Priority::Urgent);
        assert_eq!(completed.ai_recommendation, created.ai_recommendation);
    }

    #[tokio::test]
    async fn test_second_accept_is_rejected() {
        let service = service();
        let created = service
            .create_consultation(patient(), input(&["Headache"]))
            .await
            .unwrap();
        let first = doctor();

        service
            .accept_consultation(
                first.clone(),
                AcceptConsultationInput {
                    consultation_id: created.id,
                },
            )
            .await
            .unwrap();

        let result = service
            .accept_consultation(
                doctor(),
                AcceptConsultationInput {
                    consultation_id: created.id,
                },
            )
            .await;
        assert!(matches!(result, Err(CoreError::InvalidTransition { .. })));

        let stored = service
            .get_consultation(
                admin(),
                GetConsultationInput {
                    consultation_id: created.id,
                },
            )
            .await
            .unwrap();
        assert_eq!(stored.doctor_id, Some(first.id()));
    }

    #[tokio::test]
    async fn test_complete_with_blank_notes_leaves_record_untouched() {
        let service = service();
        let doctor = doctor();
        let created = service
            .create_consultation(patient(), input(&["Headache"]))
            .await
            .unwrap();
        let accepted = service
            .accept_consultation(
                doctor.clone(),
                AcceptConsultationInput {
                    consultation_id: created.id,
                },
            )
            .await
            .unwrap();

        let result = service
            .complete_consultation(
                doctor,
                CompleteConsultationInput {
                    consultation_id: created.id,
                    notes: "\n\t".to_string(),
                },
            )
            .await;
        assert!(matches!(result, Err(CoreError::Invalid(_))));

        let stored = service
            .get_consultation(
                admin(),
                GetConsultationInput {
                    consultation_id: created.id,
                },
            )
            .await
            .unwrap();
        assert_eq!(stored, accepted);
    }

    #[tokio::test]
    async fn test_accept_unknown_consultation() {
        let result = service()
            .accept_consultation(
                doctor(),
                AcceptConsultationInput {
                    consultation_id: Uuid::new_v4(),
                },
            )
            .await;
        assert_eq!(result, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn test_patient_cannot_view_foreign_consultation() {
        let service = service();
        let created = service
            .create_consultation(patient(), input(&["Headache"]))
            .await
            .unwrap();

        let result = service
            .get_consultation(
                patient(),
                GetConsultationInput {
                    consultation_id: created.id,
                },
            )
            .await;
        assert!(matches!(result, Err(CoreError::Forbidden(_))));
    }

    #[tokio::test]
    async fn test_doctor_visibility() {
        let service = service();
        let owner = doctor();
        let created = service
            .create_consultation(patient(), input(&["Headache"]))
            .await
            .unwrap();
        let by_id = || GetConsultationInput {
            consultation_id: created.id,
        };

        assert!(service.get_consultation(doctor(), by_id()).await.is_ok());

        service
            .accept_consultation(
                owner.clone(),
                AcceptConsultationInput {
                    consultation_id: created.id,
                },
            )
            .await
            .unwrap();

        assert!(service.get_consultation(owner, by_id()).await.is_ok());
        assert!(matches!(
            service.get_consultation(doctor(), by_id()).await,
            Err(CoreError::Forbidden(_))
        ));
    }

    fn seeded(patient_id: Uuid, symptoms: &[&str], age_minutes: i64) -> Consultation {
        let symptoms = SymptomSet::new(symptoms.iter().copied());
        let assessment = crate::domain::triage::services::TriageClassifier::default()
            .classify(&symptoms);
        let mut consultation = Consultation::new(ConsultationConfig {
            patient_id,
            symptoms,
            description: "seeded".to_string(),
            assessment,
        });
        consultation.created_at = Utc::now() - Duration::minutes(age_minutes);
        consultation.updated_at = consultation.created_at;
        consultation
    }

    #[tokio::test]
    async fn test_lifecycle_refreshes_stored_updated_at() {
        let repository = InMemoryConsultationRepository::new();
        let stored = repository
            .create(seeded(Uuid::new_v4(), &["Headache"], 120))
            .await
            .unwrap();
        let service = Service::new(
            repository.clone(),
            InMemorySymptomRepository::with_standard_catalog(),
            &auth(),
        );
        let doctor = doctor();

        let accepted = service
            .accept_consultation(
                doctor.clone(),
                AcceptConsultationInput {
                    consultation_id: stored.id,
                },
            )
            .await
            .unwrap();
        assert!(accepted.updated_at > stored.updated_at);
        assert_eq!(accepted.created_at, stored.created_at);

        let completed = service
            .complete_consultation(
                doctor,
                CompleteConsultationInput {
                    consultation_id: stored.id,
                    notes: "Follow up in a week.".to_string(),
                },
            )
            .await
            .unwrap();
        assert!(completed.updated_at >= accepted.updated_at);
        assert_ne!(completed.updated_at, stored.updated_at);
        assert_eq!(completed.created_at, stored.created_at);
    }

    #[tokio::test]
    async fn test_patient_list_is_newest_first_and_scoped() {
        let repository = InMemoryConsultationRepository::new();
        let me = patient();
        let older = repository
            .create(seeded(me.id(), &["Headache"], 30))
            .await
            .unwrap();
        let newer = repository
            .create(seeded(me.id(), &["Cough"], 5))
            .await
            .unwrap();
        repository
            .create(seeded(Uuid::new_v4(), &["Fever"], 1))
            .await
            .unwrap();

        let service = Service::new(repository, InMemorySymptomRepository::with_standard_catalog(), &auth());
        let listed = service.get_patient_consultations(me).await.unwrap();

        let ids: Vec<Uuid> = listed.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![newer.id, older.id]);
    }

    #[tokio::test]
    async fn test_doctor_queue_lists_own_cases_then_open_cases() {
        let repository = InMemoryConsultationRepository::new();
        let me = doctor();

        let open_old = repository
            .create(seeded(Uuid::new_v4(), &["Headache"], 50))
            .await
            .unwrap();
        let open_new = repository
            .create(seeded(Uuid::new_v4(), &["Cough"], 10))
            .await
            .unwrap();

        let mut mine = seeded(Uuid::new_v4(), &["Fever"], 40);
        let patch = mine.accept(me.id()).unwrap();
        mine.apply(&patch);
        let mine = repository.create(mine).await.unwrap();

        let mut theirs = seeded(Uuid::new_v4(), &["Nausea"], 20);
        let patch = theirs.accept(Uuid::new_v4()).unwrap();
        theirs.apply(&patch);
        repository.create(theirs).await.unwrap();

        let service = Service::new(repository, InMemorySymptomRepository::with_standard_catalog(), &auth());
        let queue = service.get_doctor_queue(me).await.unwrap();

        let ids: Vec<Uuid> = queue.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![mine.id, open_new.id, open_old.id]);
    }

    #[tokio::test]
    async fn test_role_scoped_listing_policies() {
        let service = service();

        assert!(matches!(
            service.get_doctor_queue(patient()).await,
            Err(CoreError::Forbidden(_))
        ));
        assert!(matches!(
            service.get_patient_consultations(doctor()).await,
            Err(CoreError::Forbidden(_))
        ));
        assert!(matches!(
            service
                .get_consultations(doctor(), GetConsultationsFilter::default())
                .await,
            Err(CoreError::Forbidden(_))
        ));
        assert!(matches!(
            service.get_consultation_overview(patient()).await,
            Err(CoreError::Forbidden(_))
        ));
        assert!(matches!(
            service
                .accept_consultation(
                    admin(),
                    AcceptConsultationInput {
                        consultation_id: Uuid::new_v4(),
                    },
                )
                .await,
            Err(CoreError::Forbidden(_))
        ));
    }

    #[tokio::test]
    async fn test_admin_filters_and_overview() {
        let service = service();
        for symptoms in [
            &["Chest Pain"][..],
            &["Fever", "Cough", "Headache"][..],
            &["Headache"][..],
            &["Cough"][..],
        ] {
            service
                .create_consultation(patient(), input(symptoms))
                .await
                .unwrap();
        }

        let low = service
            .get_consultations(
                admin(),
                GetConsultationsFilter {
                    priority: Some(Priority::Low),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(low.len(), 2);
        assert!(low.iter().all(|c| c.priority == Priority::Low));

        let page = service
            .get_consultations(
                admin(),
                GetConsultationsFilter {
                    offset: Some(1),
                    limit: Some(2),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(page.len(), 2);

        let overview = service.get_consultation_overview(admin()).await.unwrap();
        assert_eq!(overview.total, 4);
        assert_eq!(overview.by_status.pending, 4);
        assert_eq!(overview.by_priority.urgent, 1);
        assert_eq!(overview.by_priority.high, 1);
        assert_eq!(overview.by_priority.low, 2);
    }

    /// Store that reads from an inner repository but fails every write.
    struct FailingWrites(InMemoryConsultationRepository);

    impl ConsultationRepository for FailingWrites {
        async fn create(&self, _consultation: Consultation) -> Result<Consultation, CoreError> {
            Err(CoreError::InternalServerError)
        }

        async fn get_by_id(&self, consultation_id: Uuid) -> Result<Option<Consultation>, CoreError> {
            self.0.get_by_id(consultation_id).await
        }

        async fn update(
            &self,
            _consultation_id: Uuid,
            _patch: ConsultationPatch,
        ) -> Result<Consultation, CoreError> {
            Err(CoreError::InternalServerError)
        }

        async fn query(&self, query: ConsultationQuery) -> Result<Vec<Consultation>, CoreError> {
            self.0.query(query).await
        }
    }

    #[tokio::test]
    async fn test_failed_write_leaves_state_unchanged() {
        let inner = InMemoryConsultationRepository::new();
        let stored = inner
            .create(seeded(Uuid::new_v4(), &["Headache"], 1))
            .await
            .unwrap();

        let service = Service::new(
            FailingWrites(inner),
            InMemorySymptomRepository::with_standard_catalog(),
            &auth(),
        );

        let result = service
            .accept_consultation(
                doctor(),
                AcceptConsultationInput {
                    consultation_id: stored.id,
                },
            )
            .await;
        assert_eq!(result, Err(CoreError::InternalServerError));

        let result = service
            .create_consultation(patient(), input(&["Headache"]))
            .await;
        assert_eq!(result, Err(CoreError::InternalServerError));

        let after = service
            .get_consultation(
                admin(),
                GetConsultationInput {
                    consultation_id: stored.id,
                },
            )
            .await
            .unwrap();
        assert_eq!(after, stored);
    }
}
