use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    consultation::{
        entities::Consultation,
        value_objects::{
            AcceptConsultationInput, CompleteConsultationInput, ConsultationOverview,
            ConsultationPatch, ConsultationQuery, CreateConsultationInput, GetConsultationInput,
            GetConsultationsFilter,
        },
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait ConsultationService: Send + Sync {
    /// Patient submits a new consultation; priority and recommendation are
    /// computed here and never again.
    fn create_consultation(
        &self,
        identity: Identity,
        input: CreateConsultationInput,
    ) -> impl Future<Output = Result<Consultation, CoreError>> + Send;

    fn get_consultation(
        &self,
        identity: Identity,
        input: GetConsultationInput,
    ) -> impl Future<Output = Result<Consultation, CoreError>> + Send;

    /// The caller's own consultations, newest first.
    fn get_patient_consultations(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Vec<Consultation>, CoreError>> + Send;

    /// The caller's cases followed by every unassigned pending case.
    fn get_doctor_queue(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Vec<Consultation>, CoreError>> + Send;

    fn get_consultations(
        &self,
        identity: Identity,
        filter: GetConsultationsFilter,
    ) -> impl Future<Output = Result<Vec<Consultation>, CoreError>> + Send;

    fn get_consultation_overview(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<ConsultationOverview, CoreError>> + Send;

    fn accept_consultation(
        &self,
        identity: Identity,
        input: AcceptConsultationInput,
    ) -> impl Future<Output = Result<Consultation, CoreError>> + Send;

    fn complete_consultation(
        &self,
        identity: Identity,
        input: CompleteConsultationInput,
    ) -> impl Future<Output = Result<Consultation, CoreError>> + Send;
}

/// Persistence port for consultations.
///
/// `update` writes the patch unconditionally: there is no compare-and-swap,
/// so two concurrent writers to the same record race and the last one wins.
#[cfg_attr(test, mockall::automock)]
pub trait ConsultationRepository: Send + Sync {
    fn create(
        &self,
        consultation: Consultation,
    ) -> impl Future<Output = Result<Consultation, CoreError>> + Send;

    fn get_by_id(
        &self,
        consultation_id: Uuid,
    ) -> impl Future<Output = Result<Option<Consultation>, CoreError>> + Send;

    fn update(
        &self,
        consultation_id: Uuid,
        patch: ConsultationPatch,
    ) -> impl Future<Output = Result<Consultation, CoreError>> + Send;

    fn query(
        &self,
        query: ConsultationQuery,
    ) -> impl Future<Output = Result<Vec<Consultation>, CoreError>> + Send;
}

pub trait ConsultationPolicy: Send + Sync {
    fn can_create_consultation(
        &self,
        identity: &Identity,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn can_view_consultation(
        &self,
        identity: &Identity,
        consultation: &Consultation,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn can_view_own_consultations(
        &self,
        identity: &Identity,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn can_view_doctor_queue(
        &self,
        identity: &Identity,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn can_view_all_consultations(
        &self,
        identity: &Identity,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn can_resolve_consultation(
        &self,
        identity: &Identity,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
