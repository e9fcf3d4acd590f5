use std::future::Future;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    symptom::{
        entities::Symptom,
        value_objects::{CreateSymptomInput, SymptomCategoryGroup},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait SymptomService: Send + Sync {
    fn get_symptoms(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Vec<SymptomCategoryGroup>, CoreError>> + Send;

    fn create_symptom(
        &self,
        identity: Identity,
        input: CreateSymptomInput,
    ) -> impl Future<Output = Result<Symptom, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait SymptomRepository: Send + Sync {
    fn list(&self) -> impl Future<Output = Result<Vec<Symptom>, CoreError>> + Send;

    fn get_by_name(
        &self,
        name: String,
    ) -> impl Future<Output = Result<Option<Symptom>, CoreError>> + Send;

    fn create(&self, symptom: Symptom) -> impl Future<Output = Result<Symptom, CoreError>> + Send;
}

pub trait SymptomPolicy: Send + Sync {
    fn can_view_symptoms(
        &self,
        identity: &Identity,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn can_create_symptom(
        &self,
        identity: &Identity,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
