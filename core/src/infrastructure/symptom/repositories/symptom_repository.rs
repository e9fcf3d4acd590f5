use sea_orm::ActiveValue::Set;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, SqlErr,
};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    symptom::{entities::Symptom, ports::SymptomRepository},
};
use crate::entity::symptoms::{
    ActiveModel as SymptomActiveModel, Column as SymptomColumn, Entity as SymptomEntity,
};

#[derive(Debug, Clone)]
pub struct PostgresSymptomRepository {
    pub db: DatabaseConnection,
}

impl PostgresSymptomRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// A concurrent insert that loses on `UNIQUE(name)` is a conflict.
fn insert_error(name: &str, sql_err: Option<SqlErr>) -> CoreError {
    match sql_err {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            CoreError::Conflict(format!("symptom '{name}' already exists"))
        }
        _ => CoreError::InternalServerError,
    }
}

impl SymptomRepository for PostgresSymptomRepository {
    async fn list(&self) -> Result<Vec<Symptom>, CoreError> {
        let symptoms = SymptomEntity::find()
            .order_by_asc(SymptomColumn::Category)
            .order_by_asc(SymptomColumn::Name)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list symptoms: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(Symptom::from)
            .collect();

        Ok(symptoms)
    }

    async fn get_by_name(&self, name: String) -> Result<Option<Symptom>, CoreError> {
        let symptom = SymptomEntity::find()
            .filter(SymptomColumn::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get symptom by name: {}", e);
                CoreError::InternalServerError
            })?
            .map(Symptom::from);

        Ok(symptom)
    }

    async fn create(&self, symptom: Symptom) -> Result<Symptom, CoreError> {
        let name = symptom.name.clone();
        let created = SymptomEntity::insert(SymptomActiveModel {
            id: Set(symptom.id),
            name: Set(symptom.name),
            category: Set(symptom.category),
            description: Set(symptom.description),
            created_at: Set(symptom.created_at.naive_utc()),
        })
        .exec_with_returning(&self.db)
        .await
        .map(Symptom::from)
        .map_err(|e| {
            error!("Failed to create symptom: {}", e);
            insert_error(&name, e.sql_err())
        })?;

        Ok(created)
    }
}
