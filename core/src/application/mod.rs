use tracing::info;

use crate::{
    domain::common::{CurelyConfig, StoreBackend, services::Service},
    infrastructure::{
        consultation::PostgresConsultationRepository,
        db::postgres::{Postgres, PostgresConfig},
        memory::{InMemoryConsultationRepository, InMemorySymptomRepository},
        store::{ConsultationStore, SymptomStore},
        symptom::PostgresSymptomRepository,
    },
};

pub type CurelyService = Service<ConsultationStore, SymptomStore>;

pub async fn create_service(config: CurelyConfig) -> Result<CurelyService, anyhow::Error> {
    let (consultations, symptoms) = match config.store {
        StoreBackend::Postgres => {
            let postgres = Postgres::new(PostgresConfig {
                database_url: config.database.url(),
            })
            .await?;

            (
                ConsultationStore::Postgres(PostgresConsultationRepository::new(postgres.get_db())),
                SymptomStore::Postgres(PostgresSymptomRepository::new(postgres.get_db())),
            )
        }
        StoreBackend::Memory => (
            ConsultationStore::Memory(InMemoryConsultationRepository::new()),
            SymptomStore::Memory(InMemorySymptomRepository::with_standard_catalog()),
        ),
    };

    info!(store = %config.store, "storage backend ready");

    Ok(Service::new(consultations, symptoms, &config.auth))
}
