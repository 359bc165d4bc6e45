use std::{future::Future, sync::Arc};

use sqlx::{PgPool, Postgres, Transaction, postgres::PgPoolOptions};

use crate::{
    conf::Settings,
    pkg::internal::{
        adaptors::jobs::{JobStore, PgJobStore},
        storage::DiskStorage,
    },
    prelude::Result,
};

pub fn db_pool(settings: &Settings) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(settings.database_pool_max_connections)
        .connect_lazy(&settings.database_url)?;
    Ok(pool)
}

pub trait GetTxn {
    fn begin_txn(&self) -> impl Future<Output = Result<Transaction<'static, Postgres>>> + Send;
}

impl GetTxn for PgPool {
    async fn begin_txn(&self) -> Result<Transaction<'static, Postgres>> {
        Ok(self.begin().await?)
    }
}

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub jobs: Arc<dyn JobStore>,
    pub cv_storage: DiskStorage,
    pub resource_storage: DiskStorage,
}

impl AppState {
    pub fn new(settings: Settings) -> Result<AppState> {
        let store = PgJobStore::new(Arc::new(db_pool(&settings)?));
        Ok(AppState::with_store(settings, Arc::new(store)))
    }

    pub fn with_store(settings: Settings, jobs: Arc<dyn JobStore>) -> AppState {
        AppState {
            cv_storage: DiskStorage::new(&settings.cv_dir),
            resource_storage: DiskStorage::new(&settings.resources_dir),
            settings: Arc::new(settings),
            jobs,
        }
    }
}
