pub mod selectors;
pub mod spec;

#[cfg(test)]
pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    pkg::internal::search::{
        filter::{JobFilter, JobQuery},
        pagination::Window,
    },
    prelude::Result,
};

use selectors::JobSelector;
use spec::JobWithCompany;

/// Read side of the job catalogue, as seen by search.
#[async_trait]
pub trait JobStore: Send + Sync {
    async fn count(&self, filter: &JobFilter) -> Result<u64>;

    /// Jobs matching `query.filter`, ordered by `query.sort`, restricted to
    /// `window`, each with its owning company expanded.
    async fn fetch(&self, query: &JobQuery, window: Window) -> Result<Vec<JobWithCompany>>;

    async fn ping(&self) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct PgJobStore {
    pool: Arc<PgPool>,
}

impl PgJobStore {
    pub fn new(pool: Arc<PgPool>) -> Self {
        PgJobStore { pool }
    }
}

#[async_trait]
impl JobStore for PgJobStore {
    async fn count(&self, filter: &JobFilter) -> Result<u64> {
        let mut conn = self.pool.acquire().await?;
        JobSelector::new(&mut conn).count(filter).await
    }

    async fn fetch(&self, query: &JobQuery, window: Window) -> Result<Vec<JobWithCompany>> {
        let mut conn = self.pool.acquire().await?;
        JobSelector::new(&mut conn).search(query, window).await
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("select 1").execute(&*self.pool).await?;
        Ok(())
    }
}
