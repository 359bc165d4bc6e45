use std::{cmp::Ordering, collections::HashMap};

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::{
    pkg::internal::search::{
        filter::{JobFilter, JobQuery, JobSort},
        pagination::Window,
    },
    prelude::{AppError, Result},
};

use super::{
    JobStore,
    spec::{CompanyProfile, JobWithCompany},
};

/// Company as stored, secret included.
#[derive(Debug, Clone)]
pub struct CompanyRecord {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct JobRecord {
    pub id: i32,
    pub company_id: i32,
    pub job_title: String,
    pub job_type: String,
    pub location: String,
    pub experience: i32,
    pub created_at: DateTime<Utc>,
}

/// In-memory stand-in for the Postgres store, evaluating the same filter
/// and ordering rules.
#[derive(Debug, Default)]
pub struct MemoryJobStore {
    companies: HashMap<i32, CompanyRecord>,
    jobs: Vec<JobRecord>,
}

pub fn epoch(minutes: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::minutes(minutes)
}

impl MemoryJobStore {
    pub fn new() -> Self {
        let mut store = MemoryJobStore::default();
        store.add_company(CompanyRecord {
            id: 1,
            name: "Acme".into(),
            email: "hr@acme.test".into(),
            password: "hunter2-secret".into(),
        });
        store
    }

    /// `n` full-time jobs in Berlin, ids 1..=n, created a minute apart.
    pub fn seeded(n: i32) -> Self {
        let mut store = MemoryJobStore::new();
        for id in 1..=n {
            store.add_job(&format!("Job {id:02}"), "full-time", "Berlin", 2, id as i64);
        }
        store
    }

    pub fn add_company(&mut self, company: CompanyRecord) {
        self.companies.insert(company.id, company);
    }

    pub fn add_job(
        &mut self,
        title: &str,
        job_type: &str,
        location: &str,
        experience: i32,
        minutes: i64,
    ) -> i32 {
        let id = self.jobs.len() as i32 + 1;
        self.jobs.push(JobRecord {
            id,
            company_id: 1,
            job_title: title.into(),
            job_type: job_type.into(),
            location: location.into(),
            experience,
            created_at: epoch(minutes),
        });
        id
    }

    fn expand(&self, job: &JobRecord) -> JobWithCompany {
        let company = &self.companies[&job.company_id];
        JobWithCompany {
            id: job.id,
            job_title: job.job_title.clone(),
            job_type: job.job_type.clone(),
            location: job.location.clone(),
            salary: None,
            vacancies: None,
            experience: job.experience,
            description: None,
            requirements: None,
            created_at: job.created_at,
            updated_at: job.created_at,
            company: CompanyProfile {
                id: company.id,
                name: company.name.clone(),
                email: company.email.clone(),
                contact: None,
                location: None,
                about: None,
                profile_url: None,
            },
        }
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

pub fn matches(filter: &JobFilter, job: &JobRecord) -> bool {
    if let Some(location) = &filter.location {
        if !contains_ci(&job.location, location) {
            return false;
        }
    }
    if let Some(types) = &filter.job_types {
        if !types.contains(&job.job_type) {
            return false;
        }
    }
    if let Some(range) = &filter.experience {
        if !range.contains(job.experience) {
            return false;
        }
    }
    if let Some(text) = &filter.text {
        if !contains_ci(&job.job_title, text) && !contains_ci(&job.job_type, text) {
            return false;
        }
    }
    true
}

fn compare(sort: JobSort, a: &JobRecord, b: &JobRecord) -> Ordering {
    match sort {
        JobSort::Newest => b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)),
        JobSort::Oldest => a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)),
        JobSort::TitleAsc => a.job_title.cmp(&b.job_title).then(a.id.cmp(&b.id)),
        JobSort::TitleDesc => b.job_title.cmp(&a.job_title).then(b.id.cmp(&a.id)),
        JobSort::Unsorted => a.id.cmp(&b.id),
    }
}

#[async_trait]
impl JobStore for MemoryJobStore {
    async fn count(&self, filter: &JobFilter) -> Result<u64> {
        Ok(self.jobs.iter().filter(|j| matches(filter, j)).count() as u64)
    }

    async fn fetch(&self, query: &JobQuery, window: Window) -> Result<Vec<JobWithCompany>> {
        let mut hits: Vec<&JobRecord> =
            self.jobs.iter().filter(|j| matches(&query.filter, j)).collect();
        hits.sort_by(|a, b| compare(query.sort, a, b));
        Ok(hits
            .into_iter()
            .skip(window.offset as usize)
            .take(window.take as usize)
            .map(|j| self.expand(j))
            .collect())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

/// Store whose backend is always down.
pub struct UnavailableJobStore;

#[async_trait]
impl JobStore for UnavailableJobStore {
    async fn count(&self, _filter: &JobFilter) -> Result<u64> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn fetch(&self, _query: &JobQuery, _window: Window) -> Result<Vec<JobWithCompany>> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn ping(&self) -> Result<()> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }
}
