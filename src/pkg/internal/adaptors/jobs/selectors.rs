use sqlx::{PgConnection, Postgres, QueryBuilder};

use crate::{
    pkg::internal::{
        adaptors::jobs::spec::{JobRow, JobWithCompany},
        search::{
            filter::{JobFilter, JobQuery},
            pagination::Window,
        },
    },
    prelude::Result,
};

const JOB_COLUMNS: &str = "j.id, j.job_title, j.job_type, j.location, j.salary, \
     j.vacancies, j.experience, j.description, j.requirements, j.created_at, j.updated_at, \
     c.id AS company_id, c.name AS company_name, c.email AS company_email, \
     c.contact AS company_contact, c.location AS company_location, \
     c.about AS company_about, c.profile_url AS company_profile_url";

pub struct JobSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> JobSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        JobSelector { pool }
    }

    pub async fn count(&mut self, filter: &JobFilter) -> Result<u64> {
        let total: i64 = count_query(filter)
            .build_query_scalar()
            .fetch_one(&mut *self.pool)
            .await?;
        Ok(u64::try_from(total).unwrap_or_default())
    }

    pub async fn search(
        &mut self,
        query: &JobQuery,
        window: Window,
    ) -> Result<Vec<JobWithCompany>> {
        let rows = search_query(query, window)
            .build_query_as::<JobRow>()
            .fetch_all(&mut *self.pool)
            .await?;
        Ok(rows.into_iter().map(JobWithCompany::from).collect())
    }
}

pub(crate) fn count_query(filter: &JobFilter) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new("SELECT COUNT(*) FROM jobs j");
    push_filter(&mut qb, filter);
    qb
}

pub(crate) fn search_query(query: &JobQuery, window: Window) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new("SELECT ");
    qb.push(JOB_COLUMNS)
        .push(" FROM jobs j INNER JOIN companies c ON c.id = j.company_id");
    push_filter(&mut qb, &query.filter);
    qb.push(" ORDER BY ").push(query.sort.order_by());
    qb.push(" LIMIT ")
        .push_bind(clamp(window.take))
        .push(" OFFSET ")
        .push_bind(clamp(window.offset));
    qb
}

fn clamp(v: u64) -> i64 {
    i64::try_from(v).unwrap_or(i64::MAX)
}

fn push_filter(qb: &mut QueryBuilder<'static, Postgres>, filter: &JobFilter) {
    let mut sep = " WHERE ";
    if let Some(location) = &filter.location {
        qb.push(sep).push("j.location ILIKE ").push_bind(contains_pattern(location));
        sep = " AND ";
    }
    if let Some(types) = &filter.job_types {
        qb.push(sep).push("j.job_type = ANY(").push_bind(types.clone()).push(")");
        sep = " AND ";
    }
    if let Some(range) = &filter.experience {
        qb.push(sep)
            .push("j.experience BETWEEN ")
            .push_bind(range.min)
            .push(" AND ")
            .push_bind(range.max);
        sep = " AND ";
    }
    if let Some(text) = &filter.text {
        let pattern = contains_pattern(text);
        qb.push(sep)
            .push("(j.job_title ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR j.job_type ILIKE ")
            .push_bind(pattern)
            .push(")");
    }
}

/// `ILIKE` pattern matching `needle` literally anywhere in the column.
pub(crate) fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for ch in needle.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
