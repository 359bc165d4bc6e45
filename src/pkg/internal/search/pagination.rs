use std::num::IntErrorKind;

use serde::{Deserialize, Serialize};

use crate::{
    pkg::internal::adaptors::jobs::{JobStore, spec::JobWithCompany},
    prelude::Result,
};

use super::{SearchRequest, filter::JobQuery, present};

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 39;

/// How a page number maps onto rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaginationMode {
    /// Page N returns rows `[(N-1)*limit, N*limit)`.
    #[default]
    Windowed,
    /// Page N returns the first `N*limit` rows. Kept for clients built
    /// against the old behavior, where later pages repeat earlier ones.
    Cumulative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        PageRequest {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    /// Missing, non-numeric, zero or negative values fall back to the
    /// defaults. Values too large to represent saturate.
    pub fn from_request(req: &SearchRequest) -> Self {
        PageRequest {
            page: positive(present(&req.page)).unwrap_or(DEFAULT_PAGE),
            limit: positive(present(&req.limit)).unwrap_or(DEFAULT_LIMIT),
        }
    }

    pub fn window(&self, mode: PaginationMode) -> Window {
        let page = self.page.max(1);
        let limit = self.limit.max(1);
        match mode {
            PaginationMode::Windowed => Window {
                offset: (page - 1).saturating_mul(limit),
                take: limit,
            },
            PaginationMode::Cumulative => Window {
                offset: 0,
                take: page.saturating_mul(limit),
            },
        }
    }
}

fn positive(raw: Option<&str>) -> Option<u64> {
    let parsed = match raw?.parse::<u64>() {
        Ok(v) => v,
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => u64::MAX,
        Err(_) => return None,
    };
    Some(parsed).filter(|v| *v > 0)
}

/// Rows to skip and rows to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub offset: u64,
    pub take: u64,
}

pub fn page_count(total: u64, limit: u64) -> u64 {
    total.div_ceil(limit.max(1))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPage {
    pub total_jobs: u64,
    pub data: Vec<JobWithCompany>,
    pub page: u64,
    pub num_of_page: u64,
}

/// Counts everything the query matches, then reads the requested page.
/// Store failures surface unchanged; nothing is retried.
pub async fn paginate(
    store: &dyn JobStore,
    query: &JobQuery,
    page: PageRequest,
    mode: PaginationMode,
) -> Result<JobPage> {
    let total_jobs = store.count(&query.filter).await?;
    let window = page.window(mode);
    tracing::debug!(
        total_jobs,
        offset = window.offset,
        take = window.take,
        "fetching page {} of jobs",
        page.page
    );
    let data = store.fetch(query, window).await?;
    Ok(JobPage {
        total_jobs,
        data,
        page: page.page,
        num_of_page: page_count(total_jobs, page.limit),
    })
}
