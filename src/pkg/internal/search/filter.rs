use crate::prelude::{AppError, Result};

use super::{SearchRequest, present};

/// Experience range after widening. A request for `2-6` matches jobs asking
/// for anywhere between 1 and 7 years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceRange {
    pub min: i32,
    pub max: i32,
}

impl ExperienceRange {
    /// Slack added on both ends of the requested range.
    pub const SLACK: i32 = 1;

    pub fn parse(raw: &str) -> Result<Self> {
        let invalid = || AppError::InvalidExperience(raw.to_string());
        let (min, max) = raw.split_once('-').ok_or_else(invalid)?;
        let min: i32 = min.trim().parse().map_err(|_| invalid())?;
        let max: i32 = max.trim().parse().map_err(|_| invalid())?;
        Ok(ExperienceRange {
            min: min.saturating_sub(Self::SLACK),
            max: max.saturating_add(Self::SLACK),
        })
    }

    pub fn contains(&self, experience: i32) -> bool {
        self.min <= experience && experience <= self.max
    }
}

/// Conjunction of the conditions a job must satisfy. `None` means the
/// condition is not applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobFilter {
    /// Case-insensitive substring of the job location.
    pub location: Option<String>,
    /// Exact job type membership.
    pub job_types: Option<Vec<String>>,
    pub experience: Option<ExperienceRange>,
    /// Case-insensitive substring of either the title or the type.
    pub text: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JobSort {
    Newest,
    Oldest,
    TitleAsc,
    TitleDesc,
    /// Insertion order.
    #[default]
    Unsorted,
}

impl JobSort {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("Newest") => JobSort::Newest,
            Some("Oldest") => JobSort::Oldest,
            Some("A-Z") => JobSort::TitleAsc,
            Some("Z-A") => JobSort::TitleDesc,
            _ => JobSort::Unsorted,
        }
    }

    /// SQL ordering over the `jobs j` alias. Ties always fall back to id so
    /// consecutive pages never overlap.
    pub fn order_by(&self) -> &'static str {
        match self {
            JobSort::Newest => "j.created_at DESC, j.id DESC",
            JobSort::Oldest => "j.created_at ASC, j.id ASC",
            JobSort::TitleAsc => "j.job_title ASC, j.id ASC",
            JobSort::TitleDesc => "j.job_title DESC, j.id DESC",
            JobSort::Unsorted => "j.id ASC",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobQuery {
    pub filter: JobFilter,
    pub sort: JobSort,
}

/// Builds the predicate and ordering for a search. Pure; the only failure
/// is an experience range that does not parse.
pub fn build_query(req: &SearchRequest) -> Result<JobQuery> {
    let mut filter = JobFilter::default();

    if let Some(location) = present(&req.location) {
        filter.location = Some(location.to_string());
    }

    if let Some(jtype) = present(&req.jtype) {
        let types: Vec<String> = jtype
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect();
        if !types.is_empty() {
            filter.job_types = Some(types);
        }
    }

    if let Some(exp) = present(&req.exp) {
        filter.experience = Some(ExperienceRange::parse(exp)?);
    }

    if let Some(search) = present(&req.search) {
        filter.text = Some(search.to_string());
    }

    Ok(JobQuery {
        filter,
        sort: JobSort::parse(present(&req.sort)),
    })
}
