use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Public view of the company owning a job. The table's password column
/// has no field here, so it cannot leak into a response.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub contact: Option<String>,
    pub location: Option<String>,
    pub about: Option<String>,
    pub profile_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JobWithCompany {
    pub id: i32,
    pub job_title: String,
    pub job_type: String,
    pub location: String,
    pub salary: Option<i32>,
    pub vacancies: Option<i32>,
    pub experience: i32,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub company: CompanyProfile,
}

/// Flat row of `jobs` joined with `companies`, company columns prefixed.
#[derive(Debug, FromRow)]
pub struct JobRow {
    pub id: i32,
    pub job_title: String,
    pub job_type: String,
    pub location: String,
    pub salary: Option<i32>,
    pub vacancies: Option<i32>,
    pub experience: i32,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub company_id: i32,
    pub company_name: String,
    pub company_email: String,
    pub company_contact: Option<String>,
    pub company_location: Option<String>,
    pub company_about: Option<String>,
    pub company_profile_url: Option<String>,
}

impl From<JobRow> for JobWithCompany {
    fn from(row: JobRow) -> Self {
        JobWithCompany {
            id: row.id,
            job_title: row.job_title,
            job_type: row.job_type,
            location: row.location,
            salary: row.salary,
            vacancies: row.vacancies,
            experience: row.experience,
            description: row.description,
            requirements: row.requirements,
            created_at: row.created_at,
            updated_at: row.updated_at,
            company: CompanyProfile {
                id: row.company_id,
                name: row.company_name,
                email: row.company_email,
                contact: row.company_contact,
                location: row.company_location,
                about: row.company_about,
                profile_url: row.company_profile_url,
            },
        }
    }
}
