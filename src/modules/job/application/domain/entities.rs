use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::shared::content::PublicationStatus;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    #[default]
    FullTime,
    Internship,
}

impl JobType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::FullTime => "full-time",
            JobType::Internship => "internship",
        }
    }
}

impl FromStr for JobType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full-time" => Ok(JobType::FullTime),
            "internship" => Ok(JobType::Internship),
            _ => Err(format!("Unknown job type: {}", s)),
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobSector {
    #[default]
    Government,
    Private,
}

impl JobSector {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobSector::Government => "government",
            JobSector::Private => "private",
        }
    }
}

impl FromStr for JobSector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "government" => Ok(JobSector::Government),
            "private" => Ok(JobSector::Private),
            _ => Err(format!("Unknown job sector: {}", s)),
        }
    }
}

impl fmt::Display for JobSector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: f64,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub sector: JobSector,
    pub apply_start_date: DateTime<Utc>,
    pub apply_end_date: DateTime<Utc>,
    pub description: String,
    pub eligibility: String,
    pub status: PublicationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl JobPosting {
    /// True while `now` lies inside the application window (inclusive).
    pub fn is_open_at(&self, now: DateTime<Utc>) -> bool {
        self.apply_start_date <= now && now <= self.apply_end_date
    }
}

/// Listing card without the long description and eligibility text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPostingSummary {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: f64,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub sector: JobSector,
    pub apply_start_date: DateTime<Utc>,
    pub apply_end_date: DateTime<Utc>,
    pub status: PublicationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<JobPosting> for JobPostingSummary {
    fn from(job: JobPosting) -> Self {
        Self {
            id: job.id,
            title: job.title,
            company: job.company,
            location: job.location,
            salary: job.salary,
            job_type: job.job_type,
            sector: job.sector,
            apply_start_date: job.apply_start_date,
            apply_end_date: job.apply_end_date,
            status: job.status,
            created_at: job.created_at,
            updated_at: job.updated_at,
        }
    }
}
