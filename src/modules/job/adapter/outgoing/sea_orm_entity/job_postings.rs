use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelBehavior, ActiveValue, Set};
use serde::{Deserialize, Serialize};

use crate::modules::job::application::domain::entities::{JobPosting, JobSector, JobType};
use crate::shared::content::PublicationStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "job_postings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub company: String,

    #[sea_orm(column_type = "Text")]
    pub location: String,

    #[sea_orm(column_type = "Double")]
    pub salary: f64,

    /// `type` on the wire
    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub job_type: String,

    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub sector: String,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub apply_start_date: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub apply_end_date: DateTimeWithTimeZone,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    #[sea_orm(column_type = "Text")]
    pub eligibility: String,

    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub status: String,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(title) = &self.title {
            self.title = Set(title.trim().to_string());
        }
        if let ActiveValue::Set(company) = &self.company {
            self.company = Set(company.trim().to_string());
        }

        Ok(self)
    }
}

impl Model {
    pub fn into_job_posting(self) -> Result<JobPosting, String> {
        Ok(JobPosting {
            id: self.id,
            job_type: self.job_type.parse::<JobType>()?,
            sector: self.sector.parse::<JobSector>()?,
            status: self.status.parse::<PublicationStatus>()?,
            title: self.title,
            company: self.company,
            location: self.location,
            salary: self.salary,
            apply_start_date: self.apply_start_date.into(),
            apply_end_date: self.apply_end_date.into(),
            description: self.description,
            eligibility: self.eligibility,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        })
    }
}
