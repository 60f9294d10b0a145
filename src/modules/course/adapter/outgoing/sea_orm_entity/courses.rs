use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelBehavior, ActiveValue, Set};
use serde::{Deserialize, Serialize};

use crate::modules::course::application::domain::entities::{Course, CourseLevel};
use crate::shared::content::PublicationStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    #[sea_orm(column_type = "Text")]
    pub content: String,

    #[sea_orm(column_type = "Text")]
    pub category: String,

    #[sea_orm(column_type = "Double")]
    pub price: f64,

    #[sea_orm(column_type = "Text")]
    pub duration: String,

    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub level: String,

    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub status: String,

    #[sea_orm(column_type = "Text")]
    pub image: String,

    #[sea_orm(column_type = "Text")]
    pub modules: String,

    #[sea_orm(column_type = "Text")]
    pub your_learning: String,

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

        Ok(self)
    }
}

impl Model {
    pub fn into_course(self) -> Result<Course, String> {
        Ok(Course {
            id: self.id,
            level: self.level.parse::<CourseLevel>()?,
            status: self.status.parse::<PublicationStatus>()?,
            title: self.title,
            description: self.description,
            content: self.content,
            category: self.category,
            price: self.price,
            duration: self.duration,
            image: self.image,
            modules: self.modules,
            your_learning: self.your_learning,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        })
    }
}
