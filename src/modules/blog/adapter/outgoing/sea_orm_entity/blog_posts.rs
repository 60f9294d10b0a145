use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelBehavior, ActiveValue, Set};
use serde::{Deserialize, Serialize};

use crate::modules::blog::application::domain::entities::{BlogPost, BlogPostSummary};
use crate::shared::content::PublicationStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "blog_posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub content: String,

    #[sea_orm(column_type = "Text")]
    pub excerpt: String,

    #[sea_orm(column_type = "Text")]
    pub author: String,

    #[sea_orm(column_type = "Text")]
    pub category: String,

    // JSONB array of strings
    #[sea_orm(column_type = "JsonBinary")]
    pub tags: Json,

    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub status: String,

    #[sea_orm(column_type = "Text")]
    pub thumbnail: String,

    #[sea_orm(column_type = "Text")]
    pub read_time: String,

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
    /// Fails when the stored tags or status do not decode.
    pub fn into_blog_post(self) -> Result<BlogPost, String> {
        Ok(BlogPost {
            id: self.id,
            tags: serde_json::from_value(self.tags).map_err(|e| e.to_string())?,
            status: self.status.parse::<PublicationStatus>()?,
            title: self.title,
            content: self.content,
            excerpt: self.excerpt,
            author: self.author,
            category: self.category,
            thumbnail: self.thumbnail,
            read_time: self.read_time,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        })
    }

    pub fn into_summary(self) -> Result<BlogPostSummary, String> {
        self.into_blog_post().map(BlogPostSummary::from)
    }
}
