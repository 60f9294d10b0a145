use async_trait::async_trait;
use chrono::Utc;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::course::adapter::outgoing::sea_orm_entity::courses::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::course::application::domain::entities::Course;
use crate::modules::course::application::ports::outgoing::{
    CourseRepository, CourseRepositoryError, CreateCourseData, PatchCourseData,
};
use crate::shared::content::PatchField;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct CourseRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CourseRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CourseRepository for CourseRepositoryPostgres {
    async fn create_course(&self, data: CreateCourseData) -> Result<Course, CourseRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            description: Set(data.description),
            content: Set(data.content),
            category: Set(data.category),
            price: Set(data.price),
            duration: Set(data.duration),
            level: Set(data.level.as_str().to_string()),
            status: Set(data.status.as_str().to_string()),
            image: Set(data.image),
            modules: Set(data.modules),
            your_learning: Set(data.your_learning),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        model_to_course(result)
    }

    async fn patch_course(
        &self,
        course_id: Uuid,
        data: PatchCourseData,
    ) -> Result<Course, CourseRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(title) = data.title {
            model.title = Set(title);
        }
        if let PatchField::Value(description) = data.description {
            model.description = Set(description);
        }
        if let PatchField::Value(content) = data.content {
            model.content = Set(content);
        }
        if let PatchField::Value(category) = data.category {
            model.category = Set(category);
        }
        if let PatchField::Value(price) = data.price {
            model.price = Set(price);
        }
        if let PatchField::Value(duration) = data.duration {
            model.duration = Set(duration);
        }
        if let PatchField::Value(level) = data.level {
            model.level = Set(level.as_str().to_string());
        }
        if let PatchField::Value(status) = data.status {
            model.status = Set(status.as_str().to_string());
        }
        if let PatchField::Value(image) = data.image {
            model.image = Set(image);
        }
        if let PatchField::Value(modules) = data.modules {
            model.modules = Set(modules);
        }
        if let PatchField::Value(your_learning) = data.your_learning {
            model.your_learning = Set(your_learning);
        }

        let has_changes = model.title.is_set()
            || model.description.is_set()
            || model.content.is_set()
            || model.category.is_set()
            || model.price.is_set()
            || model.duration.is_set()
            || model.level.is_set()
            || model.status.is_set()
            || model.image.is_set()
            || model.modules.is_set()
            || model.your_learning.is_set();

        if !has_changes {
            let result = Entity::find_by_id(course_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(CourseRepositoryError::NotFound)?;

            return model_to_course(result);
        }

        model.updated_at = Set(Utc::now().fixed_offset());

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(course_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(CourseRepositoryError::NotFound)?;

        model_to_course(result)
    }

    async fn delete_course(&self, course_id: Uuid) -> Result<(), CourseRepositoryError> {
        let result = Entity::delete_many()
            .filter(Column::Id.eq(course_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(CourseRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_course(model: courses::Model) -> Result<Course, CourseRepositoryError> {
    model
        .into_course()
        .map_err(CourseRepositoryError::SerializationError)
}

fn map_db_err(e: DbErr) -> CourseRepositoryError {
    CourseRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
