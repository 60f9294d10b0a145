//! Configurable course ports shared by the service tests.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::modules::course::application::domain::entities::{Course, CourseLevel, CourseSummary};
use crate::modules::course::application::ports::outgoing::{
    CourseListFilter, CourseQuery, CourseQueryError, CourseRepository, CourseRepositoryError,
    CreateCourseData, PatchCourseData,
};
use crate::shared::content::{PageRequest, PageResult, PublicationStatus};

pub fn sample_course(id: Uuid) -> Course {
    Course {
        id,
        title: "Rust for Beginners".to_string(),
        description: "Start here".to_string(),
        content: "Week 1".to_string(),
        category: "Programming".to_string(),
        price: 49.5,
        duration: "6 weeks".to_string(),
        level: CourseLevel::Beginner,
        status: PublicationStatus::Published,
        image: "https://cdn.example.com/c.png".to_string(),
        modules: "Ownership, Traits".to_string(),
        your_learning: "Write safe code".to_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/* --------------------------------------------------
 * Mock CourseRepository
 * -------------------------------------------------- */

#[derive(Clone, Default)]
pub struct MockCourseRepo {
    pub fail_with: Option<CourseRepositoryError>,
    pub created: Arc<Mutex<Option<CreateCourseData>>>,
    pub patched: Arc<Mutex<Option<PatchCourseData>>>,
}

impl MockCourseRepo {
    pub fn failing(err: CourseRepositoryError) -> Self {
        Self {
            fail_with: Some(err),
            ..Default::default()
        }
    }

    fn check(&self) -> Result<(), CourseRepositoryError> {
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CourseRepository for MockCourseRepo {
    async fn create_course(&self, data: CreateCourseData) -> Result<Course, CourseRepositoryError> {
        *self.created.lock().unwrap() = Some(data.clone());
        self.check()?;

        let now = Utc::now();
        Ok(Course {
            id: Uuid::new_v4(),
            title: data.title,
            description: data.description,
            content: data.content,
            category: data.category,
            price: data.price,
            duration: data.duration,
            level: data.level,
            status: data.status,
            image: data.image,
            modules: data.modules,
            your_learning: data.your_learning,
            created_at: now,
            updated_at: now,
        })
    }

    async fn patch_course(
        &self,
        course_id: Uuid,
        data: PatchCourseData,
    ) -> Result<Course, CourseRepositoryError> {
        *self.patched.lock().unwrap() = Some(data);
        self.check()?;
        Ok(sample_course(course_id))
    }

    async fn delete_course(&self, _course_id: Uuid) -> Result<(), CourseRepositoryError> {
        self.check()
    }
}

/* --------------------------------------------------
 * Mock CourseQuery
 * -------------------------------------------------- */

#[derive(Clone, Default)]
pub struct MockCourseQuery {
    pub fail_with: Option<CourseQueryError>,
    pub published_only: bool,
    pub categories: Vec<String>,
    pub seen_filter: Arc<Mutex<Option<CourseListFilter>>>,
}

impl MockCourseQuery {
    pub fn failing(err: CourseQueryError) -> Self {
        Self {
            fail_with: Some(err),
            ..Default::default()
        }
    }

    fn check(&self) -> Result<(), CourseQueryError> {
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CourseQuery for MockCourseQuery {
    async fn get_by_id(&self, course_id: Uuid) -> Result<Course, CourseQueryError> {
        self.check()?;
        let mut course = sample_course(course_id);
        course.status = PublicationStatus::Draft;
        Ok(course)
    }

    async fn get_published_by_id(&self, course_id: Uuid) -> Result<Course, CourseQueryError> {
        self.check()?;
        if !self.published_only {
            return Err(CourseQueryError::NotFound);
        }
        Ok(sample_course(course_id))
    }

    async fn list(
        &self,
        filter: CourseListFilter,
        page: PageRequest,
    ) -> Result<PageResult<CourseSummary>, CourseQueryError> {
        *self.seen_filter.lock().unwrap() = Some(filter);
        self.check()?;
        Ok(PageResult {
            items: vec![sample_course(Uuid::new_v4()).into()],
            page: page.page,
            per_page: page.per_page,
            total: 1,
        })
    }

    async fn published_categories(&self) -> Result<Vec<String>, CourseQueryError> {
        self.check()?;
        Ok(self.categories.clone())
    }
}
