use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::course::application::domain::entities::Course;
use crate::modules::course::application::ports::incoming::use_cases::{
    GetPublicSingleCourseError, GetPublicSingleCourseUseCase,
};
use crate::modules::course::application::ports::outgoing::CourseQuery;

pub struct GetPublicSingleCourseService<Q>
where
    Q: CourseQuery,
{
    query: Q,
}

impl<Q> GetPublicSingleCourseService<Q>
where
    Q: CourseQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetPublicSingleCourseUseCase for GetPublicSingleCourseService<Q>
where
    Q: CourseQuery + Send + Sync,
{
    async fn execute(&self, course_id: Uuid) -> Result<Course, GetPublicSingleCourseError> {
        Ok(self.query.get_published_by_id(course_id).await?)
    }
}
