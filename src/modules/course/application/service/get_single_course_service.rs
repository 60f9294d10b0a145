use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::course::application::domain::entities::Course;
use crate::modules::course::application::ports::incoming::use_cases::{
    GetSingleCourseError, GetSingleCourseUseCase,
};
use crate::modules::course::application::ports::outgoing::CourseQuery;

pub struct GetSingleCourseService<Q>
where
    Q: CourseQuery,
{
    query: Q,
}

impl<Q> GetSingleCourseService<Q>
where
    Q: CourseQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSingleCourseUseCase for GetSingleCourseService<Q>
where
    Q: CourseQuery + Send + Sync,
{
    async fn execute(&self, course_id: Uuid) -> Result<Course, GetSingleCourseError> {
        Ok(self.query.get_by_id(course_id).await?)
    }
}
