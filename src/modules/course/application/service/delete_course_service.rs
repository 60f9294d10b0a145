use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::course::application::ports::incoming::use_cases::{
    DeleteCourseError, DeleteCourseUseCase,
};
use crate::modules::course::application::ports::outgoing::CourseRepository;

pub struct DeleteCourseService<R>
where
    R: CourseRepository,
{
    course_repository: R,
}

impl<R> DeleteCourseService<R>
where
    R: CourseRepository,
{
    pub fn new(course_repository: R) -> Self {
        Self { course_repository }
    }
}

#[async_trait]
impl<R> DeleteCourseUseCase for DeleteCourseService<R>
where
    R: CourseRepository + Send + Sync,
{
    async fn execute(&self, course_id: Uuid) -> Result<(), DeleteCourseError> {
        self.course_repository.delete_course(course_id).await?;
        info!(%course_id, "Course deleted");
        Ok(())
    }
}
