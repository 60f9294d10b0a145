use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::course::application::domain::entities::Course;
use crate::modules::course::application::ports::incoming::use_cases::{
    PatchCourseError, PatchCourseUseCase,
};
use crate::modules::course::application::ports::outgoing::{CourseRepository, PatchCourseData};
use crate::shared::content::InvalidField;

pub struct PatchCourseService<R>
where
    R: CourseRepository,
{
    course_repository: R,
}

impl<R> PatchCourseService<R>
where
    R: CourseRepository,
{
    pub fn new(course_repository: R) -> Self {
        Self { course_repository }
    }
}

fn sanitize(data: PatchCourseData) -> Result<PatchCourseData, InvalidField> {
    Ok(PatchCourseData {
        title: data.title.require_text("title")?,
        description: data.description.require_text("description")?,
        content: data.content.require_text("content")?,
        category: data.category.require_text("category")?,
        price: data.price.require_present("price")?,
        duration: data.duration.require_text("duration")?,
        level: data.level.require_present("level")?,
        status: data.status.require_present("status")?,
        image: data.image.require_text("image")?,
        modules: data.modules.require_text("modules")?,
        your_learning: data.your_learning.require_text("yourLearning")?,
    })
}

#[async_trait]
impl<R> PatchCourseUseCase for PatchCourseService<R>
where
    R: CourseRepository + Send + Sync,
{
    async fn execute(
        &self,
        course_id: Uuid,
        data: PatchCourseData,
    ) -> Result<Course, PatchCourseError> {
        let data = sanitize(data)?;

        let course = self.course_repository.patch_course(course_id, data).await?;
        info!(%course_id, "Course updated");

        Ok(course)
    }
}
