use async_trait::async_trait;
use tracing::info;

use crate::modules::course::application::domain::entities::Course;
use crate::modules::course::application::ports::incoming::use_cases::{
    CreateCourseCommand, CreateCourseError, CreateCourseUseCase,
};
use crate::modules::course::application::ports::outgoing::{CourseRepository, CreateCourseData};
use crate::shared::content::RequiredFields;

pub struct CreateCourseService<R>
where
    R: CourseRepository,
{
    course_repository: R,
}

impl<R> CreateCourseService<R>
where
    R: CourseRepository,
{
    pub fn new(course_repository: R) -> Self {
        Self { course_repository }
    }
}

fn validate(command: CreateCourseCommand) -> Result<CreateCourseData, CreateCourseError> {
    let mut required = RequiredFields::new();

    let data = CreateCourseData {
        title: required.text("title", command.title),
        description: required.text("description", command.description),
        content: required.text("content", command.content),
        category: required.text("category", command.category),
        price: required.value("price", command.price),
        duration: required.text("duration", command.duration),
        level: required.value("level", command.level),
        status: command.status.unwrap_or_default(),
        image: required.text("image", command.image),
        modules: required.text("modules", command.modules),
        your_learning: required.text("yourLearning", command.your_learning),
    };

    required.finish().map_err(CreateCourseError::MissingFields)?;

    Ok(data)
}

#[async_trait]
impl<R> CreateCourseUseCase for CreateCourseService<R>
where
    R: CourseRepository + Send + Sync,
{
    async fn execute(&self, command: CreateCourseCommand) -> Result<Course, CreateCourseError> {
        let data = validate(command)?;

        let course = self.course_repository.create_course(data).await?;
        info!(course_id = %course.id, level = %course.level, "Course created");

        Ok(course)
    }
}
