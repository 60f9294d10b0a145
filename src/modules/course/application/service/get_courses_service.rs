use async_trait::async_trait;

use crate::modules::course::application::domain::entities::CourseSummary;
use crate::modules::course::application::ports::incoming::use_cases::{
    GetCoursesError, GetCoursesUseCase,
};
use crate::modules::course::application::ports::outgoing::{CourseListFilter, CourseQuery};
use crate::shared::content::{PageRequest, PageResult};

pub struct GetCoursesService<Q>
where
    Q: CourseQuery,
{
    query: Q,
}

impl<Q> GetCoursesService<Q>
where
    Q: CourseQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetCoursesUseCase for GetCoursesService<Q>
where
    Q: CourseQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: CourseListFilter,
        page: PageRequest,
    ) -> Result<PageResult<CourseSummary>, GetCoursesError> {
        Ok(self.query.list(filter, page).await?)
    }
}
