use async_trait::async_trait;

use crate::modules::course::application::ports::incoming::use_cases::{
    GetCourseCategoriesError, GetCourseCategoriesUseCase,
};
use crate::modules::course::application::ports::outgoing::CourseQuery;

pub struct GetCourseCategoriesService<Q>
where
    Q: CourseQuery,
{
    query: Q,
}

impl<Q> GetCourseCategoriesService<Q>
where
    Q: CourseQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetCourseCategoriesUseCase for GetCourseCategoriesService<Q>
where
    Q: CourseQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<String>, GetCourseCategoriesError> {
        Ok(self.query.published_categories().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::modules::course::application::service::test_doubles::MockCourseQuery;

    #[tokio::test]
    async fn returns_categories() {
        let service = GetCourseCategoriesService::new(MockCourseQuery {
            categories: vec!["Design".to_string()],
            ..Default::default()
        });

        assert_eq!(service.execute().await.unwrap(), vec!["Design".to_string()]);
    }
}
