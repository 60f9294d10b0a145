use std::sync::Arc;

use crate::modules::course::application::ports::incoming::use_cases::{
    CreateCourseUseCase, DeleteCourseUseCase, GetCourseCategoriesUseCase, GetCoursesUseCase,
    GetPublicSingleCourseUseCase, GetSingleCourseUseCase, PatchCourseUseCase,
};

#[derive(Clone)]
pub struct CourseUseCases {
    pub create: Arc<dyn CreateCourseUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetCoursesUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleCourseUseCase + Send + Sync>,
    pub get_public_single: Arc<dyn GetPublicSingleCourseUseCase + Send + Sync>,
    pub get_categories: Arc<dyn GetCourseCategoriesUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchCourseUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteCourseUseCase + Send + Sync>,
}
