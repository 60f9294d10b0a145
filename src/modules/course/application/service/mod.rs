mod create_course_service;
mod delete_course_service;
mod get_course_categories_service;
mod get_courses_service;
mod get_public_single_course_service;
mod get_single_course_service;
mod patch_course_service;

#[cfg(test)]
mod test_doubles;

pub use create_course_service::CreateCourseService;
pub use delete_course_service::DeleteCourseService;
pub use get_course_categories_service::GetCourseCategoriesService;
pub use get_courses_service::GetCoursesService;
pub use get_public_single_course_service::GetPublicSingleCourseService;
pub use get_single_course_service::GetSingleCourseService;
pub use patch_course_service::PatchCourseService;
