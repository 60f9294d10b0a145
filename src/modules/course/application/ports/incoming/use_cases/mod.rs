mod create_course;
mod delete_course;
mod get_course_categories;
mod get_courses;
mod get_public_single_course;
mod get_single_course;
mod patch_course;

pub use create_course::{CreateCourseCommand, CreateCourseError, CreateCourseUseCase};
pub use delete_course::{DeleteCourseError, DeleteCourseUseCase};
pub use get_course_categories::{GetCourseCategoriesError, GetCourseCategoriesUseCase};
pub use get_courses::{GetCoursesError, GetCoursesUseCase};
pub use get_public_single_course::{GetPublicSingleCourseError, GetPublicSingleCourseUseCase};
pub use get_single_course::{GetSingleCourseError, GetSingleCourseUseCase};
pub use patch_course::{PatchCourseError, PatchCourseUseCase};
