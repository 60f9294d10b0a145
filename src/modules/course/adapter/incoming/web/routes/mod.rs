mod create_course;
mod delete_course;
mod get_course_categories;
mod get_courses;
mod get_public_courses;
mod get_public_single_course;
mod get_single_course;
mod patch_course;

pub use create_course::create_course_handler;
pub use delete_course::delete_course_handler;
pub use get_course_categories::get_course_categories_handler;
pub use get_courses::get_courses_handler;
pub use get_public_courses::get_public_courses_handler;
pub use get_public_single_course::get_public_single_course_handler;
pub use get_single_course::get_single_course_handler;
pub use patch_course::patch_course_handler;
