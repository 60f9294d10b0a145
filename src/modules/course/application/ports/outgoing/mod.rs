mod course_query;
mod course_repository;

pub use course_query::{CourseListFilter, CourseQuery, CourseQueryError};
pub use course_repository::{
    CourseRepository, CourseRepositoryError, CreateCourseData, PatchCourseData,
};
