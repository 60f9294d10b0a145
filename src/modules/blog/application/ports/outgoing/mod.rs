mod blog_query;
mod blog_repository;

pub use blog_query::{BlogPostListFilter, BlogQuery, BlogQueryError};
pub use blog_repository::{
    BlogRepository, BlogRepositoryError, CreateBlogPostData, PatchBlogPostData,
};
