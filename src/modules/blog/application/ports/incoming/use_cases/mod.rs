mod create_blog_post;
mod delete_blog_post;
mod get_blog_categories;
mod get_blog_posts;
mod get_public_single_blog_post;
mod get_single_blog_post;
mod patch_blog_post;

pub use create_blog_post::{CreateBlogPostCommand, CreateBlogPostError, CreateBlogPostUseCase};
pub use delete_blog_post::{DeleteBlogPostError, DeleteBlogPostUseCase};
pub use get_blog_categories::{GetBlogCategoriesError, GetBlogCategoriesUseCase};
pub use get_blog_posts::{GetBlogPostsError, GetBlogPostsUseCase};
pub use get_public_single_blog_post::{
    GetPublicSingleBlogPostError, GetPublicSingleBlogPostUseCase,
};
pub use get_single_blog_post::{GetSingleBlogPostError, GetSingleBlogPostUseCase};
pub use patch_blog_post::{PatchBlogPostError, PatchBlogPostUseCase};
