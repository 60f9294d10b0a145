mod create_blog_post_service;
mod delete_blog_post_service;
mod get_blog_categories_service;
mod get_blog_posts_service;
mod get_public_single_blog_post_service;
mod get_single_blog_post_service;
mod patch_blog_post_service;

pub use create_blog_post_service::CreateBlogPostService;
pub use delete_blog_post_service::DeleteBlogPostService;
pub use get_blog_categories_service::GetBlogCategoriesService;
pub use get_blog_posts_service::GetBlogPostsService;
pub use get_public_single_blog_post_service::GetPublicSingleBlogPostService;
pub use get_single_blog_post_service::GetSingleBlogPostService;
pub use patch_blog_post_service::PatchBlogPostService;
