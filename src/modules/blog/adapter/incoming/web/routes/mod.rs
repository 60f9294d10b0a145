mod create_blog_post;
mod delete_blog_post;
mod get_blog_categories;
mod get_blog_posts;
mod get_public_blog_posts;
mod get_public_single_blog_post;
mod get_single_blog_post;
mod patch_blog_post;

pub use create_blog_post::create_blog_post_handler;
pub use delete_blog_post::delete_blog_post_handler;
pub use get_blog_categories::get_blog_categories_handler;
pub use get_blog_posts::get_blog_posts_handler;
pub use get_public_blog_posts::get_public_blog_posts_handler;
pub use get_public_single_blog_post::get_public_single_blog_post_handler;
pub use get_single_blog_post::get_single_blog_post_handler;
pub use patch_blog_post::patch_blog_post_handler;
