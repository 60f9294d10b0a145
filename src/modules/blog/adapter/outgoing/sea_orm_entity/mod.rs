pub mod blog_posts;
