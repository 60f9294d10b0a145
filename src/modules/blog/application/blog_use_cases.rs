use std::sync::Arc;

use crate::modules::blog::application::ports::incoming::use_cases::{
    CreateBlogPostUseCase, DeleteBlogPostUseCase, GetBlogCategoriesUseCase, GetBlogPostsUseCase,
    GetPublicSingleBlogPostUseCase, GetSingleBlogPostUseCase, PatchBlogPostUseCase,
};

#[derive(Clone)]
pub struct BlogUseCases {
    pub create: Arc<dyn CreateBlogPostUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetBlogPostsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleBlogPostUseCase + Send + Sync>,
    pub get_public_single: Arc<dyn GetPublicSingleBlogPostUseCase + Send + Sync>,
    pub get_categories: Arc<dyn GetBlogCategoriesUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchBlogPostUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteBlogPostUseCase + Send + Sync>,
}
