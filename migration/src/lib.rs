pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_updated_at_function;
mod m20260301_000002_create_table_blog_posts;
mod m20260301_000003_create_table_courses;
mod m20260301_000004_create_table_job_postings;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_updated_at_function::Migration),
            Box::new(m20260301_000002_create_table_blog_posts::Migration),
            Box::new(m20260301_000003_create_table_courses::Migration),
            Box::new(m20260301_000004_create_table_job_postings::Migration),
        ]
    }
}
