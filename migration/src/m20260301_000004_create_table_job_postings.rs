use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create job_postings table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(JobPostings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(JobPostings::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(JobPostings::Title).text().not_null())
                    .col(ColumnDef::new(JobPostings::Company).text().not_null())
                    .col(ColumnDef::new(JobPostings::Location).text().not_null())
                    .col(ColumnDef::new(JobPostings::Salary).double().not_null())
                    .col(ColumnDef::new(JobPostings::JobType).string_len(20).not_null())
                    .col(ColumnDef::new(JobPostings::Sector).string_len(20).not_null())
                    .col(
                        ColumnDef::new(JobPostings::ApplyStartDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(JobPostings::ApplyEndDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(JobPostings::Description).text().not_null())
                    .col(ColumnDef::new(JobPostings::Eligibility).text().not_null())
                    .col(
                        ColumnDef::new(JobPostings::Status)
                            .string_len(20)
                            .not_null()
                            .default("draft"),
                    )
                    .col(
                        ColumnDef::new(JobPostings::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(JobPostings::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Constraints & indexes
        // =====================================================

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE job_postings
                ADD CONSTRAINT chk_job_postings_job_type
                CHECK (job_type IN ('full-time', 'internship'));
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE job_postings
                ADD CONSTRAINT chk_job_postings_sector
                CHECK (sector IN ('government', 'private'));
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE job_postings
                ADD CONSTRAINT chk_job_postings_status
                CHECK (status IN ('draft', 'published'));
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_job_postings_status_created_at
                ON job_postings (status, created_at DESC);
                "#,
            )
            .await?;

        // "Open now" filter scans the application window
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_job_postings_apply_window
                ON job_postings (apply_start_date, apply_end_date);
                "#,
            )
            .await?;

        // =====================================================
        // updated_at trigger
        // =====================================================

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_job_postings_updated_at
                BEFORE UPDATE ON job_postings
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_job_postings_updated_at ON job_postings;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_job_postings_status_created_at;
                DROP INDEX IF EXISTS idx_job_postings_apply_window;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(JobPostings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum JobPostings {
    Table,
    Id,
    Title,
    Company,
    Location,
    Salary,
    JobType,
    Sector,
    ApplyStartDate,
    ApplyEndDate,
    Description,
    Eligibility,
    Status,
    CreatedAt,
    UpdatedAt,
}
