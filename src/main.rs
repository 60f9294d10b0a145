pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

// Test helpers module - only compiled with feature flag
#[cfg(feature = "test-helpers")]
mod test_helpers;

#[cfg(test)]
mod tests;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use deadpool_redis::{Config, Runtime};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::openapi::ApiDoc;
use crate::config::{AdminCredential, AppConfig, ContactConfig, RunEnv, SmtpTransportConfig};
use crate::modules::admin::adapter::incoming::web::session_cookie::SessionCookieConfig;
use crate::modules::admin::adapter::outgoing::jwt::JwtSessionService;
use crate::modules::admin::adapter::outgoing::revoked_session_redis::RevokedSessionRedis;
use crate::modules::admin::adapter::outgoing::security::Argon2Hasher;
use crate::modules::admin::application::admin_use_cases::AdminUseCases;
use crate::modules::admin::application::ports::outgoing::PasswordHasher;
use crate::modules::admin::application::service::{
    LoginAdminService, LogoutAdminService, VerifyAdminSessionService,
};
use crate::modules::blog::adapter::outgoing::{BlogQueryPostgres, BlogRepositoryPostgres};
use crate::modules::blog::application::blog_use_cases::BlogUseCases;
use crate::modules::blog::application::service::{
    CreateBlogPostService, DeleteBlogPostService, GetBlogCategoriesService, GetBlogPostsService,
    GetPublicSingleBlogPostService, GetSingleBlogPostService, PatchBlogPostService,
};
use crate::modules::contact::application::contact_use_cases::ContactUseCases;
use crate::modules::contact::application::service::{ContactInbox, SubmitContactService};
use crate::modules::course::adapter::outgoing::{CourseQueryPostgres, CourseRepositoryPostgres};
use crate::modules::course::application::course_use_cases::CourseUseCases;
use crate::modules::course::application::service::{
    CreateCourseService, DeleteCourseService, GetCourseCategoriesService, GetCoursesService,
    GetPublicSingleCourseService, GetSingleCourseService, PatchCourseService,
};
use crate::modules::email::adapter::outgoing::smtp_sender::SmtpEmailSender;
use crate::modules::job::adapter::outgoing::{JobQueryPostgres, JobRepositoryPostgres};
use crate::modules::job::application::job_use_cases::JobUseCases;
use crate::modules::job::application::service::{
    CreateJobService, DeleteJobService, GetJobsService, GetPublicSingleJobService,
    GetSingleJobService, PatchJobService,
};
use crate::shared::api::{custom_json_config, custom_query_config};

#[derive(Clone)]
pub struct AppState {
    pub admin: AdminUseCases,
    pub admin_cookie: SessionCookieConfig,
    pub blog: BlogUseCases,
    pub course: CourseUseCases,
    pub job: JobUseCases,
    pub contact: ContactUseCases,
}

#[cfg(not(tarpaulin_include))]
fn blog_use_cases(db: &Arc<DatabaseConnection>) -> BlogUseCases {
    BlogUseCases {
        create: Arc::new(CreateBlogPostService::new(BlogRepositoryPostgres::new(
            Arc::clone(db),
        ))),
        get_list: Arc::new(GetBlogPostsService::new(BlogQueryPostgres::new(Arc::clone(
            db,
        )))),
        get_single: Arc::new(GetSingleBlogPostService::new(BlogQueryPostgres::new(
            Arc::clone(db),
        ))),
        get_public_single: Arc::new(GetPublicSingleBlogPostService::new(
            BlogQueryPostgres::new(Arc::clone(db)),
        )),
        get_categories: Arc::new(GetBlogCategoriesService::new(BlogQueryPostgres::new(
            Arc::clone(db),
        ))),
        patch: Arc::new(PatchBlogPostService::new(BlogRepositoryPostgres::new(
            Arc::clone(db),
        ))),
        delete: Arc::new(DeleteBlogPostService::new(BlogRepositoryPostgres::new(
            Arc::clone(db),
        ))),
    }
}

#[cfg(not(tarpaulin_include))]
fn course_use_cases(db: &Arc<DatabaseConnection>) -> CourseUseCases {
    CourseUseCases {
        create: Arc::new(CreateCourseService::new(CourseRepositoryPostgres::new(
            Arc::clone(db),
        ))),
        get_list: Arc::new(GetCoursesService::new(CourseQueryPostgres::new(Arc::clone(
            db,
        )))),
        get_single: Arc::new(GetSingleCourseService::new(CourseQueryPostgres::new(
            Arc::clone(db),
        ))),
        get_public_single: Arc::new(GetPublicSingleCourseService::new(
            CourseQueryPostgres::new(Arc::clone(db)),
        )),
        get_categories: Arc::new(GetCourseCategoriesService::new(CourseQueryPostgres::new(
            Arc::clone(db),
        ))),
        patch: Arc::new(PatchCourseService::new(CourseRepositoryPostgres::new(
            Arc::clone(db),
        ))),
        delete: Arc::new(DeleteCourseService::new(CourseRepositoryPostgres::new(
            Arc::clone(db),
        ))),
    }
}

#[cfg(not(tarpaulin_include))]
fn job_use_cases(db: &Arc<DatabaseConnection>) -> JobUseCases {
    JobUseCases {
        create: Arc::new(CreateJobService::new(JobRepositoryPostgres::new(
            Arc::clone(db),
        ))),
        get_list: Arc::new(GetJobsService::new(JobQueryPostgres::new(Arc::clone(db)))),
        get_single: Arc::new(GetSingleJobService::new(JobQueryPostgres::new(
            Arc::clone(db),
        ))),
        get_public_single: Arc::new(GetPublicSingleJobService::new(JobQueryPostgres::new(
            Arc::clone(db),
        ))),
        patch: Arc::new(PatchJobService::new(JobRepositoryPostgres::new(
            Arc::clone(db),
        ))),
        delete: Arc::new(DeleteJobService::new(JobRepositoryPostgres::new(
            Arc::clone(db),
        ))),
    }
}

#[cfg(not(tarpaulin_include))]
fn contact_inbox(contact: Option<&ContactConfig>) -> anyhow::Result<Option<ContactInbox>> {
    let Some(contact) = contact else {
        warn!("CONTACT_INBOX not set: contact submissions will only be logged");
        return Ok(None);
    };

    let sender = match &contact.transport {
        SmtpTransportConfig::Relay {
            server,
            username,
            password,
        } => SmtpEmailSender::new(server, username, password, &contact.from_email),
        SmtpTransportConfig::Local { host, port } => {
            SmtpEmailSender::new_local(host, *port, &contact.from_email)
        }
    }
    .context("Failed to set up SMTP transport")?;

    Ok(Some(ContactInbox {
        sender: Arc::new(sender),
        address: contact.inbox.clone(),
    }))
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env().context("Invalid configuration")?;

    // 🚨 SAFETY GUARD: Prevent test-helpers in production
    #[cfg(feature = "test-helpers")]
    {
        if config.env == RunEnv::Production {
            anyhow::bail!("test-helpers feature enabled in production environment");
        }
        warn!(
            "⚠️  Test helper routes are ENABLED for environment: {}",
            config.env.as_str()
        );
    }

    // rediss:// needs a process-wide crypto provider
    let _ = rustls::crypto::ring::default_provider().install_default();

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let db_arc = Arc::new(
        Database::connect(opt)
            .await
            .context("Failed to connect to database")?,
    );

    // Redis connection
    let redis_pool = Config::from_url(&config.redis_url)
        .create_pool(Some(Runtime::Tokio1))
        .context("Failed to create Redis pool")?;
    let redis_arc = Arc::new(redis_pool);

    // Admin gate
    let hasher = Argon2Hasher::with_params(
        config.argon2.memory_kib,
        config.argon2.iterations,
        config.argon2.parallelism,
    )
    .context("Invalid Argon2 parameters")?;

    let password_hash = match &config.admin_credential {
        AdminCredential::Hash(hash) => {
            argon2::PasswordHash::new(hash)
                .map_err(|e| anyhow::anyhow!("ADMIN_PASSWORD_HASH is not a PHC string: {e}"))?;
            hash.clone()
        }
        AdminCredential::Plain(password) => {
            if config.env == RunEnv::Production {
                warn!("Plain ADMIN_PASSWORD in production; prefer ADMIN_PASSWORD_HASH");
            }
            hasher
                .hash_password(password)
                .await
                .context("Failed to hash ADMIN_PASSWORD")?
        }
    };

    let session_tokens = JwtSessionService::new(config.jwt.clone());
    let revoked_sessions = RevokedSessionRedis::new(Arc::clone(&redis_arc));

    let admin = AdminUseCases {
        login: Arc::new(LoginAdminService::new(
            password_hash,
            hasher,
            session_tokens.clone(),
        )),
        logout: Arc::new(LogoutAdminService::new(
            session_tokens.clone(),
            revoked_sessions.clone(),
        )),
        verify_session: Arc::new(VerifyAdminSessionService::new(
            session_tokens,
            revoked_sessions,
        )),
    };

    let state = AppState {
        admin,
        admin_cookie: SessionCookieConfig {
            secure: config.env == RunEnv::Production,
            max_age_secs: config.jwt.session_expiry,
        },
        blog: blog_use_cases(&db_arc),
        course: course_use_cases(&db_arc),
        job: job_use_cases(&db_arc),
        contact: ContactUseCases {
            submit: Arc::new(SubmitContactService::new(contact_inbox(
                config.contact.as_ref(),
            )?)),
        },
    };

    let server_url = config.server_url();
    info!("Server run on: {}", server_url);

    #[cfg(feature = "test-helpers")]
    let test_jwt = web::Data::new(config.jwt.clone());

    HttpServer::new(move || {
        let app = App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(web::Data::new(Arc::clone(&redis_arc)))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
            );

        // Conditionally add test routes
        #[cfg(feature = "test-helpers")]
        let app = app
            .app_data(test_jwt.clone())
            .configure(test_helpers::configure_routes);

        app
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

/// Literal segments (`categories`) are registered before `{id}` routes.
#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::modules::admin::adapter::incoming::web::routes as admin;
    use crate::modules::blog::adapter::incoming::web::routes as blog;
    use crate::modules::contact::adapter::incoming::web::routes as contact;
    use crate::modules::course::adapter::incoming::web::routes as course;
    use crate::modules::job::adapter::incoming::web::routes as job;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);

    // Admin session
    cfg.service(admin::login_admin_handler);
    cfg.service(admin::logout_admin_handler);
    cfg.service(admin::verify_admin_token_handler);

    // Blog
    cfg.service(blog::get_public_blog_posts_handler);
    cfg.service(blog::get_blog_categories_handler);
    cfg.service(blog::get_public_single_blog_post_handler);
    cfg.service(blog::create_blog_post_handler);
    cfg.service(blog::get_blog_posts_handler);
    cfg.service(blog::get_single_blog_post_handler);
    cfg.service(blog::patch_blog_post_handler);
    cfg.service(blog::delete_blog_post_handler);

    // Course
    cfg.service(course::get_public_courses_handler);
    cfg.service(course::get_course_categories_handler);
    cfg.service(course::get_public_single_course_handler);
    cfg.service(course::create_course_handler);
    cfg.service(course::get_courses_handler);
    cfg.service(course::get_single_course_handler);
    cfg.service(course::patch_course_handler);
    cfg.service(course::delete_course_handler);

    // Job
    cfg.service(job::get_public_jobs_handler);
    cfg.service(job::get_public_single_job_handler);
    cfg.service(job::create_job_handler);
    cfg.service(job::get_jobs_handler);
    cfg.service(job::get_single_job_handler);
    cfg.service(job::patch_job_handler);
    cfg.service(job::delete_job_handler);

    // Contact
    cfg.service(contact::submit_contact_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
