use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::admin::adapter::incoming::web::extractors::AdminSession;
use crate::modules::job::application::ports::incoming::use_cases::GetSingleJobError;
use crate::shared::api::{parse_record_id, ApiResponse};
use crate::AppState;

#[get("/api/admin/jobs/{job_id}")]
pub async fn get_single_job_handler(
    _admin: AdminSession,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let job_id = match parse_record_id(&path, "INVALID_JOB_ID", "Invalid job ID") {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match data.job.get_single.execute(job_id).await {
        Ok(job) => ApiResponse::success(job),

        Err(GetSingleJobError::NotFound) => {
            ApiResponse::not_found("JOB_NOT_FOUND", "Job posting not found")
        }

        Err(GetSingleJobError::QueryFailed(e)) => {
            error!("Failed to load job posting {}: {}", job_id, e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;
    use uuid::Uuid;

    use crate::modules::job::application::domain::entities::JobPosting;
    use crate::modules::job::application::ports::incoming::use_cases::GetSingleJobUseCase;
    use crate::shared::content::PublicationStatus;
    use crate::tests::support::admin_helper::admin_cookie;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::content_fixtures::sample_job;

    struct MockGetSingleJob {
        result: Result<JobPosting, GetSingleJobError>,
    }

    #[async_trait]
    impl GetSingleJobUseCase for MockGetSingleJob {
        async fn execute(&self, _job_id: Uuid) -> Result<JobPosting, GetSingleJobError> {
            self.result.clone()
        }
    }

    #[actix_web::test]
    async fn test_admin_can_read_draft() {
        let mut job = sample_job();
        job.status = PublicationStatus::Draft;

        let app_state = TestAppStateBuilder::default()
            .with_get_single_job(MockGetSingleJob {
                result: Ok(job.clone()),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_single_job_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/admin/jobs/{}", job.id))
            .cookie(admin_cookie())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["status"], "draft");
        assert_eq!(body["data"]["eligibility"], job.eligibility);
        assert_eq!(body["data"]["type"], "full-time");
    }

    #[actix_web::test]
    async fn test_invalid_id_is_400() {
        let app_state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_single_job_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/jobs/not-a-uuid")
            .cookie(admin_cookie())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_JOB_ID");
    }

    #[actix_web::test]
    async fn test_unknown_id_is_404() {
        let app_state = TestAppStateBuilder::default()
            .with_get_single_job(MockGetSingleJob {
                result: Err(GetSingleJobError::NotFound),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_single_job_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/admin/jobs/{}", Uuid::new_v4()))
            .cookie(admin_cookie())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "JOB_NOT_FOUND");
    }
}
