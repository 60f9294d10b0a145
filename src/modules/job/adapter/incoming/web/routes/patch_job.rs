use actix_web::{patch, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::admin::adapter::incoming::web::extractors::AdminSession;
use crate::modules::job::application::domain::entities::{JobSector, JobType};
use crate::modules::job::application::ports::incoming::use_cases::PatchJobError;
use crate::modules::job::application::ports::outgoing::PatchJobPostingData;
use crate::shared::api::{parse_record_id, ApiResponse};
use crate::shared::content::{FlexibleDate, PatchField, PublicationStatus};
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchJobRequest {
    #[serde(default)]
    pub title: PatchField<String>,
    #[serde(default)]
    pub company: PatchField<String>,
    #[serde(default)]
    pub location: PatchField<String>,
    #[serde(default)]
    pub salary: PatchField<f64>,
    #[serde(default, rename = "type")]
    pub job_type: PatchField<JobType>,
    #[serde(default)]
    pub sector: PatchField<JobSector>,
    #[serde(default)]
    pub apply_start_date: PatchField<FlexibleDate>,
    #[serde(default)]
    pub apply_end_date: PatchField<FlexibleDate>,
    #[serde(default)]
    pub description: PatchField<String>,
    #[serde(default)]
    pub eligibility: PatchField<String>,
    #[serde(default)]
    pub status: PatchField<PublicationStatus>,
}

impl From<PatchJobRequest> for PatchJobPostingData {
    fn from(req: PatchJobRequest) -> Self {
        PatchJobPostingData {
            title: req.title,
            company: req.company,
            location: req.location,
            salary: req.salary,
            job_type: req.job_type,
            sector: req.sector,
            apply_start_date: req.apply_start_date.map(FlexibleDate::into_inner),
            apply_end_date: req.apply_end_date.map(FlexibleDate::into_inner),
            description: req.description,
            eligibility: req.eligibility,
            status: req.status,
        }
    }
}

#[patch("/api/admin/jobs/{job_id}")]
pub async fn patch_job_handler(
    _admin: AdminSession,
    path: web::Path<String>,
    req: web::Json<PatchJobRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let job_id = match parse_record_id(&path, "INVALID_JOB_ID", "Invalid job ID") {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match data.job.patch.execute(job_id, req.into_inner().into()).await {
        Ok(updated) => ApiResponse::success(updated),

        Err(PatchJobError::InvalidField(invalid)) => {
            ApiResponse::bad_request("INVALID_FIELD", invalid.to_string())
        }

        Err(PatchJobError::NotFound) => {
            ApiResponse::not_found("JOB_NOT_FOUND", "Job posting not found")
        }

        Err(PatchJobError::RepositoryError(e)) => {
            error!("Repository error patching job posting {}: {}", job_id, e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    use crate::modules::job::application::domain::entities::JobPosting;
    use crate::modules::job::application::ports::incoming::use_cases::PatchJobUseCase;
    use crate::shared::content::InvalidField;
    use crate::tests::support::admin_helper::admin_cookie;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::content_fixtures::sample_job;

    #[derive(Clone)]
    struct MockPatchJob {
        result: Result<JobPosting, PatchJobError>,
        received: Arc<Mutex<Option<PatchJobPostingData>>>,
    }

    impl MockPatchJob {
        fn new(result: Result<JobPosting, PatchJobError>) -> Self {
            Self {
                result,
                received: Arc::new(Mutex::new(None)),
            }
        }
    }

    #[async_trait]
    impl PatchJobUseCase for MockPatchJob {
        async fn execute(
            &self,
            _job_id: Uuid,
            data: PatchJobPostingData,
        ) -> Result<JobPosting, PatchJobError> {
            *self.received.lock().unwrap() = Some(data);
            self.result.clone()
        }
    }

    #[actix_web::test]
    async fn test_patch_job_deadline_and_type() {
        let job = sample_job();
        let use_case = MockPatchJob::new(Ok(job.clone()));
        let app_state = TestAppStateBuilder::default()
            .with_patch_job(use_case.clone())
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(patch_job_handler)).await;

        let req = test::TestRequest::patch()
            .uri(&format!("/api/admin/jobs/{}", job.id))
            .cookie(admin_cookie())
            .set_json(json!({ "applyEndDate": "2026-12-31", "type": "internship" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let received = use_case.received.lock().unwrap().clone().unwrap();
        assert_eq!(
            received.apply_end_date,
            PatchField::Value(Utc.with_ymd_and_hms(2026, 12, 31, 0, 0, 0).unwrap())
        );
        assert_eq!(received.job_type, PatchField::Value(JobType::Internship));
        assert!(received.apply_start_date.is_unset());
    }

    #[actix_web::test]
    async fn test_patch_job_null_field() {
        let app_state = TestAppStateBuilder::default()
            .with_patch_job(MockPatchJob::new(Err(PatchJobError::InvalidField(
                InvalidField { field: "company" },
            ))))
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(patch_job_handler)).await;

        let req = test::TestRequest::patch()
            .uri(&format!("/api/admin/jobs/{}", Uuid::new_v4()))
            .cookie(admin_cookie())
            .set_json(json!({ "company": null }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["message"], "company cannot be null or empty");
    }

    #[actix_web::test]
    async fn test_patch_job_not_found() {
        let app_state = TestAppStateBuilder::default()
            .with_patch_job(MockPatchJob::new(Err(PatchJobError::NotFound)))
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(patch_job_handler)).await;

        let req = test::TestRequest::patch()
            .uri(&format!("/api/admin/jobs/{}", Uuid::new_v4()))
            .cookie(admin_cookie())
            .set_json(json!({ "salary": 100 }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "JOB_NOT_FOUND");
    }
}
