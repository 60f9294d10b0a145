use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::admin::adapter::incoming::web::extractors::AdminSession;
use crate::modules::job::application::domain::entities::{JobSector, JobType};
use crate::modules::job::application::ports::incoming::use_cases::GetJobsError;
use crate::modules::job::application::ports::outgoing::{JobListFilter, JobSort};
use crate::shared::api::ApiResponse;
use crate::shared::content::{PageRequest, PublicationStatus};
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct JobListQuery {
    pub search: Option<String>,
    pub status: Option<PublicationStatus>,
    #[serde(rename = "type")]
    pub job_type: Option<JobType>,
    pub sector: Option<JobSector>,
    pub open: Option<bool>,
    pub sort: Option<JobSort>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl JobListQuery {
    /// Splits the query into filter and page; `status` is taken as given.
    pub fn into_parts(self) -> (JobListFilter, PageRequest) {
        let page = PageRequest::from_query(self.page.unwrap_or(0), self.per_page.unwrap_or(0));

        let filter = JobListFilter {
            status: self.status,
            job_type: self.job_type,
            sector: self.sector,
            open: self.open,
            search: self.search,
            sort: self.sort.unwrap_or_default(),
        };

        (filter, page)
    }
}

#[get("/api/admin/jobs")]
pub async fn get_jobs_handler(
    _admin: AdminSession,
    query: web::Query<JobListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (filter, page) = query.into_inner().into_parts();

    match data.job.get_list.execute(filter, page).await {
        Ok(result) => ApiResponse::success(result),

        Err(GetJobsError::QueryFailed(e)) => {
            error!("Failed to list job postings: {}", e);
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
    use std::sync::{Arc, Mutex};

    use crate::modules::job::application::domain::entities::JobPostingSummary;
    use crate::modules::job::application::ports::incoming::use_cases::GetJobsUseCase;
    use crate::shared::api::custom_query_config;
    use crate::shared::content::PageResult;
    use crate::tests::support::admin_helper::admin_cookie;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::content_fixtures::sample_job;

    #[derive(Clone, Default)]
    struct RecordingGetJobs {
        seen: Arc<Mutex<Option<JobListFilter>>>,
    }

    #[async_trait]
    impl GetJobsUseCase for RecordingGetJobs {
        async fn execute(
            &self,
            filter: JobListFilter,
            page: PageRequest,
        ) -> Result<PageResult<JobPostingSummary>, GetJobsError> {
            *self.seen.lock().unwrap() = Some(filter);
            Ok(PageResult {
                items: vec![sample_job().into()],
                page: page.page,
                per_page: page.per_page,
                total: 1,
            })
        }
    }

    #[actix_web::test]
    async fn test_get_jobs_parses_filters() {
        let use_case = RecordingGetJobs::default();
        let app_state = TestAppStateBuilder::default()
            .with_get_jobs(use_case.clone())
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(get_jobs_handler)).await;

        let req = test::TestRequest::get()
            .uri("/api/admin/jobs?type=full-time&sector=private&open=true&sort=salary&status=draft")
            .cookie(admin_cookie())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["items"][0]["company"], "Acme");
        assert!(body["data"]["items"][0].get("eligibility").is_none());

        let filter = use_case.seen.lock().unwrap().clone().unwrap();
        assert_eq!(filter.job_type, Some(JobType::FullTime));
        assert_eq!(filter.sector, Some(JobSector::Private));
        assert_eq!(filter.open, Some(true));
        assert_eq!(filter.sort, JobSort::Salary);
        assert_eq!(filter.status, Some(PublicationStatus::Draft));
    }

    #[actix_web::test]
    async fn test_get_jobs_rejects_unknown_sort() {
        let app_state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(custom_query_config())
                .service(get_jobs_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/jobs?sort=random")
            .cookie(admin_cookie())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_QUERY");
    }

    #[actix_web::test]
    async fn defaults_to_latest_first() {
        let (filter, page) = JobListQuery::default().into_parts();

        assert_eq!(filter.sort, JobSort::Latest);
        assert_eq!(page, PageRequest::default());
    }
}
