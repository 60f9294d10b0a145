use actix_web::{patch, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::admin::adapter::incoming::web::extractors::AdminSession;
use crate::modules::course::application::domain::entities::CourseLevel;
use crate::modules::course::application::ports::incoming::use_cases::PatchCourseError;
use crate::modules::course::application::ports::outgoing::PatchCourseData;
use crate::shared::api::{parse_record_id, ApiResponse};
use crate::shared::content::{PatchField, PublicationStatus};
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchCourseRequest {
    #[serde(default)]
    pub title: PatchField<String>,
    #[serde(default)]
    pub description: PatchField<String>,
    #[serde(default)]
    pub content: PatchField<String>,
    #[serde(default)]
    pub category: PatchField<String>,
    #[serde(default)]
    pub price: PatchField<f64>,
    #[serde(default)]
    pub duration: PatchField<String>,
    #[serde(default)]
    pub level: PatchField<CourseLevel>,
    #[serde(default)]
    pub status: PatchField<PublicationStatus>,
    #[serde(default)]
    pub image: PatchField<String>,
    #[serde(default)]
    pub modules: PatchField<String>,
    #[serde(default)]
    pub your_learning: PatchField<String>,
}

impl From<PatchCourseRequest> for PatchCourseData {
    fn from(req: PatchCourseRequest) -> Self {
        PatchCourseData {
            title: req.title,
            description: req.description,
            content: req.content,
            category: req.category,
            price: req.price,
            duration: req.duration,
            level: req.level,
            status: req.status,
            image: req.image,
            modules: req.modules,
            your_learning: req.your_learning,
        }
    }
}

#[patch("/api/admin/courses/{course_id}")]
pub async fn patch_course_handler(
    _admin: AdminSession,
    path: web::Path<String>,
    req: web::Json<PatchCourseRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let course_id = match parse_record_id(&path, "INVALID_COURSE_ID", "Invalid course ID") {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match data
        .course
        .patch
        .execute(course_id, req.into_inner().into())
        .await
    {
        Ok(updated) => ApiResponse::success(updated),

        Err(PatchCourseError::InvalidField(invalid)) => {
            ApiResponse::bad_request("INVALID_FIELD", invalid.to_string())
        }

        Err(PatchCourseError::NotFound) => {
            ApiResponse::not_found("COURSE_NOT_FOUND", "Course not found")
        }

        Err(PatchCourseError::RepositoryError(e)) => {
            error!("Repository error patching course {}: {}", course_id, e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    use crate::modules::course::application::domain::entities::Course;
    use crate::modules::course::application::ports::incoming::use_cases::PatchCourseUseCase;
    use crate::shared::content::InvalidField;
    use crate::tests::support::admin_helper::admin_cookie;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::content_fixtures::sample_course;

    #[derive(Clone)]
    struct MockPatchCourse {
        result: Result<Course, PatchCourseError>,
        received: Arc<Mutex<Option<PatchCourseData>>>,
    }

    impl MockPatchCourse {
        fn new(result: Result<Course, PatchCourseError>) -> Self {
            Self {
                result,
                received: Arc::new(Mutex::new(None)),
            }
        }
    }

    #[async_trait]
    impl PatchCourseUseCase for MockPatchCourse {
        async fn execute(
            &self,
            _course_id: Uuid,
            data: PatchCourseData,
        ) -> Result<Course, PatchCourseError> {
            *self.received.lock().unwrap() = Some(data);
            self.result.clone()
        }
    }

    #[actix_web::test]
    async fn test_patch_course_price_and_level() {
        let course = sample_course();
        let use_case = MockPatchCourse::new(Ok(course.clone()));
        let app_state = TestAppStateBuilder::default()
            .with_patch_course(use_case.clone())
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(patch_course_handler)).await;

        let req = test::TestRequest::patch()
            .uri(&format!("/api/admin/courses/{}", course.id))
            .cookie(admin_cookie())
            .set_json(json!({ "price": 19.99, "level": "intermediate" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let received = use_case.received.lock().unwrap().clone().unwrap();
        assert_eq!(received.price, PatchField::Value(19.99));
        assert_eq!(received.level, PatchField::Value(CourseLevel::Intermediate));
        assert!(received.your_learning.is_unset());
    }

    #[actix_web::test]
    async fn test_patch_course_invalid_field() {
        let app_state = TestAppStateBuilder::default()
            .with_patch_course(MockPatchCourse::new(Err(PatchCourseError::InvalidField(
                InvalidField { field: "price" },
            ))))
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(patch_course_handler)).await;

        let req = test::TestRequest::patch()
            .uri(&format!("/api/admin/courses/{}", Uuid::new_v4()))
            .cookie(admin_cookie())
            .set_json(json!({ "price": null }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_FIELD");
    }

    #[actix_web::test]
    async fn test_patch_course_invalid_id() {
        let app_state = TestAppStateBuilder::default().build();

        let app =
            test::init_service(App::new().app_data(app_state).service(patch_course_handler)).await;

        let req = test::TestRequest::patch()
            .uri("/api/admin/courses/abc")
            .cookie(admin_cookie())
            .set_json(json!({ "title": "x" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_COURSE_ID");
    }
}
