//! Default use cases for [`TestAppStateBuilder`]. Each test swaps in the
//! one it exercises; the rest must never be reached.
//!
//! [`TestAppStateBuilder`]: super::app_state_builder::TestAppStateBuilder

use async_trait::async_trait;
use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::modules::admin::application::domain::entities::{IssuedSession, VerifiedSession};
use crate::modules::admin::application::ports::incoming::use_cases::{
    LoginAdminError, LoginAdminUseCase, LogoutAdminError, LogoutAdminUseCase,
    VerifyAdminSessionError, VerifyAdminSessionUseCase,
};
use crate::modules::admin::application::ports::outgoing::TokenError;
use crate::modules::blog::application::domain::entities::{BlogPost, BlogPostSummary};
use crate::modules::blog::application::ports::incoming::use_cases::{
    CreateBlogPostCommand, CreateBlogPostError, CreateBlogPostUseCase, DeleteBlogPostError,
    DeleteBlogPostUseCase, GetBlogCategoriesError, GetBlogCategoriesUseCase, GetBlogPostsError,
    GetBlogPostsUseCase, GetPublicSingleBlogPostError, GetPublicSingleBlogPostUseCase,
    GetSingleBlogPostError, GetSingleBlogPostUseCase, PatchBlogPostError, PatchBlogPostUseCase,
};
use crate::modules::blog::application::ports::outgoing::{BlogPostListFilter, PatchBlogPostData};
use crate::modules::contact::application::ports::incoming::use_cases::{
    SubmitContactCommand, SubmitContactError, SubmitContactUseCase,
};
use crate::modules::course::application::domain::entities::{Course, CourseSummary};
use crate::modules::course::application::ports::incoming::use_cases::{
    CreateCourseCommand, CreateCourseError, CreateCourseUseCase, DeleteCourseError,
    DeleteCourseUseCase, GetCourseCategoriesError, GetCourseCategoriesUseCase, GetCoursesError,
    GetCoursesUseCase, GetPublicSingleCourseError, GetPublicSingleCourseUseCase,
    GetSingleCourseError, GetSingleCourseUseCase, PatchCourseError, PatchCourseUseCase,
};
use crate::modules::course::application::ports::outgoing::{CourseListFilter, PatchCourseData};
use crate::modules::job::application::domain::entities::{JobPosting, JobPostingSummary};
use crate::modules::job::application::ports::incoming::use_cases::{
    CreateJobCommand, CreateJobError, CreateJobUseCase, DeleteJobError, DeleteJobUseCase,
    GetJobsError, GetJobsUseCase, GetPublicSingleJobError, GetPublicSingleJobUseCase,
    GetSingleJobError, GetSingleJobUseCase, PatchJobError, PatchJobUseCase,
};
use crate::modules::job::application::ports::outgoing::{JobListFilter, PatchJobPostingData};
use crate::shared::content::{PageRequest, PageResult};
use crate::tests::support::admin_helper::ADMIN_TOKEN;

/* --------------------------------------------------
 * Admin session
 * -------------------------------------------------- */

/// Accepts [`ADMIN_TOKEN`] only.
#[derive(Default, Clone)]
pub struct StubVerifyAdminSession;

#[async_trait]
impl VerifyAdminSessionUseCase for StubVerifyAdminSession {
    async fn execute(&self, token: &str) -> Result<VerifiedSession, VerifyAdminSessionError> {
        if token != ADMIN_TOKEN {
            return Err(VerifyAdminSessionError::InvalidToken(
                TokenError::MalformedToken,
            ));
        }

        Ok(VerifiedSession {
            session_id: Uuid::nil(),
            expires_at: Utc::now() + Duration::hours(1),
        })
    }
}

#[derive(Default, Clone)]
pub struct StubLogoutAdmin;

#[async_trait]
impl LogoutAdminUseCase for StubLogoutAdmin {
    async fn execute(&self, _token: Option<String>) -> Result<(), LogoutAdminError> {
        Ok(())
    }
}

/* --------------------------------------------------
 * Everything else
 * -------------------------------------------------- */

#[derive(Default, Clone)]
pub struct Unused;

#[async_trait]
impl LoginAdminUseCase for Unused {
    async fn execute(&self, _password: Option<String>) -> Result<IssuedSession, LoginAdminError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl SubmitContactUseCase for Unused {
    async fn execute(&self, _command: SubmitContactCommand) -> Result<(), SubmitContactError> {
        unimplemented!("Not used in this test")
    }
}

// ==================================================================
// Blog
// ==================================================================

#[async_trait]
impl CreateBlogPostUseCase for Unused {
    async fn execute(
        &self,
        _command: CreateBlogPostCommand,
    ) -> Result<BlogPost, CreateBlogPostError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetBlogPostsUseCase for Unused {
    async fn execute(
        &self,
        _filter: BlogPostListFilter,
        _page: PageRequest,
    ) -> Result<PageResult<BlogPostSummary>, GetBlogPostsError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetSingleBlogPostUseCase for Unused {
    async fn execute(&self, _post_id: Uuid) -> Result<BlogPost, GetSingleBlogPostError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetPublicSingleBlogPostUseCase for Unused {
    async fn execute(&self, _post_id: Uuid) -> Result<BlogPost, GetPublicSingleBlogPostError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetBlogCategoriesUseCase for Unused {
    async fn execute(&self) -> Result<Vec<String>, GetBlogCategoriesError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl PatchBlogPostUseCase for Unused {
    async fn execute(
        &self,
        _post_id: Uuid,
        _data: PatchBlogPostData,
    ) -> Result<BlogPost, PatchBlogPostError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl DeleteBlogPostUseCase for Unused {
    async fn execute(&self, _post_id: Uuid) -> Result<(), DeleteBlogPostError> {
        unimplemented!("Not used in this test")
    }
}

// ==================================================================
// Course
// ==================================================================

#[async_trait]
impl CreateCourseUseCase for Unused {
    async fn execute(&self, _command: CreateCourseCommand) -> Result<Course, CreateCourseError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetCoursesUseCase for Unused {
    async fn execute(
        &self,
        _filter: CourseListFilter,
        _page: PageRequest,
    ) -> Result<PageResult<CourseSummary>, GetCoursesError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetSingleCourseUseCase for Unused {
    async fn execute(&self, _course_id: Uuid) -> Result<Course, GetSingleCourseError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetPublicSingleCourseUseCase for Unused {
    async fn execute(&self, _course_id: Uuid) -> Result<Course, GetPublicSingleCourseError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetCourseCategoriesUseCase for Unused {
    async fn execute(&self) -> Result<Vec<String>, GetCourseCategoriesError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl PatchCourseUseCase for Unused {
    async fn execute(
        &self,
        _course_id: Uuid,
        _data: PatchCourseData,
    ) -> Result<Course, PatchCourseError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl DeleteCourseUseCase for Unused {
    async fn execute(&self, _course_id: Uuid) -> Result<(), DeleteCourseError> {
        unimplemented!("Not used in this test")
    }
}

// ==================================================================
// Job
// ==================================================================

#[async_trait]
impl CreateJobUseCase for Unused {
    async fn execute(&self, _command: CreateJobCommand) -> Result<JobPosting, CreateJobError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetJobsUseCase for Unused {
    async fn execute(
        &self,
        _filter: JobListFilter,
        _page: PageRequest,
    ) -> Result<PageResult<JobPostingSummary>, GetJobsError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetSingleJobUseCase for Unused {
    async fn execute(&self, _job_id: Uuid) -> Result<JobPosting, GetSingleJobError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetPublicSingleJobUseCase for Unused {
    async fn execute(&self, _job_id: Uuid) -> Result<JobPosting, GetPublicSingleJobError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl PatchJobUseCase for Unused {
    async fn execute(
        &self,
        _job_id: Uuid,
        _data: PatchJobPostingData,
    ) -> Result<JobPosting, PatchJobError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl DeleteJobUseCase for Unused {
    async fn execute(&self, _job_id: Uuid) -> Result<(), DeleteJobError> {
        unimplemented!("Not used in this test")
    }
}
