use actix_web::web;
use std::sync::Arc;

use crate::modules::admin::adapter::incoming::web::session_cookie::SessionCookieConfig;
use crate::modules::admin::application::admin_use_cases::AdminUseCases;
use crate::modules::admin::application::ports::incoming::use_cases::{
    LoginAdminUseCase, LogoutAdminUseCase, VerifyAdminSessionUseCase,
};
use crate::modules::blog::application::blog_use_cases::BlogUseCases;
use crate::modules::blog::application::ports::incoming::use_cases::{
    CreateBlogPostUseCase, DeleteBlogPostUseCase, GetBlogCategoriesUseCase, GetBlogPostsUseCase,
    GetPublicSingleBlogPostUseCase, GetSingleBlogPostUseCase, PatchBlogPostUseCase,
};
use crate::modules::contact::application::contact_use_cases::ContactUseCases;
use crate::modules::contact::application::ports::incoming::use_cases::SubmitContactUseCase;
use crate::modules::course::application::course_use_cases::CourseUseCases;
use crate::modules::course::application::ports::incoming::use_cases::{
    CreateCourseUseCase, DeleteCourseUseCase, GetCourseCategoriesUseCase, GetCoursesUseCase,
    GetPublicSingleCourseUseCase, GetSingleCourseUseCase, PatchCourseUseCase,
};
use crate::modules::job::application::job_use_cases::JobUseCases;
use crate::modules::job::application::ports::incoming::use_cases::{
    CreateJobUseCase, DeleteJobUseCase, GetJobsUseCase, GetPublicSingleJobUseCase,
    GetSingleJobUseCase, PatchJobUseCase,
};
use crate::tests::support::stubs::{StubLogoutAdmin, StubVerifyAdminSession, Unused};
use crate::AppState;

/// `AppState` for route tests. Admin routes pass with
/// [`admin_cookie`](super::admin_helper::admin_cookie); every other use case
/// panics unless a test swaps it in.
pub struct TestAppStateBuilder {
    admin: AdminUseCases,
    admin_cookie: SessionCookieConfig,
    blog: BlogUseCases,
    course: CourseUseCases,
    job: JobUseCases,
    contact: ContactUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            admin: AdminUseCases {
                login: Arc::new(Unused),
                logout: Arc::new(StubLogoutAdmin),
                verify_session: Arc::new(StubVerifyAdminSession),
            },
            admin_cookie: SessionCookieConfig {
                secure: false,
                max_age_secs: 86400,
            },
            blog: BlogUseCases {
                create: Arc::new(Unused),
                get_list: Arc::new(Unused),
                get_single: Arc::new(Unused),
                get_public_single: Arc::new(Unused),
                get_categories: Arc::new(Unused),
                patch: Arc::new(Unused),
                delete: Arc::new(Unused),
            },
            course: CourseUseCases {
                create: Arc::new(Unused),
                get_list: Arc::new(Unused),
                get_single: Arc::new(Unused),
                get_public_single: Arc::new(Unused),
                get_categories: Arc::new(Unused),
                patch: Arc::new(Unused),
                delete: Arc::new(Unused),
            },
            job: JobUseCases {
                create: Arc::new(Unused),
                get_list: Arc::new(Unused),
                get_single: Arc::new(Unused),
                get_public_single: Arc::new(Unused),
                patch: Arc::new(Unused),
                delete: Arc::new(Unused),
            },
            contact: ContactUseCases {
                submit: Arc::new(Unused),
            },
        }
    }
}

impl TestAppStateBuilder {
    // ==================================================================
    // Admin / contact
    // ==================================================================

    pub fn with_login_admin(mut self, uc: impl LoginAdminUseCase + 'static) -> Self {
        self.admin.login = Arc::new(uc);
        self
    }

    pub fn with_logout_admin(mut self, uc: impl LogoutAdminUseCase + 'static) -> Self {
        self.admin.logout = Arc::new(uc);
        self
    }

    pub fn with_verify_admin_session(
        mut self,
        uc: impl VerifyAdminSessionUseCase + 'static,
    ) -> Self {
        self.admin.verify_session = Arc::new(uc);
        self
    }

    pub fn with_submit_contact(mut self, uc: impl SubmitContactUseCase + 'static) -> Self {
        self.contact.submit = Arc::new(uc);
        self
    }

    // ==================================================================
    // Blog
    // ==================================================================

    pub fn with_create_blog_post(mut self, uc: impl CreateBlogPostUseCase + 'static) -> Self {
        self.blog.create = Arc::new(uc);
        self
    }

    pub fn with_get_blog_posts(mut self, uc: impl GetBlogPostsUseCase + 'static) -> Self {
        self.blog.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_single_blog_post(
        mut self,
        uc: impl GetSingleBlogPostUseCase + 'static,
    ) -> Self {
        self.blog.get_single = Arc::new(uc);
        self
    }

    pub fn with_get_public_single_blog_post(
        mut self,
        uc: impl GetPublicSingleBlogPostUseCase + 'static,
    ) -> Self {
        self.blog.get_public_single = Arc::new(uc);
        self
    }

    pub fn with_get_blog_categories(mut self, uc: impl GetBlogCategoriesUseCase + 'static) -> Self {
        self.blog.get_categories = Arc::new(uc);
        self
    }

    pub fn with_patch_blog_post(mut self, uc: impl PatchBlogPostUseCase + 'static) -> Self {
        self.blog.patch = Arc::new(uc);
        self
    }

    pub fn with_delete_blog_post(mut self, uc: impl DeleteBlogPostUseCase + 'static) -> Self {
        self.blog.delete = Arc::new(uc);
        self
    }

    // ==================================================================
    // Course
    // ==================================================================

    pub fn with_create_course(mut self, uc: impl CreateCourseUseCase + 'static) -> Self {
        self.course.create = Arc::new(uc);
        self
    }

    pub fn with_get_courses(mut self, uc: impl GetCoursesUseCase + 'static) -> Self {
        self.course.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_single_course(mut self, uc: impl GetSingleCourseUseCase + 'static) -> Self {
        self.course.get_single = Arc::new(uc);
        self
    }

    pub fn with_get_public_single_course(
        mut self,
        uc: impl GetPublicSingleCourseUseCase + 'static,
    ) -> Self {
        self.course.get_public_single = Arc::new(uc);
        self
    }

    pub fn with_get_course_categories(
        mut self,
        uc: impl GetCourseCategoriesUseCase + 'static,
    ) -> Self {
        self.course.get_categories = Arc::new(uc);
        self
    }

    pub fn with_patch_course(mut self, uc: impl PatchCourseUseCase + 'static) -> Self {
        self.course.patch = Arc::new(uc);
        self
    }

    pub fn with_delete_course(mut self, uc: impl DeleteCourseUseCase + 'static) -> Self {
        self.course.delete = Arc::new(uc);
        self
    }

    // ==================================================================
    // Job
    // ==================================================================

    pub fn with_create_job(mut self, uc: impl CreateJobUseCase + 'static) -> Self {
        self.job.create = Arc::new(uc);
        self
    }

    pub fn with_get_jobs(mut self, uc: impl GetJobsUseCase + 'static) -> Self {
        self.job.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_single_job(mut self, uc: impl GetSingleJobUseCase + 'static) -> Self {
        self.job.get_single = Arc::new(uc);
        self
    }

    pub fn with_get_public_single_job(
        mut self,
        uc: impl GetPublicSingleJobUseCase + 'static,
    ) -> Self {
        self.job.get_public_single = Arc::new(uc);
        self
    }

    pub fn with_patch_job(mut self, uc: impl PatchJobUseCase + 'static) -> Self {
        self.job.patch = Arc::new(uc);
        self
    }

    pub fn with_delete_job(mut self, uc: impl DeleteJobUseCase + 'static) -> Self {
        self.job.delete = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            admin: self.admin,
            admin_cookie: self.admin_cookie,
            blog: self.blog,
            course: self.course,
            job: self.job,
            contact: self.contact,
        })
    }
}
