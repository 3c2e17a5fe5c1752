use crate::auth::application::use_cases::{
    fetch_session_user::IFetchSessionUserUseCase, forget_password::IForgetPasswordUseCase,
    get_otp_expiry::IGetOtpExpiryUseCase, login_user::ILoginUserUseCase,
    reset_password::IResetPasswordUseCase, signup_user::ISignupUserUseCase,
    verify_otp::IVerifyOtpUseCase,
};
use crate::config::Environment;
use crate::post::application::use_cases::{
    create_post::ICreatePostUseCase, list_posts::IListPostsUseCase,
    list_user_posts::IListUserPostsUseCase,
};
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    signup_user: Option<Arc<dyn ISignupUserUseCase + Send + Sync>>,
    login_user: Option<Arc<dyn ILoginUserUseCase + Send + Sync>>,
    forget_password: Option<Arc<dyn IForgetPasswordUseCase + Send + Sync>>,
    verify_otp: Option<Arc<dyn IVerifyOtpUseCase + Send + Sync>>,
    get_otp_expiry: Option<Arc<dyn IGetOtpExpiryUseCase + Send + Sync>>,
    reset_password: Option<Arc<dyn IResetPasswordUseCase + Send + Sync>>,
    fetch_session_user: Option<Arc<dyn IFetchSessionUserUseCase + Send + Sync>>,
    list_posts: Option<Arc<dyn IListPostsUseCase + Send + Sync>>,
    create_post: Option<Arc<dyn ICreatePostUseCase + Send + Sync>>,
    list_user_posts: Option<Arc<dyn IListUserPostsUseCase + Send + Sync>>,
    env: Environment,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            signup_user: Some(Arc::new(StubSignupUserUseCase)),
            login_user: Some(Arc::new(StubLoginUserUseCase)),
            forget_password: Some(Arc::new(StubForgetPasswordUseCase)),
            verify_otp: Some(Arc::new(StubVerifyOtpUseCase)),
            get_otp_expiry: Some(Arc::new(StubGetOtpExpiryUseCase)),
            reset_password: Some(Arc::new(StubResetPasswordUseCase)),
            fetch_session_user: Some(Arc::new(StubFetchSessionUserUseCase)),
            list_posts: Some(Arc::new(StubListPostsUseCase)),
            create_post: Some(Arc::new(StubCreatePostUseCase)),
            list_user_posts: Some(Arc::new(StubListUserPostsUseCase)),
            env: Environment::Test,
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_signup_user(mut self, uc: impl ISignupUserUseCase + Send + Sync + 'static) -> Self {
        self.signup_user = Some(Arc::new(uc));
        self
    }

    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + Send + Sync + 'static) -> Self {
        self.login_user = Some(Arc::new(uc));
        self
    }

    pub fn with_forget_password(
        mut self,
        uc: impl IForgetPasswordUseCase + Send + Sync + 'static,
    ) -> Self {
        self.forget_password = Some(Arc::new(uc));
        self
    }

    pub fn with_verify_otp(mut self, uc: impl IVerifyOtpUseCase + Send + Sync + 'static) -> Self {
        self.verify_otp = Some(Arc::new(uc));
        self
    }

    pub fn with_get_otp_expiry(
        mut self,
        uc: impl IGetOtpExpiryUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_otp_expiry = Some(Arc::new(uc));
        self
    }

    pub fn with_reset_password(
        mut self,
        uc: impl IResetPasswordUseCase + Send + Sync + 'static,
    ) -> Self {
        self.reset_password = Some(Arc::new(uc));
        self
    }

    pub fn with_fetch_session_user(
        mut self,
        uc: impl IFetchSessionUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.fetch_session_user = Some(Arc::new(uc));
        self
    }

    pub fn with_list_posts(mut self, uc: impl IListPostsUseCase + Send + Sync + 'static) -> Self {
        self.list_posts = Some(Arc::new(uc));
        self
    }

    pub fn with_create_post(mut self, uc: impl ICreatePostUseCase + Send + Sync + 'static) -> Self {
        self.create_post = Some(Arc::new(uc));
        self
    }

    pub fn with_list_user_posts(
        mut self,
        uc: impl IListUserPostsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.list_user_posts = Some(Arc::new(uc));
        self
    }

    pub fn with_env(mut self, env: Environment) -> Self {
        self.env = env;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            signup_user_use_case: self.signup_user.unwrap(),
            login_user_use_case: self.login_user.unwrap(),
            forget_password_use_case: self.forget_password.unwrap(),
            verify_otp_use_case: self.verify_otp.unwrap(),
            get_otp_expiry_use_case: self.get_otp_expiry.unwrap(),
            reset_password_use_case: self.reset_password.unwrap(),
            fetch_session_user_use_case: self.fetch_session_user.unwrap(),
            list_posts_use_case: self.list_posts.unwrap(),
            create_post_use_case: self.create_post.unwrap(),
            list_user_posts_use_case: self.list_user_posts.unwrap(),
            env: self.env,
        })
    }
}
