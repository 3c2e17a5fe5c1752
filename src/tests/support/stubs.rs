use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::use_cases::{
    fetch_session_user::{FetchSessionUserError, IFetchSessionUserUseCase, SessionUserResponse},
    forget_password::{
        ForgetPasswordError, ForgetPasswordRequest, ForgetPasswordResponse, IForgetPasswordUseCase,
    },
    get_otp_expiry::{
        GetOtpExpiryError, GetOtpExpiryRequest, GetOtpExpiryResponse, IGetOtpExpiryUseCase,
    },
    login_user::{ILoginUserUseCase, LoginError, LoginRequest, LoginUserResponse},
    reset_password::{IResetPasswordUseCase, ResetPasswordError, ResetPasswordRequest},
    signup_user::{ISignupUserUseCase, SignupError, SignupRequest, SignupUserResponse},
    verify_otp::{IVerifyOtpUseCase, VerifyOtpError, VerifyOtpRequest, VerifyOtpResponse},
};
use crate::post::application::use_cases::{
    create_post::{CreatePostError, CreatePostRequest, CreatePostResponse, ICreatePostUseCase},
    list_posts::{IListPostsUseCase, ListPostsError, ListPostsRequest, ListPostsResponse},
    list_user_posts::{
        IListUserPostsUseCase, ListUserPostsError, ListUserPostsRequest, ListUserPostsResponse,
    },
};

#[derive(Default, Clone)]
pub struct StubSignupUserUseCase;

#[async_trait]
impl ISignupUserUseCase for StubSignupUserUseCase {
    async fn execute(&self, _request: SignupRequest) -> Result<SignupUserResponse, SignupError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubForgetPasswordUseCase;

#[async_trait]
impl IForgetPasswordUseCase for StubForgetPasswordUseCase {
    async fn execute(
        &self,
        _request: ForgetPasswordRequest,
    ) -> Result<ForgetPasswordResponse, ForgetPasswordError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubVerifyOtpUseCase;

#[async_trait]
impl IVerifyOtpUseCase for StubVerifyOtpUseCase {
    async fn execute(
        &self,
        _request: VerifyOtpRequest,
    ) -> Result<VerifyOtpResponse, VerifyOtpError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetOtpExpiryUseCase;

#[async_trait]
impl IGetOtpExpiryUseCase for StubGetOtpExpiryUseCase {
    async fn execute(
        &self,
        _request: GetOtpExpiryRequest,
    ) -> Result<GetOtpExpiryResponse, GetOtpExpiryError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubResetPasswordUseCase;

#[async_trait]
impl IResetPasswordUseCase for StubResetPasswordUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _request: ResetPasswordRequest,
    ) -> Result<(), ResetPasswordError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubFetchSessionUserUseCase;

#[async_trait]
impl IFetchSessionUserUseCase for StubFetchSessionUserUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
    ) -> Result<SessionUserResponse, FetchSessionUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListPostsUseCase;

#[async_trait]
impl IListPostsUseCase for StubListPostsUseCase {
    async fn execute(
        &self,
        _request: ListPostsRequest,
    ) -> Result<ListPostsResponse, ListPostsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreatePostUseCase;

#[async_trait]
impl ICreatePostUseCase for StubCreatePostUseCase {
    async fn execute(
        &self,
        _author_id: Uuid,
        _request: CreatePostRequest,
    ) -> Result<CreatePostResponse, CreatePostError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListUserPostsUseCase;

#[async_trait]
impl IListUserPostsUseCase for StubListUserPostsUseCase {
    async fn execute(
        &self,
        _request: ListUserPostsRequest,
    ) -> Result<ListUserPostsResponse, ListUserPostsError> {
        unimplemented!("Not used in this test")
    }
}
