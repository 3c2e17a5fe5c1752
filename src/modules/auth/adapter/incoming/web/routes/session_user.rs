use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::SessionUser;
use crate::auth::application::use_cases::fetch_session_user::{
    FetchSessionUserError, SessionUserResponse,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::{error, warn};

/// Current user's profile
///
/// Returns the session user with their posts populated, newest first.
/// Credential and reset-state fields are never included.
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = "auth",
    responses(
        (status = 200, description = "Profile with posts", body = inline(SuccessResponse<SessionUserResponse>)),
        (status = 401, description = "Missing, expired or invalid session token", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/auth/user")]
pub async fn session_user_handler(
    session: SessionUser,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.fetch_session_user_use_case;

    match use_case.execute(session.user_id).await {
        Ok(response) => ApiResponse::success(response),

        Err(FetchSessionUserError::UserNotFound) => {
            warn!(user_id = %session.user_id, "Session user no longer exists");
            ApiResponse::not_found("User not found")
        }

        Err(FetchSessionUserError::QueryError(ref e)) => {
            error!(error = %e, "Database query failed");
            ApiResponse::internal_error_detailed(data.env.error_detail(e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::use_cases::fetch_session_user::{
        IFetchSessionUserUseCase, SessionUserPost, SessionUserProfile,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{token_provider_data, StubTokenProvider};
    use actix_web::{test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use uuid::Uuid;

    #[derive(Clone)]
    struct MockFetchSessionUser {
        user_id: Uuid,
    }

    #[async_trait]
    impl IFetchSessionUserUseCase for MockFetchSessionUser {
        async fn execute(
            &self,
            user_id: Uuid,
        ) -> Result<SessionUserResponse, FetchSessionUserError> {
            assert_eq!(user_id, self.user_id);
            let now = Utc::now();
            Ok(SessionUserResponse {
                user: SessionUserProfile {
                    id: user_id,
                    username: "testuser".to_string(),
                    email: "test@example.com".to_string(),
                    bio: "Hello".to_string(),
                    profile_picture: "avatar.png".to_string(),
                    created_at: now,
                    updated_at: now,
                    posts: vec![SessionUserPost {
                        id: Uuid::new_v4(),
                        content: "First post!".to_string(),
                        created_at: now,
                    }],
                },
            })
        }
    }

    #[derive(Clone)]
    struct MockFetchSessionUserNotFound;

    #[async_trait]
    impl IFetchSessionUserUseCase for MockFetchSessionUserNotFound {
        async fn execute(
            &self,
            _user_id: Uuid,
        ) -> Result<SessionUserResponse, FetchSessionUserError> {
            Err(FetchSessionUserError::UserNotFound)
        }
    }

    #[actix_web::test]
    async fn test_session_user_success() {
        let user_id = Uuid::new_v4();
        let app_state = TestAppStateBuilder::default()
            .with_fetch_session_user(MockFetchSessionUser { user_id })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data(StubTokenProvider::session_ok(user_id)))
                .service(session_user_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/auth/user")
            .cookie(actix_web::cookie::Cookie::new("token", "valid-token"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["user"]["id"], user_id.to_string());
        assert_eq!(body["user"]["username"], "testuser");
        assert_eq!(body["user"]["posts"][0]["content"], "First post!");
        assert!(body["user"].get("password").is_none());
        assert!(body["user"].get("otp").is_none());
    }

    #[actix_web::test]
    async fn test_session_user_no_token() {
        let app_state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data(StubTokenProvider::invalid()))
                .service(session_user_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/auth/user").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Access Denied: No Token Provided");
    }

    #[actix_web::test]
    async fn test_session_user_account_gone() {
        let user_id = Uuid::new_v4();
        let app_state = TestAppStateBuilder::default()
            .with_fetch_session_user(MockFetchSessionUserNotFound)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data(StubTokenProvider::session_ok(user_id)))
                .service(session_user_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/auth/user")
            .cookie(actix_web::cookie::Cookie::new("token", "valid-token"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "User not found");
    }
}
