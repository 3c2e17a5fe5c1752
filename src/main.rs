pub mod modules;
pub use modules::auth;
pub use modules::email;
pub use modules::post;

pub mod api;
pub mod config;
pub mod health;
pub mod shared;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::services::hash::BcryptHasher;
use crate::auth::application::use_cases::{
    fetch_session_user::{FetchSessionUserUseCase, IFetchSessionUserUseCase},
    forget_password::{ForgetPasswordUseCase, IForgetPasswordUseCase},
    get_otp_expiry::{GetOtpExpiryUseCase, IGetOtpExpiryUseCase},
    login_user::{ILoginUserUseCase, LoginUserUseCase},
    reset_password::{IResetPasswordUseCase, ResetPasswordUseCase},
    signup_user::{ISignupUserUseCase, SignupUserUseCase},
    verify_otp::{IVerifyOtpUseCase, VerifyOtpUseCase},
};
use crate::config::{AppConfig, Environment};
use crate::email::adapter::outgoing::smtp_sender::SmtpEmailSender;
use crate::email::application::ports::outgoing::otp_notifier::OtpNotifier;
use crate::email::application::services::OtpEmailService;
use crate::post::adapter::outgoing::post_query_postgres::PostQueryPostgres;
use crate::post::adapter::outgoing::post_repository_postgres::PostRepositoryPostgres;
use crate::post::application::use_cases::{
    create_post::{CreatePostUseCase, ICreatePostUseCase},
    list_posts::{IListPostsUseCase, ListPostsUseCase},
    list_user_posts::{IListUserPostsUseCase, ListUserPostsUseCase},
};
use crate::shared::api::custom_json_config;

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub signup_user_use_case: Arc<dyn ISignupUserUseCase + Send + Sync>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub forget_password_use_case: Arc<dyn IForgetPasswordUseCase + Send + Sync>,
    pub verify_otp_use_case: Arc<dyn IVerifyOtpUseCase + Send + Sync>,
    pub get_otp_expiry_use_case: Arc<dyn IGetOtpExpiryUseCase + Send + Sync>,
    pub reset_password_use_case: Arc<dyn IResetPasswordUseCase + Send + Sync>,
    pub fetch_session_user_use_case: Arc<dyn IFetchSessionUserUseCase + Send + Sync>,
    pub list_posts_use_case: Arc<dyn IListPostsUseCase + Send + Sync>,
    pub create_post_use_case: Arc<dyn ICreatePostUseCase + Send + Sync>,
    pub list_user_posts_use_case: Arc<dyn IListUserPostsUseCase + Send + Sync>,
    pub env: Environment,
}

#[actix_web::main]
async fn start() -> std::io::Result<()> {
    use crate::auth::application::ports::outgoing::token_provider::TokenProvider;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let app_config = AppConfig::from_env();

    // SMTP SETUPS
    let smtp_sender = if app_config.environment == Environment::Test {
        // Local Mailpit
        let host = std::env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string());
        let port: u16 = std::env::var("SMTP_PORT")
            .unwrap_or_else(|_| "1025".to_string())
            .parse()
            .expect("Invalid SMTP_PORT");

        SmtpEmailSender::new_local(&host, port, &app_config.email_from)
    } else {
        // Production SMTP
        let smtp_server = std::env::var("SMTP_SERVER").expect("SMTP_SERVER not set");
        let smtp_user = std::env::var("SMTP_USERNAME").expect("SMTP_USERNAME not set");
        let smtp_pass = std::env::var("SMTP_PASSWORD").expect("SMTP_PASSWORD not set");

        SmtpEmailSender::new(&smtp_server, &smtp_user, &smtp_pass, &app_config.email_from)
            .expect("Failed to build SMTP transport")
    };

    let server_url = app_config.server_url();
    info!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(&app_config.database_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Outgoing adapters
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let post_query = PostQueryPostgres::new(Arc::clone(&db_arc));
    let post_repo = PostRepositoryPostgres::new(Arc::clone(&db_arc));

    let jwt_service = JwtTokenService::new(JwtConfig::from_env());

    let otp_email_service = OtpEmailService::new(Arc::new(smtp_sender));
    let otp_notifier_arc: Arc<dyn OtpNotifier + Send + Sync> = Arc::new(otp_email_service);

    // Use cases
    let signup_user_use_case =
        SignupUserUseCase::new(user_query.clone(), user_repo.clone(), BcryptHasher);
    let login_user_use_case =
        LoginUserUseCase::new(user_query.clone(), BcryptHasher, jwt_service.clone());
    let forget_password_use_case = ForgetPasswordUseCase::new(
        user_query.clone(),
        user_repo.clone(),
        Arc::clone(&otp_notifier_arc),
    );
    let verify_otp_use_case =
        VerifyOtpUseCase::new(user_query.clone(), user_repo.clone(), jwt_service.clone());
    let get_otp_expiry_use_case = GetOtpExpiryUseCase::new(user_query.clone());
    let reset_password_use_case =
        ResetPasswordUseCase::new(user_query.clone(), user_repo.clone(), BcryptHasher);
    let fetch_session_user_use_case =
        FetchSessionUserUseCase::new(user_query.clone(), post_query.clone());

    let list_posts_use_case = ListPostsUseCase::new(post_query.clone());
    let create_post_use_case = CreatePostUseCase::new(post_repo.clone(), user_query.clone());
    let list_user_posts_use_case = ListUserPostsUseCase::new(post_query, user_query);

    let state = AppState {
        signup_user_use_case: Arc::new(signup_user_use_case),
        login_user_use_case: Arc::new(login_user_use_case),
        forget_password_use_case: Arc::new(forget_password_use_case),
        verify_otp_use_case: Arc::new(verify_otp_use_case),
        get_otp_expiry_use_case: Arc::new(get_otp_expiry_use_case),
        reset_password_use_case: Arc::new(reset_password_use_case),
        fetch_session_user_use_case: Arc::new(fetch_session_user_use_case),
        list_posts_use_case: Arc::new(list_posts_use_case),
        create_post_use_case: Arc::new(create_post_use_case),
        list_user_posts_use_case: Arc::new(list_user_posts_use_case),
        env: app_config.environment,
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::signup_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::forget_password_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::verify_otp_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::get_otp_expiry_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::reset_password_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::session_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_handler);
    // Posts
    cfg.service(crate::post::adapter::incoming::web::routes::list_posts_handler);
    cfg.service(crate::post::adapter::incoming::web::routes::create_post_handler);
    cfg.service(crate::post::adapter::incoming::web::routes::list_user_posts_handler);
    // OpenAPI document
    cfg.route(
        "/api-docs/openapi.json",
        web::get().to(crate::api::openapi::serve_openapi),
    );
}

fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
