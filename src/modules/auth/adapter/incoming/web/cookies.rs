use actix_web::cookie::{time::Duration, Cookie, SameSite};

use crate::config::Environment;

/// Session token cookie, set on login and cleared on logout.
pub const SESSION_COOKIE: &str = "token";
/// Short-lived reset authorization, set by OTP verification only.
pub const RESET_COOKIE: &str = "resetPasswordToken";

const SESSION_TTL: Duration = Duration::days(7);
const RESET_TTL: Duration = Duration::hours(1);

// Cross-site frontends need SameSite=None, which browsers only accept
// together with Secure; outside production we stay on Lax so plain
// http://localhost keeps working.
fn base_cookie(name: &'static str, value: String, env: Environment) -> Cookie<'static> {
    let mut cookie = Cookie::new(name, value);
    cookie.set_http_only(true);
    cookie.set_path("/");
    cookie.set_secure(env.is_production());
    cookie.set_same_site(if env.is_production() {
        SameSite::None
    } else {
        SameSite::Lax
    });
    cookie
}

pub fn session_cookie(token: String, env: Environment) -> Cookie<'static> {
    let mut cookie = base_cookie(SESSION_COOKIE, token, env);
    cookie.set_max_age(SESSION_TTL);
    cookie
}

pub fn reset_cookie(token: String, env: Environment) -> Cookie<'static> {
    let mut cookie = base_cookie(RESET_COOKIE, token, env);
    cookie.set_max_age(RESET_TTL);
    cookie
}

fn clear_cookie(name: &'static str, env: Environment) -> Cookie<'static> {
    let mut cookie = base_cookie(name, String::new(), env);
    cookie.set_max_age(Duration::ZERO);
    cookie
}

pub fn clear_session_cookie(env: Environment) -> Cookie<'static> {
    clear_cookie(SESSION_COOKIE, env)
}

pub fn clear_reset_cookie(env: Environment) -> Cookie<'static> {
    clear_cookie(RESET_COOKIE, env)
}
