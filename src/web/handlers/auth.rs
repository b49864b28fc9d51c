//! Registration, login and logout handlers.

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::auth::{hash_password, verify_password};
use crate::db::{NewUser, UserRepository};
use crate::web::error::WebError;
use crate::web::flash;
use crate::web::middleware::{clear_session_cookie, session_cookie};
use crate::web::pages;
use crate::AppError;

use super::AppState;

const MSG_ALREADY_REGISTERED: &str = "User already exists! Please log in.";
const MSG_UNKNOWN_USER: &str = "User does not exist!";
const MSG_BAD_PASSWORD: &str = "Password is incorrect! Please try again.";

/// Registration form fields.
///
/// Missing fields default to empty strings; beyond the duplicate-email
/// check there is no server-side field validation.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Login form fields.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// POST /register - Create an account and establish a session.
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<RegisterForm>,
) -> Result<Response, WebError> {
    let repo = UserRepository::new(state.db.pool());

    if repo.email_exists(&form.email).await? {
        let jar = flash::set(jar, MSG_ALREADY_REGISTERED);
        return Ok((jar, Redirect::to("/login")).into_response());
    }

    let password_hash = hash_password(&form.password).map_err(|e| {
        tracing::error!("password hashing failed: {}", e);
        WebError::Internal
    })?;

    // Display name is capped at the configured length
    let name: String = form.name.chars().take(state.max_name_length).collect();

    let user = match repo.create(&NewUser::new(&form.email, password_hash, name)).await {
        Ok(user) => user,
        // Lost a race with a concurrent registration; same outcome as
        // the exists check above.
        Err(AppError::DuplicateEmail(_)) => {
            let jar = flash::set(jar, MSG_ALREADY_REGISTERED);
            return Ok((jar, Redirect::to("/login")).into_response());
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(user_id = user.id, "new user registered");

    let token = state.sessions.login(&user).map_err(|e| {
        tracing::error!("failed to establish session: {}", e);
        WebError::Internal
    })?;

    Ok((jar.add(session_cookie(token)), Redirect::to("/secrets")).into_response())
}

/// POST /login - Verify credentials and establish a session.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<Response, WebError> {
    let repo = UserRepository::new(state.db.pool());

    let user = match repo.find_by_email(&form.email).await? {
        Some(user) => user,
        None => {
            let jar = flash::set(jar, MSG_UNKNOWN_USER);
            return Ok((jar, Redirect::to("/login")).into_response());
        }
    };

    if !verify_password(&form.password, &user.password_hash) {
        tracing::debug!(user_id = user.id, "login failed: password mismatch");
        // Re-render the form with the notice instead of redirecting.
        // The inline notice replaces any pending flash, which is
        // consumed here so it cannot resurface later.
        let (jar, _) = flash::take(jar);
        return Ok((jar, Html(pages::login_page(Some(MSG_BAD_PASSWORD)))).into_response());
    }

    tracing::info!(user_id = user.id, "user logged in");

    let token = state.sessions.login(&user).map_err(|e| {
        tracing::error!("failed to establish session: {}", e);
        WebError::Internal
    })?;

    Ok((jar.add(session_cookie(token)), Redirect::to("/secrets")).into_response())
}

/// GET /logout - Destroy the session and return home.
pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    (clear_session_cookie(jar), Redirect::to("/"))
}
