//! Session authentication extractor.

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::auth::SESSION_COOKIE;
use crate::db::User;
use crate::web::error::WebError;
use crate::web::handlers::AppState;

/// Build the session cookie carrying a freshly issued token.
pub fn session_cookie(token: String) -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, token);
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie
}

/// Remove the session cookie from the jar.
pub fn clear_session_cookie(jar: CookieJar) -> CookieJar {
    let mut removal = Cookie::from(SESSION_COOKIE);
    removal.set_path("/");
    jar.remove(removal)
}

/// Extractor guarding a route behind a valid session.
///
/// Resolves the session cookie to the active user. The rejection
/// redirects to the login page; an unauthenticated request never turns
/// into a server error.
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = WebError;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut Parts,
        state: &'life1 AppState,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let jar = CookieJar::from_headers(&parts.headers);
            let token = jar
                .get(SESSION_COOKIE)
                .map(|c| c.value().to_string())
                .ok_or(WebError::Unauthenticated)?;

            match state.sessions.current_user(&token).await {
                Ok(Some(user)) => Ok(AuthUser(user)),
                Ok(None) => Err(WebError::Unauthenticated),
                Err(e) => {
                    tracing::error!("session resolution failed: {}", e);
                    Err(WebError::Internal)
                }
            }
        })
    }
}
