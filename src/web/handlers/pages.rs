//! Page-rendering handlers.

use axum::response::{Html, IntoResponse};
use axum_extra::extract::cookie::CookieJar;

use crate::web::flash;
use crate::web::middleware::AuthUser;
use crate::web::pages;

/// GET / - Landing page.
pub async fn home(jar: CookieJar) -> impl IntoResponse {
    let (jar, message) = flash::take(jar);
    (jar, Html(pages::home_page(message.as_deref())))
}

/// GET /register - Registration form.
pub async fn register_form(jar: CookieJar) -> impl IntoResponse {
    let (jar, message) = flash::take(jar);
    (jar, Html(pages::register_page(message.as_deref())))
}

/// GET /login - Login form.
pub async fn login_form(jar: CookieJar) -> impl IntoResponse {
    let (jar, message) = flash::take(jar);
    (jar, Html(pages::login_page(message.as_deref())))
}

/// GET /secrets - Guarded member page showing the caller's name.
pub async fn secrets(AuthUser(user): AuthUser, jar: CookieJar) -> impl IntoResponse {
    let (jar, message) = flash::take(jar);
    (jar, Html(pages::secrets_page(&user.name, message.as_deref())))
}
