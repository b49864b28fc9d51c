//! One-time flash messages carried in a short-lived cookie.
//!
//! A flash is set on one response and consumed (and cleared) by the
//! next rendered page. Values are percent-encoded so arbitrary message
//! text stays cookie-safe.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

/// Name of the flash cookie.
pub const FLASH_COOKIE: &str = "flash";

/// Store a flash message for the next rendered page.
pub fn set(jar: CookieJar, message: &str) -> CookieJar {
    let mut cookie = Cookie::new(FLASH_COOKIE, urlencoding::encode(message).into_owned());
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    jar.add(cookie)
}

/// Take the pending flash message, clearing it from the jar.
pub fn take(jar: CookieJar) -> (CookieJar, Option<String>) {
    match jar.get(FLASH_COOKIE) {
        Some(cookie) => {
            let message = urlencoding::decode(cookie.value())
                .map(|s| s.into_owned())
                .ok();
            let mut removal = Cookie::from(FLASH_COOKIE);
            removal.set_path("/");
            (jar.remove(removal), message)
        }
        None => (jar, None),
    }
}
