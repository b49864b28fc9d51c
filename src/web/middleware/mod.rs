//! Web middleware and extractors.

mod auth;

pub use auth::{clear_session_cookie, session_cookie, AuthUser};
