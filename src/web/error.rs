//! Web error handling for doorkeep.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::web::pages;
use crate::AppError;

/// Web-layer error type.
///
/// Guard failures are recoverable and turn into a redirect to the login
/// page; everything else is a generic error page.
#[derive(Debug)]
pub enum WebError {
    /// No valid session; the caller is sent to the login page.
    Unauthenticated,
    /// Requested resource does not exist.
    NotFound,
    /// Unexpected failure; details are logged, not shown.
    Internal,
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self {
            WebError::Unauthenticated => Redirect::to("/login").into_response(),
            WebError::NotFound => {
                (StatusCode::NOT_FOUND, Html(pages::not_found_page())).into_response()
            }
            WebError::Internal => {
                (StatusCode::INTERNAL_SERVER_ERROR, Html(pages::error_page())).into_response()
            }
        }
    }
}

impl std::fmt::Display for WebError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WebError::Unauthenticated => write!(f, "unauthenticated"),
            WebError::NotFound => write!(f, "not found"),
            WebError::Internal => write!(f, "internal error"),
        }
    }
}

impl std::error::Error for WebError {}

impl From<AppError> for WebError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::NotFound(_) => WebError::NotFound,
            err => {
                tracing::error!("internal error: {}", err);
                WebError::Internal
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;

    #[test]
    fn test_unauthenticated_redirects_to_login() {
        let response = WebError::Unauthenticated.into_response();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/login"
        );
    }

    #[test]
    fn test_not_found_status() {
        let response = WebError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_internal_status() {
        let response = WebError::Internal.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_from_app_error() {
        let err: WebError = AppError::NotFound("user".to_string()).into();
        assert!(matches!(err, WebError::NotFound));

        let err: WebError = AppError::Database("boom".to_string()).into();
        assert!(matches!(err, WebError::Internal));
    }
}
