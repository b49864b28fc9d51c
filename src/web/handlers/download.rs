//! File download handler.

use axum::{
    body::Body,
    extract::State,
    http::header,
    response::Response,
};

use crate::web::error::WebError;
use crate::web::middleware::AuthUser;

use super::AppState;

/// GET /download - Serve the fixed configured file to a logged-in user.
///
/// The path is set at deployment and never taken from the request, so
/// there is no traversal surface.
pub async fn download(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Response, WebError> {
    let content = tokio::fs::read(&state.download_path).await.map_err(|e| {
        tracing::error!(
            "failed to read download file {:?}: {}",
            state.download_path,
            e
        );
        WebError::NotFound
    })?;

    tracing::debug!(user_id = user.id, "serving download");

    let filename = state
        .download_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("download");

    let content_type = mime_guess::from_path(&state.download_path)
        .first_or_octet_stream()
        .to_string();

    let response = Response::builder()
        .header(header::CONTENT_TYPE, content_type)
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        )
        .header(header::CONTENT_LENGTH, content.len())
        .body(Body::from(content))
        .map_err(|e| {
            tracing::error!("failed to build response: {}", e);
            WebError::Internal
        })?;

    Ok(response)
}
