//! Download endpoint tests.
//!
//! The download serves one fixed, deployment-configured file and is
//! only reachable with a valid session.

use std::io::Write;
use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use doorkeep::auth::{pool_loader, SessionManager};
use doorkeep::web::{create_router, AppState};
use doorkeep::Database;
use tempfile::NamedTempFile;

/// Create a test server whose download path points at `path`.
async fn create_test_server(path: &std::path::Path) -> TestServer {
    let db = Arc::new(
        Database::open_in_memory()
            .await
            .expect("Failed to create test database"),
    );

    let sessions = Arc::new(SessionManager::new(
        "test-secret-key-for-testing-only",
        3600,
        pool_loader(db.pool().clone()),
    ));

    let state = AppState::new(db, sessions, path, 1000);

    let mut server = TestServer::new(create_router(state)).expect("Failed to create test server");
    server.save_cookies();
    server
}

fn fixture_file(content: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".pdf").expect("Failed to create temp file");
    file.write_all(content).expect("Failed to write temp file");
    file
}

async fn log_in(server: &TestServer) {
    let response = server
        .post("/register")
        .form(&[("name", "Alice"), ("email", "a@x.com"), ("password", "pw1")])
        .await;
    response.assert_status(StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_download_requires_session() {
    let file = fixture_file(b"%PDF-1.4 cheat sheet");
    let server = create_test_server(file.path()).await;

    let response = server.get("/download").await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/login");
}

#[tokio::test]
async fn test_download_serves_file() {
    let file = fixture_file(b"%PDF-1.4 cheat sheet");
    let server = create_test_server(file.path()).await;
    log_in(&server).await;

    let response = server.get("/download").await;

    response.assert_status_ok();
    assert_eq!(response.as_bytes().as_ref(), b"%PDF-1.4 cheat sheet");
}

#[tokio::test]
async fn test_download_headers() {
    let file = fixture_file(b"%PDF-1.4 cheat sheet");
    let server = create_test_server(file.path()).await;
    log_in(&server).await;

    let response = server.get("/download").await;

    response.assert_status_ok();
    assert_eq!(response.header("content-type"), "application/pdf");
    assert_eq!(response.header("content-length"), "20");

    let disposition = response.header("content-disposition");
    let disposition = disposition.to_str().unwrap();
    assert!(disposition.starts_with("attachment; filename=\""));
    assert!(disposition.ends_with(".pdf\""));
}

#[tokio::test]
async fn test_download_missing_file_is_not_found() {
    let server = create_test_server(std::path::Path::new("/nonexistent/cheat_sheet.pdf")).await;
    log_in(&server).await;

    let response = server.get("/download").await;

    response.assert_status(StatusCode::NOT_FOUND);
}
