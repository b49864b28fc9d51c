//! Route handlers for doorkeep.

mod auth;
mod download;
mod pages;

pub use auth::{login, logout, register, LoginForm, RegisterForm};
pub use download::download;
pub use pages::{home, login_form, register_form, secrets};

use std::path::PathBuf;
use std::sync::Arc;

use crate::auth::SessionManager;
use crate::Database;

/// Application state shared across handlers.
///
/// All request-scoped dependencies are injected here; there is no
/// module-level state.
#[derive(Clone)]
pub struct AppState {
    /// Credential store.
    pub db: Arc<Database>,
    /// Session manager.
    pub sessions: Arc<SessionManager>,
    /// Fixed path of the file served by `/download`.
    pub download_path: PathBuf,
    /// Maximum stored length of a display name.
    pub max_name_length: usize,
}

impl AppState {
    /// Create a new application state.
    pub fn new(
        db: Arc<Database>,
        sessions: Arc<SessionManager>,
        download_path: impl Into<PathBuf>,
        max_name_length: usize,
    ) -> Self {
        Self {
            db,
            sessions,
            download_path: download_path.into(),
            max_name_length,
        }
    }
}
