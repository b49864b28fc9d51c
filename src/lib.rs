//! doorkeep - a small membership site.
//!
//! Registration, login, a session-guarded member page and a fixed file
//! download, backed by a single SQLite table.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod web;

pub use auth::{
    hash_password, pool_loader, verify_password, Identifiable, PasswordError, SessionError,
    SessionManager, UserLoader, SESSION_COOKIE,
};
pub use config::Config;
pub use db::{Database, NewUser, User, UserRepository};
pub use error::{AppError, Result};
pub use web::{AppState, WebServer};
