//! Authentication for doorkeep: password hashing and session management.

mod password;
mod session;

pub use password::{hash_password, verify_password, PasswordError};
pub use session::{
    pool_loader, Identifiable, SessionClaims, SessionError, SessionManager, UserLoader,
    DEFAULT_SESSION_TTL_SECS, SESSION_COOKIE,
};
