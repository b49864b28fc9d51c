//! Session management for doorkeep.
//!
//! A session is an opaque signed token (HS256) bound to a user id,
//! carried by the client in a cookie. The manager only issues and
//! resolves tokens; cookie handling lives in the web layer.

use std::sync::Arc;

use futures::future::BoxFuture;
use futures::FutureExt;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use thiserror::Error;
use uuid::Uuid;

use crate::db::{User, UserRepository};
use crate::Result;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "session";

/// Default session lifetime (24 hours).
pub const DEFAULT_SESSION_TTL_SECS: u64 = 24 * 60 * 60;

/// Session-related errors.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Failed to sign a session token.
    #[error("failed to sign session token: {0}")]
    Signing(String),
}

/// Capability for anything that can be bound to a session.
pub trait Identifiable {
    /// Stable identifier for this entity.
    fn id(&self) -> i64;
}

impl Identifiable for User {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Claims carried by a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (user ID).
    pub sub: i64,
    /// Issued at timestamp.
    pub iat: u64,
    /// Expiration timestamp.
    pub exp: u64,
    /// Token ID (unique identifier).
    pub jti: String,
}

/// Function resolving a user id to a user record.
///
/// Injected at construction so the session manager stays independent of
/// the storage layer.
pub type UserLoader = Arc<dyn Fn(i64) -> BoxFuture<'static, Result<Option<User>>> + Send + Sync>;

/// Build a [`UserLoader`] backed by the user repository.
pub fn pool_loader(pool: SqlitePool) -> UserLoader {
    Arc::new(move |id| {
        let pool = pool.clone();
        async move { UserRepository::new(&pool).find_by_id(id).await }.boxed()
    })
}

/// Issues session tokens on login and resolves them back to users.
pub struct SessionManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_secs: u64,
    loader: UserLoader,
}

impl SessionManager {
    /// Create a new session manager.
    ///
    /// `secret` signs the tokens; `ttl_secs` bounds their lifetime;
    /// `loader` resolves a token's user id to a user record.
    pub fn new(secret: &str, ttl_secs: u64, loader: UserLoader) -> Self {
        let mut validation = Validation::default();
        validation.validate_exp = true;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl_secs,
            loader,
        }
    }

    /// Issue a session token bound to the given identity.
    pub fn login(&self, user: &impl Identifiable) -> std::result::Result<String, SessionError> {
        let now = chrono::Utc::now().timestamp() as u64;
        let claims = SessionClaims {
            sub: user.id(),
            iat: now,
            exp: now + self.ttl_secs,
            jti: Uuid::new_v4().to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| SessionError::Signing(e.to_string()))
    }

    /// Resolve a session token to the active user.
    ///
    /// Returns `None` for an invalid, tampered or expired token, and for
    /// a token whose user no longer resolves. Storage failures from the
    /// loader propagate.
    pub async fn current_user(&self, token: &str) -> Result<Option<User>> {
        let data = match decode::<SessionClaims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => data,
            Err(e) => {
                tracing::debug!("session token rejected: {}", e);
                return Ok(None);
            }
        };

        (self.loader)(data.claims.sub).await
    }
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("ttl_secs", &self.ttl_secs)
            .finish()
    }
}
