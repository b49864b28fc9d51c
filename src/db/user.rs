//! User model for doorkeep.

/// User entity representing a registered user.
///
/// Created once at registration; never mutated afterwards.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID, assigned by the store.
    pub id: i64,
    /// Email address (unique).
    pub email: String,
    /// Password hash (Argon2 PHC string). Plaintext is never stored.
    pub password_hash: String,
    /// Display name.
    pub name: String,
    /// Account creation timestamp.
    pub created_at: String,
}

/// Data for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Email address.
    pub email: String,
    /// Password hash (must be pre-hashed; never plaintext).
    pub password_hash: String,
    /// Display name.
    pub name: String,
}

impl NewUser {
    /// Create a new user record with the required fields.
    pub fn new(
        email: impl Into<String>,
        password_hash: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password_hash: password_hash.into(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user() {
        let user = NewUser::new("a@x.com", "hash", "Alice");

        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.password_hash, "hash");
        assert_eq!(user.name, "Alice");
    }
}
