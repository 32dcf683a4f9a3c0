//! User entity and repository trait.
//!
//! Maps to the `users` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Represents a user record.
///
/// Maps to the `users` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - name: TEXT NOT NULL
/// - email: TEXT NOT NULL UNIQUE
/// - age: INTEGER NULL
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Primary key, assigned by the database
    pub id: i64,

    /// Display name (no uniqueness constraint)
    pub name: String,

    /// Email address (unique)
    pub email: String,

    /// Age in years (optional)
    pub age: Option<i32>,

    /// Record creation timestamp, default ordering key for listings
    pub created_at: DateTime<Utc>,
}

/// Candidate record for insertion.
///
/// Deliberately excludes `id` and `created_at` so callers cannot supply
/// system-assigned fields.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
}

/// A page request forwarded to the store.
///
/// `search` is a case-insensitive substring predicate applied to
/// name OR email; `offset`/`limit` bound the slice.
#[derive(Debug, Clone, PartialEq)]
pub struct UserPageRequest {
    pub search: Option<String>,
    pub offset: i64,
    pub limit: i64,
}

/// Repository trait for User data access operations.
///
/// Implementations of this trait handle the actual database interactions.
/// The trait is defined in the domain layer to maintain dependency inversion.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new record; the store assigns id and created_at.
    ///
    /// A unique-constraint violation on email surfaces as `AppError::Conflict`.
    async fn insert(&self, candidate: &NewUser) -> Result<User, AppError>;

    /// Find a user by their ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// List one page of users ordered by created_at descending, together
    /// with the total number of records matching the filter.
    async fn list_page(&self, request: UserPageRequest) -> Result<(Vec<User>, i64), AppError>;

    /// Persist mutations to an existing record.
    async fn update(&self, user: &User) -> Result<User, AppError>;

    /// Delete a user by ID (hard delete).
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_user() -> User {
        User {
            id: 42,
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            age: Some(30),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_user_serialization_includes_required_fields() {
        let user = create_test_user();

        let serialized = serde_json::to_string(&user).expect("Failed to serialize user");

        assert!(serialized.contains("\"id\":42"));
        assert!(serialized.contains("\"name\":\"Test User\""));
        assert!(serialized.contains("\"email\":\"test@example.com\""));
        assert!(serialized.contains("\"age\":30"));
    }

    #[test]
    fn test_user_serialization_null_age() {
        let mut user = create_test_user();
        user.age = None;

        let serialized = serde_json::to_string(&user).expect("Failed to serialize user");

        assert!(serialized.contains("\"age\":null"));
    }

    #[test]
    fn test_user_clone_preserves_fields() {
        let user = create_test_user();
        let cloned = user.clone();

        assert_eq!(user, cloned);
    }

    #[test]
    fn test_new_user_has_no_system_fields() {
        // NewUser carries only caller-supplied fields; id/created_at are
        // assigned by the store at insert time.
        let candidate = NewUser {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            age: None,
        };

        assert_eq!(candidate.name, "Alice");
        assert_eq!(candidate.email, "alice@example.com");
        assert!(candidate.age.is_none());
    }
}
