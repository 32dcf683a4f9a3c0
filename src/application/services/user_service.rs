//! User Service
//!
//! Implements the five user management use cases: create, read-one,
//! read-page, update, and delete. Enforces the email-uniqueness and
//! existence invariants the store's interface does not express, and
//! builds offset-based page queries with optional text search.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{NewUser, User, UserPageRequest, UserRepository};
use crate::shared::error::AppError;

/// Default page number when the caller omits one.
const DEFAULT_PAGE: i64 = 1;

/// Default page size when the caller omits one.
const DEFAULT_LIMIT: i64 = 10;

/// User service trait
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create a new user, rejecting duplicate emails
    async fn create_user(&self, input: CreateUserDto) -> Result<UserDto, UserError>;

    /// Get user by ID
    async fn get_user(&self, id: i64) -> Result<UserDto, UserError>;

    /// List one page of users, optionally filtered by a search term
    async fn list_users(&self, query: ListUsersDto) -> Result<UserPageDto, UserError>;

    /// Apply a partial update to an existing user
    async fn update_user(&self, id: i64, patch: UpdateUserDto) -> Result<UserDto, UserError>;

    /// Delete a user by ID
    async fn delete_user(&self, id: i64) -> Result<(), UserError>;
}

/// User data transfer object
#[derive(Debug, Clone, PartialEq)]
pub struct UserDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            age: user.age,
            created_at: user.created_at,
        }
    }
}

/// Create user request
#[derive(Debug, Clone)]
pub struct CreateUserDto {
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
}

/// Partial update request; absent fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct UpdateUserDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
}

/// Page query parameters as received from the caller
#[derive(Debug, Clone, Default)]
pub struct ListUsersDto {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub search: Option<String>,
}

/// Pagination metadata for a listing response
#[derive(Debug, Clone, PartialEq)]
pub struct PageMetaDto {
    pub page: i64,
    pub total: i64,
    pub limit: i64,
    pub total_pages: i64,
}

/// One page of users plus pagination metadata
#[derive(Debug, Clone)]
pub struct UserPageDto {
    pub data: Vec<UserDto>,
    pub meta: PageMetaDto,
}

/// User service errors
#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("User not found")]
    NotFound,

    #[error("Email already in use")]
    DuplicateEmail,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Store error: {0}")]
    Store(AppError),
}

/// UserService implementation
pub struct UserServiceImpl<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> UserServiceImpl<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl<U> UserService for UserServiceImpl<U>
where
    U: UserRepository + 'static,
{
    async fn create_user(&self, input: CreateUserDto) -> Result<UserDto, UserError> {
        // Pre-check is an optimization; the unique index at the store is
        // the final arbiter when two creates race.
        let existing = self
            .user_repo
            .find_by_email(&input.email)
            .await
            .map_err(UserError::Store)?;

        if existing.is_some() {
            return Err(UserError::DuplicateEmail);
        }

        let candidate = NewUser {
            name: input.name,
            email: input.email,
            age: input.age,
        };

        let user = self
            .user_repo
            .insert(&candidate)
            .await
            .map_err(|e| match e {
                AppError::Conflict(_) => UserError::DuplicateEmail,
                e => UserError::Store(e),
            })?;

        Ok(UserDto::from(user))
    }

    async fn get_user(&self, id: i64) -> Result<UserDto, UserError> {
        let user = self
            .user_repo
            .find_by_id(id)
            .await
            .map_err(UserError::Store)?
            .ok_or(UserError::NotFound)?;

        Ok(UserDto::from(user))
    }

    async fn list_users(&self, query: ListUsersDto) -> Result<UserPageDto, UserError> {
        let page = query.page.unwrap_or(DEFAULT_PAGE);
        let limit = query.limit.unwrap_or(DEFAULT_LIMIT);

        // Non-positive values are caller bugs; reject rather than clamp.
        if page < 1 {
            return Err(UserError::InvalidInput(
                "page must be a positive integer".into(),
            ));
        }
        if limit < 1 {
            return Err(UserError::InvalidInput(
                "limit must be a positive integer".into(),
            ));
        }

        // Checked math: an absurdly large page must come back as a bad
        // request, not an overflow panic or a negative offset at the store.
        let offset = page
            .checked_sub(1)
            .and_then(|p| p.checked_mul(limit))
            .ok_or_else(|| {
                UserError::InvalidInput("page is out of range for the given limit".into())
            })?;
        let search = query.search.filter(|s| !s.is_empty());

        let (users, total) = self
            .user_repo
            .list_page(UserPageRequest {
                search,
                offset,
                limit,
            })
            .await
            .map_err(UserError::Store)?;

        // Computed from the store's total so callers can detect
        // end-of-results even when the slice is shorter than the limit.
        let total_pages = (total + limit - 1) / limit;

        Ok(UserPageDto {
            data: users.into_iter().map(UserDto::from).collect(),
            meta: PageMetaDto {
                page,
                total,
                limit,
                total_pages,
            },
        })
    }

    async fn update_user(&self, id: i64, patch: UpdateUserDto) -> Result<UserDto, UserError> {
        let mut user = self
            .user_repo
            .find_by_id(id)
            .await
            .map_err(UserError::Store)?
            .ok_or(UserError::NotFound)?;

        // Changing the email re-runs the duplicate check used by create,
        // so the uniqueness invariant holds on the update path too.
        if let Some(ref new_email) = patch.email {
            if new_email != &user.email {
                let taken = self
                    .user_repo
                    .find_by_email(new_email)
                    .await
                    .map_err(UserError::Store)?
                    .is_some_and(|other| other.id != user.id);

                if taken {
                    return Err(UserError::DuplicateEmail);
                }
                user.email = new_email.clone();
            }
        }

        // Merge only the supplied fields; id and created_at are never
        // reachable through the patch.
        if let Some(name) = patch.name {
            user.name = name;
        }
        if let Some(age) = patch.age {
            user.age = Some(age);
        }

        let updated = self.user_repo.update(&user).await.map_err(|e| match e {
            AppError::Conflict(_) => UserError::DuplicateEmail,
            AppError::NotFound(_) => UserError::NotFound,
            e => UserError::Store(e),
        })?;

        Ok(UserDto::from(updated))
    }

    async fn delete_user(&self, id: i64) -> Result<(), UserError> {
        self.user_repo
            .find_by_id(id)
            .await
            .map_err(UserError::Store)?
            .ok_or(UserError::NotFound)?;

        self.user_repo.delete(id).await.map_err(|e| match e {
            AppError::NotFound(_) => UserError::NotFound,
            e => UserError::Store(e),
        })?;

        Ok(())
    }
}
