//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::Serialize;

use crate::application::services::{PageMetaDto, UserDto, UserPageDto};

/// User response
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
    pub created_at: String,
}

impl From<UserDto> for UserResponse {
    fn from(dto: UserDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            email: dto.email,
            age: dto.age,
            created_at: dto.created_at.to_rfc3339(),
        }
    }
}

/// Pagination metadata
#[derive(Debug, Serialize)]
pub struct PageMetaResponse {
    pub page: i64,
    pub total: i64,
    pub limit: i64,
    pub total_pages: i64,
}

impl From<PageMetaDto> for PageMetaResponse {
    fn from(meta: PageMetaDto) -> Self {
        Self {
            page: meta.page,
            total: meta.total,
            limit: meta.limit,
            total_pages: meta.total_pages,
        }
    }
}

/// One page of users
#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub data: Vec<UserResponse>,
    pub meta: PageMetaResponse,
}

impl From<UserPageDto> for UserListResponse {
    fn from(page: UserPageDto) -> Self {
        Self {
            data: page.data.into_iter().map(UserResponse::from).collect(),
            meta: PageMetaResponse::from(page.meta),
        }
    }
}

/// Delete confirmation
#[derive(Debug, Serialize)]
pub struct DeleteUserResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_user_response_formats_created_at_rfc3339() {
        let dto = UserDto {
            id: 1,
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            age: None,
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        };

        let response = UserResponse::from(dto);

        assert_eq!(response.created_at, "2024-03-01T12:00:00+00:00");
    }

    #[test]
    fn test_user_list_response_preserves_meta() {
        let page = UserPageDto {
            data: vec![],
            meta: PageMetaDto {
                page: 2,
                total: 25,
                limit: 10,
                total_pages: 3,
            },
        };

        let response = UserListResponse::from(page);

        assert_eq!(response.meta.page, 2);
        assert_eq!(response.meta.total, 25);
        assert_eq!(response.meta.total_pages, 3);
    }
}
