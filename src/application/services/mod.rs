//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **UserService**: User CRUD, uniqueness enforcement, page queries

pub mod user_service;

// Re-export user service types
pub use user_service::{
    CreateUserDto, ListUsersDto, PageMetaDto, UpdateUserDto, UserDto, UserError, UserPageDto,
    UserService, UserServiceImpl,
};
