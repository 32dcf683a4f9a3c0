//! Domain Entities
//!
//! Core entities and the repository traits that define their data access
//! contracts.

pub mod user;

pub use user::{NewUser, User, UserPageRequest, UserRepository};

#[cfg(test)]
pub use user::MockUserRepository;
