//! Repository Implementations
//!
//! PostgreSQL implementations of domain repository traits.
//!
//! ## Available Repositories
//!
//! - **UserRepository** - User CRUD and filtered page queries

pub mod user_repository;

// Re-export repository structs for convenience
pub use user_repository::PgUserRepository;
