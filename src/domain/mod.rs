//! # Domain Layer
//!
//! The domain layer contains the core business entities of the service.
//! It is independent of any external frameworks or infrastructure concerns.
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Repository traits define data access contracts
//! - Entities carry no behavior beyond their data

pub mod entities;

// Re-export commonly used types
pub use entities::*;
