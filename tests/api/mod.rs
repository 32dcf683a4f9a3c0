//! REST API Tests

pub mod health_tests;
pub mod user_tests;
