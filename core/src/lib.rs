//! # FoodSave Core
//!
//! Core business logic and domain layer for the FoodSave backend.
//! This crate contains the verification-code store and protocol, the session
//! token service, repository interfaces, and the domain error types that the
//! HTTP layer builds on.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::user::User;
pub use domain::value_objects::AuthResponse;
pub use errors::{AuthError, DomainError, DomainResult, TokenError, ValidationError};
