//! Request-level helpers shared by the route handlers.

pub mod error;

pub use error::{domain_error_response, malformed_response};
