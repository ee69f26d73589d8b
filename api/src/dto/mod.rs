//! Request and response bodies for the HTTP surface.

pub mod auth;

pub use auth::{RequestCodeRequest, RequestCodeResponse, VerifyCodeRequest, VerifyCodeResponse};
