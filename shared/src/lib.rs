//! Shared utilities and common types for the FoodSave server.
//!
//! This crate provides functionality used across the server crates:
//! configuration, response envelopes, and phone number utilities.

pub mod config;
pub mod types;
pub mod utils;
