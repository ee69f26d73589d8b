pub mod user;

pub use user::{MemoryUserRepository, UserRepository};
