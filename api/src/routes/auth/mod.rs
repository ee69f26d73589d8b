//! Authentication route handlers: requesting a verification code and
//! exchanging a submitted code for a session.

pub mod request_code;
pub mod verify_code;

use std::sync::Arc;

use fs_core::repositories::UserRepository;
use fs_core::services::auth::AuthService;
use fs_core::services::verification::{CodeStore, SmsSender};
use fs_shared::config::AppConfig;

/// Shared application state handed to every handler
pub struct AppState<C, S, U>
where
    C: CodeStore,
    S: SmsSender,
    U: UserRepository,
{
    pub auth_service: Arc<AuthService<C, S, U>>,
    pub config: AppConfig,
}

impl<C, S, U> AppState<C, S, U>
where
    C: CodeStore,
    S: SmsSender,
    U: UserRepository,
{
    /// Create application state from the wired services and configuration
    pub fn new(auth_service: Arc<AuthService<C, S, U>>, config: AppConfig) -> Self {
        Self {
            auth_service,
            config,
        }
    }
}
