//! Session token service implementation

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::domain::entities::token::{Claims, JWT_AUDIENCE, JWT_ISSUER};
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Signs and verifies session tokens with a shared HS256 secret.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service.
    ///
    /// Fails when the signing secret is empty; the secret is injected
    /// configuration, never a hard-coded fallback.
    pub fn new(config: TokenServiceConfig) -> Result<Self, DomainError> {
        if config.secret.is_empty() {
            return Err(DomainError::Internal {
                message: "JWT signing secret must not be empty".to_string(),
            });
        }

        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[JWT_ISSUER]);
        validation.set_audience(&[JWT_AUDIENCE]);
        validation.validate_exp = true;
        validation.validate_nbf = true;

        Ok(Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        })
    }

    /// Session token lifetime in seconds
    pub fn session_expiry_seconds(&self) -> i64 {
        self.config.expiry_days * 24 * 60 * 60
    }

    /// Mint a signed session token for a verified user.
    ///
    /// Each call produces a fresh credential; tokens are never updated.
    pub fn issue_session_token(&self, user_id: Uuid, phone: &str) -> Result<String, DomainError> {
        let claims = Claims::new_session_token(user_id, phone, self.config.expiry_days);

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, event = "token_signing_failed", "Failed to sign session token");
            DomainError::Token(TokenError::TokenGenerationFailed)
        })
    }

    /// Verify a session token's signature and validity window, returning its
    /// claims.
    pub fn verify_session_token(&self, token: &str) -> Result<Claims, DomainError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                let token_error = match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                    ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                    ErrorKind::ImmatureSignature => TokenError::TokenNotYetValid,
                    _ => TokenError::InvalidTokenFormat,
                };
                DomainError::Token(token_error)
            })
    }
}
