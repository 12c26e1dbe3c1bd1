//! JWT token handling

use crate::config::JwtConfig;
use crate::domain::Role;
use crate::error::Result;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

const AUDIENCE: &str = "cropalert";

/// Access token claims issued at registration and login.
///
/// These claims are the sole authorization input for zone mutations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject (user ID)
    pub sub: String,
    /// Email
    pub email: String,
    /// Role at issuance time
    pub role: Role,
    /// Issuer
    pub iss: String,
    /// Audience
    pub aud: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration (Unix timestamp)
    pub exp: i64,
}

impl AccessClaims {
    /// Parse the subject claim as a user ID
    pub fn user_id(&self) -> std::result::Result<i64, std::num::ParseIntError> {
        self.sub.parse()
    }
}

/// JWT token manager
#[derive(Clone)]
pub struct JwtManager {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtManager {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());
        Self {
            config,
            encoding_key,
            decoding_key,
            algorithm: Algorithm::HS256,
        }
    }

    /// Create a Validation with a strict leeway (5 seconds) instead of the
    /// default 60 seconds, so tokens expire promptly while tolerating minor
    /// clock skew.
    fn strict_validation(&self) -> Validation {
        let mut v = Validation::new(self.algorithm);
        v.leeway = 5;
        v.set_audience(&[AUDIENCE]);
        v.set_issuer(&[&self.config.issuer]);
        v
    }

    /// Create an access token for a user
    pub fn create_access_token(&self, user_id: i64, email: &str, role: Role) -> Result<String> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.config.access_token_ttl_secs);

        let claims = AccessClaims {
            sub: user_id.to_string(),
            email: email.to_string(),
            role,
            iss: self.config.issuer.clone(),
            aud: AUDIENCE.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };
        let header = Header::new(self.algorithm);
        Ok(encode(&header, &claims, &self.encoding_key)?)
    }

    /// Verify an access token and return its claims
    pub fn verify_access_token(&self, token: &str) -> Result<AccessClaims> {
        let data = decode::<AccessClaims>(token, &self.decoding_key, &self.strict_validation())?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_manager() -> JwtManager {
        JwtManager::new(JwtConfig {
            secret: "test-secret-key-for-jwt".to_string(),
            issuer: "https://cropalert.local".to_string(),
            access_token_ttl_secs: 86400,
        })
    }

    #[test]
    fn test_create_and_verify_token() {
        let manager = test_manager();
        let token = manager
            .create_access_token(42, "amina@example.com", Role::Farmer)
            .unwrap();

        let claims = manager.verify_access_token(&token).unwrap();
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.user_id().unwrap(), 42);
        assert_eq!(claims.email, "amina@example.com");
        assert_eq!(claims.role, Role::Farmer);
        assert_eq!(claims.aud, "cropalert");
    }

    #[test]
    fn test_token_carries_role_claim() {
        let manager = test_manager();
        let token = manager
            .create_access_token(7, "yves@example.com", Role::Agronomist)
            .unwrap();
        let claims = manager.verify_access_token(&token).unwrap();
        assert_eq!(claims.role, Role::Agronomist);
    }

    #[test]
    fn test_token_expiry_is_24h() {
        let manager = test_manager();
        let token = manager
            .create_access_token(1, "a@example.com", Role::Farmer)
            .unwrap();
        let claims = manager.verify_access_token(&token).unwrap();
        assert_eq!(claims.exp - claims.iat, 86400);
    }

    #[test]
    fn test_expired_token_rejected() {
        let manager = JwtManager::new(JwtConfig {
            secret: "test-secret-key-for-jwt".to_string(),
            issuer: "https://cropalert.local".to_string(),
            access_token_ttl_secs: -60,
        });
        let token = manager
            .create_access_token(1, "a@example.com", Role::Farmer)
            .unwrap();
        assert!(manager.verify_access_token(&token).is_err());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let manager = test_manager();
        let token = manager
            .create_access_token(1, "a@example.com", Role::Farmer)
            .unwrap();

        let other = JwtManager::new(JwtConfig {
            secret: "a-different-secret".to_string(),
            issuer: "https://cropalert.local".to_string(),
            access_token_ttl_secs: 86400,
        });
        assert!(other.verify_access_token(&token).is_err());
    }
}
