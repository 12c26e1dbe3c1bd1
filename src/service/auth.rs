//! Authentication business logic

use crate::domain::{CreateUserInput, UserSummary};
use crate::error::{AppError, Result};
use crate::jwt::JwtManager;
use crate::repository::UserRepository;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

/// Response returned by register and login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub user: UserSummary,
}

/// Login credentials
#[derive(Debug, Clone, Deserialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

pub struct AuthService<R: UserRepository> {
    repo: Arc<R>,
    jwt: JwtManager,
}

impl<R: UserRepository> AuthService<R> {
    pub fn new(repo: Arc<R>, jwt: JwtManager) -> Self {
        Self { repo, jwt }
    }

    /// Register a new user and issue an access token.
    ///
    /// Fails with Conflict if the email is already taken.
    pub async fn register(&self, input: CreateUserInput) -> Result<AuthResponse> {
        input.validate()?;

        if self.repo.find_by_email(&input.email).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "User with email '{}' already exists",
                input.email
            )));
        }

        let password_hash = hash_password(&input.password)?;
        let user = self
            .repo
            .create(&input.name, &input.email, &password_hash, input.role)
            .await?;

        let access_token = self
            .jwt
            .create_access_token(user.id, &user.email, user.role)?;

        Ok(AuthResponse {
            access_token,
            user: user.summary(),
        })
    }

    /// Validate credentials and issue an access token.
    ///
    /// Unknown email and wrong password fail identically so the response
    /// does not reveal which one was wrong.
    pub async fn login(&self, input: LoginInput) -> Result<AuthResponse> {
        let user = self
            .repo
            .find_by_email(&input.email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Invalid credentials".to_string()))?;

        if !verify_password(&input.password, &user.password_hash)? {
            return Err(AppError::Unauthorized("Invalid credentials".to_string()));
        }

        let access_token = self
            .jwt
            .create_access_token(user.id, &user.email, user.role)?;

        Ok(AuthResponse {
            access_token,
            user: user.summary(),
        })
    }
}

/// Hash a password using Argon2
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to hash password: {e}")))?;
    Ok(hash.to_string())
}

/// Verify a password against an Argon2 PHC hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash: {e}")))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
