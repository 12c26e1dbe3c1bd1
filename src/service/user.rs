//! User business logic

use crate::domain::{CreateUserInput, Role, UserSummary};
use crate::error::{AppError, Result};
use crate::repository::UserRepository;
use crate::service::auth::hash_password;
use std::sync::Arc;
use validator::Validate;

pub struct UserService<R: UserRepository> {
    repo: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Create a user without issuing a token
    pub async fn create(&self, input: CreateUserInput) -> Result<UserSummary> {
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

        Ok(user.summary())
    }

    /// List all users with the farmer role
    pub async fn list_farmers(&self) -> Result<Vec<UserSummary>> {
        let users = self.repo.list_by_role(Role::Farmer).await?;
        Ok(users.iter().map(|u| u.summary()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::User;
    use crate::repository::user::MockUserRepository;
    use chrono::Utc;
    use mockall::predicate::*;

    fn test_user(id: i64, email: &str, role: Role) -> User {
        User {
            id,
            name: format!("User {id}"),
            email: email.to_string(),
            password_hash: "$argon2id$test".to_string(),
            role,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_user_success() {
        let mut mock = MockUserRepository::new();

        mock.expect_find_by_email()
            .with(eq("amina@example.com"))
            .returning(|_| Ok(None));

        mock.expect_create()
            .returning(|name, email, password_hash, role| {
                Ok(User {
                    id: 5,
                    name: name.to_string(),
                    email: email.to_string(),
                    password_hash: password_hash.to_string(),
                    role,
                    created_at: Utc::now(),
                })
            });

        let service = UserService::new(Arc::new(mock));
        let summary = service
            .create(CreateUserInput {
                name: "Amina".to_string(),
                email: "amina@example.com".to_string(),
                password: "hunter2hunter2".to_string(),
                role: Role::Farmer,
                latitude: None,
                longitude: None,
            })
            .await
            .unwrap();

        assert_eq!(summary.id, 5);
        assert_eq!(summary.role, Role::Farmer);
    }

    #[tokio::test]
    async fn test_create_user_duplicate_email() {
        let mut mock = MockUserRepository::new();

        mock.expect_find_by_email()
            .returning(|_| Ok(Some(test_user(1, "existing@example.com", Role::Farmer))));

        let service = UserService::new(Arc::new(mock));
        let result = service
            .create(CreateUserInput {
                name: "Amina".to_string(),
                email: "existing@example.com".to_string(),
                password: "hunter2hunter2".to_string(),
                role: Role::Farmer,
                latitude: None,
                longitude: None,
            })
            .await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_list_farmers() {
        let mut mock = MockUserRepository::new();

        mock.expect_list_by_role()
            .with(eq(Role::Farmer))
            .returning(|_| {
                Ok(vec![
                    test_user(1, "a@example.com", Role::Farmer),
                    test_user(2, "b@example.com", Role::Farmer),
                ])
            });

        let service = UserService::new(Arc::new(mock));
        let farmers = service.list_farmers().await.unwrap();
        assert_eq!(farmers.len(), 2);
        assert!(farmers.iter().all(|f| f.role == Role::Farmer));
    }
}
