use bcrypt::{hash, verify};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::store::SharedStore;
use crate::types::user::{CreateUserRequest, User, UserPatch, UserSnapshot};

pub struct UserService {
    users: SharedStore<User>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(users: SharedStore<User>, bcrypt_cost: u32) -> Self {
        Self { users, bcrypt_cost }
    }

    pub async fn create(&self, req: CreateUserRequest) -> AppResult<User> {
        req.validate()?;
        self.ensure_username_free(&req.username, None).await?;

        let password = self.hash_password(&req.password)?;
        let user = self
            .users
            .save(User {
                id: 0,
                username: req.username,
                email: req.email,
                password,
                created_at: chrono::Utc::now(),
            })
            .await?;

        log::info!("Created user {} ({})", user.id, user.username);
        Ok(user)
    }

    pub async fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(self.users.find_all().await?)
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<User> {
        Ok(self.users.find_by_id(id).await?)
    }

    pub async fn find_by_username(&self, username: &str) -> AppResult<User> {
        self.users
            .find_all()
            .await?
            .into_iter()
            .find(|u| u.username == username)
            .ok_or_else(|| AppError::NotFound(format!("user by username: {} not found", username)))
    }

    /// Owner copy used to enrich accounts and sessions.
    pub async fn snapshot(&self, id: i64) -> AppResult<UserSnapshot> {
        let user = self.find_by_id(id).await?;
        Ok(UserSnapshot::from(&user))
    }

    pub async fn update(&self, id: i64, patch: UserPatch) -> AppResult<User> {
        patch.validate()?;
        let mut user = self.find_by_id(id).await?;

        if let Some(username) = patch.username {
            if username != user.username {
                self.ensure_username_free(&username, Some(id)).await?;
            }
            user.username = username;
        }
        if let Some(email) = patch.email {
            user.email = email;
        }
        if let Some(password) = patch.password {
            user.password = self.hash_password(&password)?;
        }

        Ok(self.users.update(user).await?)
    }

    pub async fn delete(&self, id: i64) -> AppResult<User> {
        Ok(self.users.delete(id).await?)
    }

    /// Check a username/password pair; both failure modes look the same.
    pub async fn verify_credentials(&self, username: &str, password: &str) -> AppResult<User> {
        let invalid = || AppError::Unauthorized("Invalid username or password".to_string());

        let user = match self.find_by_username(username).await {
            Ok(user) => user,
            Err(AppError::NotFound(_)) => return Err(invalid()),
            Err(e) => return Err(e),
        };

        let is_valid = verify(password, &user.password).map_err(|e| {
            log::error!("Password verification error: {}", e);
            AppError::Internal("Error verifying password".to_string())
        })?;

        if !is_valid {
            return Err(invalid());
        }
        Ok(user)
    }

    fn hash_password(&self, password: &str) -> AppResult<String> {
        hash(password, self.bcrypt_cost).map_err(|e| {
            log::error!("Password hashing error: {}", e);
            AppError::Internal("Error processing password".to_string())
        })
    }

    async fn ensure_username_free(&self, username: &str, except: Option<i64>) -> AppResult<()> {
        let taken = self
            .users
            .find_all()
            .await?
            .iter()
            .any(|u| u.username == username && Some(u.id) != except);

        if taken {
            return Err(AppError::Conflict("Username is already taken".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::TestBank;

    fn request(username: &str, email: &str, password: &str) -> CreateUserRequest {
        CreateUserRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[actix_rt::test]
    async fn create_hashes_the_password() {
        let bank = TestBank::new();
        let user = bank
            .services
            .users
            .create(request("alice", "alice@example.com", "password123"))
            .await
            .expect("create");

        assert_eq!(user.id, 1);
        assert_ne!(user.password, "password123");
        assert!(verify("password123", &user.password).expect("verify"));
    }

    #[actix_rt::test]
    async fn create_validates_fields() {
        let bank = TestBank::new();
        let users = &bank.services.users;

        let short_name = users.create(request("al", "al@example.com", "password123")).await;
        let bad_email = users.create(request("alice", "not-an-email", "password123")).await;
        let short_password = users.create(request("alice", "alice@example.com", "short")).await;

        assert!(matches!(short_name, Err(AppError::Validation(_))));
        assert!(matches!(bad_email, Err(AppError::Validation(_))));
        assert!(matches!(short_password, Err(AppError::Validation(_))));
        assert!(users.find_all().await.expect("find_all").is_empty());
    }

    #[actix_rt::test]
    async fn duplicate_username_is_a_conflict() {
        let bank = TestBank::new();
        bank.user("alice").await;

        let again = bank
            .services
            .users
            .create(request("alice", "other@example.com", "password123"))
            .await;
        assert!(matches!(again, Err(AppError::Conflict(_))));
    }

    #[actix_rt::test]
    async fn update_keeps_absent_fields() {
        let bank = TestBank::new();
        let alice = bank.user("alice").await;

        let updated = bank
            .services
            .users
            .update(
                alice.id,
                UserPatch {
                    email: Some("new@example.com".to_string()),
                    ..Default::default()
                },
            )
            .await
            .expect("update");

        assert_eq!(updated.username, "alice");
        assert_eq!(updated.email, "new@example.com");
        assert_eq!(updated.password, alice.password);
        assert_eq!(updated.created_at, alice.created_at);
    }

    #[actix_rt::test]
    async fn update_rehashes_a_new_password() {
        let bank = TestBank::new();
        let alice = bank.user("alice").await;

        let updated = bank
            .services
            .users
            .update(
                alice.id,
                UserPatch {
                    password: Some("another-secret".to_string()),
                    ..Default::default()
                },
            )
            .await
            .expect("update");

        assert!(verify("another-secret", &updated.password).expect("verify"));
    }

    #[actix_rt::test]
    async fn verify_credentials_rejects_unknown_user_and_bad_password() {
        let bank = TestBank::new();
        bank.user("alice").await;
        let users = &bank.services.users;

        assert!(users.verify_credentials("alice", TestBank::PASSWORD).await.is_ok());
        assert!(matches!(
            users.verify_credentials("alice", "wrong-password").await,
            Err(AppError::Unauthorized(_))
        ));
        assert!(matches!(
            users.verify_credentials("bob", TestBank::PASSWORD).await,
            Err(AppError::Unauthorized(_))
        ));
    }

    #[actix_rt::test]
    async fn find_by_username_reports_missing_user() {
        let bank = TestBank::new();
        let err = bank
            .services
            .users
            .find_by_username("ghost")
            .await
            .expect_err("missing");
        assert_eq!(err.to_string(), "user by username: ghost not found");
    }
}
