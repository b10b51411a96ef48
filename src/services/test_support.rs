//! Fixtures shared by the service and handler tests.

use async_trait::async_trait;
use rust_decimal::Decimal;
use tempfile::TempDir;
use tokio::sync::Barrier;

use super::{ServiceSettings, Services, Stores};
use crate::error::{StorageError, StorageResult};
use crate::store::{Record, RecordStore, SharedStore};
use crate::types::account::{Account, CreateAccountRequest};
use crate::types::user::{CreateUserRequest, User};
use crate::utils::jwt::TokenConfig;

/// A throwaway data directory with services wired over JSON files.
pub struct TestBank {
    pub dir: TempDir,
    pub stores: Stores,
    pub services: Services,
    pub token_config: TokenConfig,
}

impl TestBank {
    pub const PASSWORD: &'static str = "password123";

    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let stores = Stores::json_files(dir.path());
        let token_config = TokenConfig {
            secret: "test-secret".to_string(),
            expires_in_hours: 1,
        };
        let services = Services::new(stores.clone(), Self::settings(&token_config, false));

        Self {
            dir,
            stores,
            services,
            token_config,
        }
    }

    fn settings(token: &TokenConfig, serialize_transfers: bool) -> ServiceSettings {
        ServiceSettings {
            bcrypt_cost: 4,
            token: token.clone(),
            serialize_transfers,
        }
    }

    /// Services over the same files, with the account store swapped out.
    pub fn services_with_accounts(&self, accounts: SharedStore<Account>, serialize_transfers: bool) -> Services {
        let stores = Stores {
            accounts,
            ..self.stores.clone()
        };
        Services::new(stores, Self::settings(&self.token_config, serialize_transfers))
    }

    pub async fn user(&self, username: &str) -> User {
        self.services
            .users
            .create(CreateUserRequest {
                username: username.to_string(),
                email: format!("{}@example.com", username),
                password: Self::PASSWORD.to_string(),
            })
            .await
            .expect("create user")
    }

    pub async fn account(&self, user_id: i64, balance: i64) -> Account {
        self.services
            .accounts
            .create(
                user_id,
                CreateAccountRequest {
                    balance: Decimal::from(balance),
                },
            )
            .await
            .expect("create account")
    }

    pub async fn balance(&self, account_id: i64) -> Decimal {
        self.stores
            .accounts
            .find_by_id(account_id)
            .await
            .expect("account")
            .balance
    }
}

/// Delegates to a real store but fails `update` for one record id.
pub struct FailingStore<T> {
    inner: SharedStore<T>,
    fail_update_of: Option<i64>,
}

impl<T: Record> FailingStore<T> {
    pub fn new(inner: SharedStore<T>) -> Self {
        Self {
            inner,
            fail_update_of: None,
        }
    }

    pub fn fail_update_of(mut self, id: i64) -> Self {
        self.fail_update_of = Some(id);
        self
    }
}

#[async_trait]
impl<T: Record> RecordStore<T> for FailingStore<T> {
    async fn save(&self, record: T) -> StorageResult<T> {
        self.inner.save(record).await
    }

    async fn update(&self, record: T) -> StorageResult<T> {
        if self.fail_update_of == Some(record.id()) {
            return Err(StorageError::Io(std::io::Error::other("disk full")));
        }
        self.inner.update(record).await
    }

    async fn delete(&self, id: i64) -> StorageResult<T> {
        self.inner.delete(id).await
    }

    async fn find_by_id(&self, id: i64) -> StorageResult<T> {
        self.inner.find_by_id(id).await
    }

    async fn find_all(&self) -> StorageResult<Vec<T>> {
        self.inner.find_all().await
    }
}

/// Holds every `update` until `parties` callers are waiting, so concurrent
/// operations all finish their reads before anyone writes.
pub struct GatedStore<T> {
    inner: SharedStore<T>,
    barrier: Barrier,
}

impl<T: Record> GatedStore<T> {
    pub fn new(inner: SharedStore<T>, parties: usize) -> Self {
        Self {
            inner,
            barrier: Barrier::new(parties),
        }
    }
}

#[async_trait]
impl<T: Record> RecordStore<T> for GatedStore<T> {
    async fn save(&self, record: T) -> StorageResult<T> {
        self.inner.save(record).await
    }

    async fn update(&self, record: T) -> StorageResult<T> {
        self.barrier.wait().await;
        self.inner.update(record).await
    }

    async fn delete(&self, id: i64) -> StorageResult<T> {
        self.inner.delete(id).await
    }

    async fn find_by_id(&self, id: i64) -> StorageResult<T> {
        self.inner.find_by_id(id).await
    }

    async fn find_all(&self) -> StorageResult<Vec<T>> {
        self.inner.find_all().await
    }
}
