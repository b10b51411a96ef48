use rust_decimal::Decimal;
use std::sync::Arc;

use super::user_service::UserService;
use super::LedgerLock;
use crate::error::{AppError, AppResult};
use crate::store::SharedStore;
use crate::types::account::{Account, AccountPatch, CreateAccountRequest};

/// Owns account balances. Every write here is a single-record replace.
pub struct AccountService {
    accounts: SharedStore<Account>,
    users: Arc<UserService>,
    ledger_lock: LedgerLock,
}

impl AccountService {
    pub fn new(accounts: SharedStore<Account>, users: Arc<UserService>, ledger_lock: LedgerLock) -> Self {
        Self {
            accounts,
            users,
            ledger_lock,
        }
    }

    pub async fn create(&self, user_id: i64, req: CreateAccountRequest) -> AppResult<Account> {
        if req.balance <= Decimal::ZERO {
            return Err(AppError::Validation(
                "balance must be greater than 0".to_string(),
            ));
        }

        let owner = self.users.snapshot(user_id).await?;
        let account = self
            .accounts
            .save(Account {
                id: 0,
                user_id,
                user: Some(owner),
                balance: req.balance,
                created_at: chrono::Utc::now(),
            })
            .await?;

        log::info!(
            "Opened account {} for user {} with balance {}",
            account.id,
            user_id,
            account.balance
        );
        Ok(account)
    }

    pub async fn find_all(&self) -> AppResult<Vec<Account>> {
        Ok(self.accounts.find_all().await?)
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Account> {
        Ok(self.accounts.find_by_id(id).await?)
    }

    pub async fn find_by_user_id(&self, user_id: i64) -> AppResult<Vec<Account>> {
        let owned: Vec<Account> = self
            .accounts
            .find_all()
            .await?
            .into_iter()
            .filter(|a| a.user_id == user_id)
            .collect();

        if owned.is_empty() {
            return Err(AppError::NotFound(format!(
                "no accounts found for userID: {}",
                user_id
            )));
        }
        Ok(owned)
    }

    /// Load an account and refresh its owner snapshot in memory.
    pub async fn find_with_owner(&self, id: i64) -> AppResult<Account> {
        let account = self.find_by_id(id).await?;
        self.with_owner(account).await
    }

    /// Refresh the owner snapshot of an already loaded account.
    pub async fn with_owner(&self, mut account: Account) -> AppResult<Account> {
        account.user = Some(self.users.snapshot(account.user_id).await?);
        Ok(account)
    }

    /// Patch owner and/or balance. A balance patch shares the ledger lock
    /// with transfers, deposits and withdrawals.
    pub async fn update(&self, id: i64, patch: AccountPatch) -> AppResult<Account> {
        let _ledger = super::hold(&self.ledger_lock).await;
        let mut account = self.find_by_id(id).await?;

        if let Some(user_id) = patch.user_id {
            if user_id == 0 {
                return Err(AppError::Validation("id_user is required".to_string()));
            }
            account.user_id = user_id;
        }
        if let Some(balance) = patch.balance {
            if balance < Decimal::ZERO {
                return Err(AppError::Validation(
                    "balance must not be negative".to_string(),
                ));
            }
            account.balance = balance;
        }
        account.user = Some(self.users.snapshot(account.user_id).await?);

        self.replace(account).await
    }

    /// Write an account back as-is.
    pub async fn replace(&self, account: Account) -> AppResult<Account> {
        Ok(self.accounts.update(account).await?)
    }

    pub async fn delete(&self, id: i64) -> AppResult<Account> {
        Ok(self.accounts.delete(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::TestBank;
    use crate::types::transfer::TransferRequest;

    #[actix_rt::test]
    async fn create_embeds_the_owner_snapshot() {
        let bank = TestBank::new();
        let alice = bank.user("alice").await;
        let account = bank.account(alice.id, 250).await;

        let owner = account.user.expect("owner snapshot");
        assert_eq!(owner.id, alice.id);
        assert_eq!(owner.username, "alice");
        assert_eq!(account.balance, Decimal::from(250));
    }

    #[actix_rt::test]
    async fn create_requires_positive_balance_and_known_owner() {
        let bank = TestBank::new();
        let alice = bank.user("alice").await;
        let accounts = &bank.services.accounts;

        let zero = accounts
            .create(alice.id, CreateAccountRequest { balance: Decimal::ZERO })
            .await;
        let orphan = accounts
            .create(99, CreateAccountRequest { balance: Decimal::ONE })
            .await;

        assert!(matches!(zero, Err(AppError::Validation(_))));
        assert!(matches!(orphan, Err(AppError::NotFound(_))));
    }

    #[actix_rt::test]
    async fn find_by_user_id_lists_only_owned_accounts() {
        let bank = TestBank::new();
        let alice = bank.user("alice").await;
        let bob = bank.user("bob").await;
        bank.account(alice.id, 10).await;
        bank.account(bob.id, 20).await;
        bank.account(alice.id, 30).await;

        let owned = bank
            .services
            .accounts
            .find_by_user_id(alice.id)
            .await
            .expect("owned");
        assert_eq!(owned.len(), 2);
        assert!(owned.iter().all(|a| a.user_id == alice.id));

        let carol = bank.user("carol").await;
        assert!(matches!(
            bank.services.accounts.find_by_user_id(carol.id).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[actix_rt::test]
    async fn update_keeps_absent_fields_and_accepts_zero_balance() {
        let bank = TestBank::new();
        let alice = bank.user("alice").await;
        let account = bank.account(alice.id, 100).await;

        let emptied = bank
            .services
            .accounts
            .update(
                account.id,
                AccountPatch {
                    balance: Some(Decimal::ZERO),
                    ..Default::default()
                },
            )
            .await
            .expect("update");

        assert_eq!(emptied.balance, Decimal::ZERO);
        assert_eq!(emptied.user_id, alice.id);
        assert_eq!(emptied.created_at, account.created_at);
    }

    #[actix_rt::test]
    async fn update_rejects_negative_balance() {
        let bank = TestBank::new();
        let alice = bank.user("alice").await;
        let account = bank.account(alice.id, 100).await;

        let result = bank
            .services
            .accounts
            .update(
                account.id,
                AccountPatch {
                    balance: Some(Decimal::from(-1)),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(bank.balance(account.id).await, Decimal::from(100));
    }

    #[actix_rt::test]
    async fn balances_beyond_f64_precision_are_stored_exactly() {
        let bank = TestBank::new();
        let alice = bank.user("alice").await;
        let big: Decimal = "9007199254740993.25".parse().expect("decimal");
        let first = bank
            .services
            .accounts
            .create(alice.id, CreateAccountRequest { balance: big })
            .await
            .expect("create");
        let second = bank.account(alice.id, 10).await;

        assert_eq!(bank.balance(first.id).await, big);
        let raw = std::fs::read_to_string(bank.dir.path().join("account.json")).expect("read");
        assert!(raw.contains("9007199254740993.25"));

        bank.services
            .accounts
            .update(
                first.id,
                AccountPatch {
                    balance: Some(Decimal::MAX),
                    ..Default::default()
                },
            )
            .await
            .expect("max balance");
        let touched = bank
            .services
            .accounts
            .update(
                second.id,
                AccountPatch {
                    balance: Some(Decimal::from(11)),
                    ..Default::default()
                },
            )
            .await
            .expect("collection still decodes");

        assert_eq!(touched.balance, Decimal::from(11));
        assert_eq!(bank.balance(first.id).await, Decimal::MAX);
    }

    #[actix_rt::test]
    async fn balance_patch_shares_the_ledger_lock_with_transfers() {
        let bank = TestBank::new();
        let alice = bank.user("alice").await;
        let source = bank.account(alice.id, 1000).await;
        let dest = bank.account(alice.id, 500).await;
        let services = bank.services_with_accounts(bank.stores.accounts.clone(), true);

        let (transfer, patched) = tokio::join!(
            services.transfers.execute(TransferRequest {
                from_account_id: source.id,
                to_account_id: dest.id,
                amount: Decimal::from(600),
            }),
            services.accounts.update(
                source.id,
                AccountPatch {
                    balance: Some(Decimal::from(2000)),
                    ..Default::default()
                },
            ),
        );
        transfer.expect("transfer");
        patched.expect("patch");

        // Either order is fine; a transfer write landing on top of the patch is not.
        let settled = bank.balance(source.id).await;
        assert!(
            settled == Decimal::from(2000) || settled == Decimal::from(1400),
            "source settled at {}",
            settled
        );
        assert_eq!(bank.balance(dest.id).await, Decimal::from(1100));
    }
}
