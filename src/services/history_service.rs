use rust_decimal::Decimal;
use std::sync::Arc;

use super::account_service::AccountService;
use crate::error::{AppError, AppResult};
use crate::store::SharedStore;
use crate::types::account::Account;
use crate::types::history::{CreateHistoryRequest, History, HistoryPatch};

/// The ledger. Entries are appended by transfers and wallet operations.
pub struct HistoryService {
    histories: SharedStore<History>,
    accounts: Arc<AccountService>,
}

impl HistoryService {
    pub fn new(histories: SharedStore<History>, accounts: Arc<AccountService>) -> Self {
        Self {
            histories,
            accounts,
        }
    }

    /// Record a signed balance change against an account snapshot.
    pub async fn append(&self, account: &Account, amount: Decimal) -> AppResult<History> {
        let entry = self
            .histories
            .save(History {
                id: 0,
                account_id: account.id,
                account: account.clone(),
                amount,
                created_at: chrono::Utc::now(),
            })
            .await?;

        log::debug!(
            "History {} recorded {} on account {}",
            entry.id,
            amount,
            account.id
        );
        Ok(entry)
    }

    pub async fn create(&self, req: CreateHistoryRequest) -> AppResult<History> {
        if req.amount.is_zero() {
            return Err(AppError::Validation("amount must not be 0".to_string()));
        }
        let account = self.accounts.find_with_owner(req.account_id).await?;
        self.append(&account, req.amount).await
    }

    pub async fn find_all(&self) -> AppResult<Vec<History>> {
        Ok(self.histories.find_all().await?)
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<History> {
        Ok(self.histories.find_by_id(id).await?)
    }

    pub async fn find_by_account_id(&self, account_id: i64) -> AppResult<Vec<History>> {
        Ok(self
            .histories
            .find_all()
            .await?
            .into_iter()
            .filter(|h| h.account_id == account_id)
            .collect())
    }

    pub async fn update(&self, id: i64, patch: HistoryPatch) -> AppResult<History> {
        let mut entry = self.find_by_id(id).await?;

        if let Some(amount) = patch.amount {
            if amount.is_zero() {
                return Err(AppError::Validation("amount must not be 0".to_string()));
            }
            entry.amount = amount;
        }
        let account_id = patch.account_id.unwrap_or(entry.account_id);
        entry.account = self.accounts.find_with_owner(account_id).await?;
        entry.account_id = account_id;

        Ok(self.histories.update(entry).await?)
    }

    pub async fn delete(&self, id: i64) -> AppResult<History> {
        Ok(self.histories.delete(id).await?)
    }
}
