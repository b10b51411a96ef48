use rust_decimal::Decimal;
use std::sync::Arc;

use super::account_service::AccountService;
use super::history_service::HistoryService;
use super::LedgerLock;
use crate::error::{balance_overflow, AppError, AppResult};
use crate::types::account::Account;
use crate::types::transaction::TransactionResponse;
use crate::types::transfer::validate_amount;

/// Deposits and withdrawals on a single owned account.
///
/// Each one is two writes (balance, then history) with the same lack of
/// rollback as a transfer.
pub struct WalletService {
    accounts: Arc<AccountService>,
    histories: Arc<HistoryService>,
    ledger_lock: LedgerLock,
}

impl WalletService {
    pub fn new(accounts: Arc<AccountService>, histories: Arc<HistoryService>, ledger_lock: LedgerLock) -> Self {
        Self {
            accounts,
            histories,
            ledger_lock,
        }
    }

    pub async fn deposit(&self, owner_id: i64, account_id: i64, amount: Decimal) -> AppResult<TransactionResponse> {
        validate_amount(amount)?;
        let _ledger = super::hold(&self.ledger_lock).await;

        let account = self.owned_account(owner_id, account_id).await?;
        self.apply(account, amount).await
    }

    pub async fn withdraw(&self, owner_id: i64, account_id: i64, amount: Decimal) -> AppResult<TransactionResponse> {
        validate_amount(amount)?;
        let _ledger = super::hold(&self.ledger_lock).await;

        let account = self.owned_account(owner_id, account_id).await?;
        if account.balance < amount {
            log::warn!(
                "Withdrawal of {} from account {} rejected: balance is {}",
                amount,
                account.id,
                account.balance
            );
            return Err(AppError::InsufficientFunds {
                account_id: account.id,
                balance: account.balance,
                requested: amount,
            });
        }
        self.apply(account, -amount).await
    }

    async fn owned_account(&self, owner_id: i64, account_id: i64) -> AppResult<Account> {
        let account = self.accounts.find_with_owner(account_id).await?;
        if account.user_id != owner_id {
            return Err(AppError::Unauthorized(
                "Account does not belong to the authenticated user".to_string(),
            ));
        }
        Ok(account)
    }

    async fn apply(&self, mut account: Account, delta: Decimal) -> AppResult<TransactionResponse> {
        let balance_before = account.balance;
        account.balance = account
            .balance
            .checked_add(delta)
            .ok_or_else(|| balance_overflow(account.id))?;

        let account = self.accounts.replace(account).await?;
        let history = self.histories.append(&account, delta).await?;

        log::info!(
            "Account {} balance {} -> {}",
            account.id,
            balance_before,
            account.balance
        );
        Ok(TransactionResponse {
            account_id: account.id,
            amount: delta.abs(),
            balance_before,
            balance_after: account.balance,
            history,
        })
    }
}
