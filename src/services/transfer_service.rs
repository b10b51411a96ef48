//! Funds movement between two accounts.
//!
//! `execute` performs four independent writes: source account, destination
//! account, two history entries, then the transfer record. Nothing is rolled
//! back if a later write fails, and unless a ledger lock is configured two
//! transfers may interleave between the funds check and the balance writes.

use chrono::Utc;
use std::sync::Arc;

use super::account_service::AccountService;
use super::history_service::HistoryService;
use super::LedgerLock;
use crate::error::{balance_overflow, AppError, AppResult};
use crate::store::SharedStore;
use crate::types::transfer::{validate_amount, validate_legs, Transfer, TransferPatch, TransferRequest};

pub struct TransferService {
    transfers: SharedStore<Transfer>,
    accounts: Arc<AccountService>,
    histories: Arc<HistoryService>,
    ledger_lock: LedgerLock,
}

impl TransferService {
    pub fn new(
        transfers: SharedStore<Transfer>,
        accounts: Arc<AccountService>,
        histories: Arc<HistoryService>,
        ledger_lock: LedgerLock,
    ) -> Self {
        Self {
            transfers,
            accounts,
            histories,
            ledger_lock,
        }
    }

    /// Move `amount` from the source to the destination account.
    pub async fn execute(&self, req: TransferRequest) -> AppResult<Transfer> {
        req.validate()?;
        let _ledger = super::hold(&self.ledger_lock).await;

        let source = self.accounts.find_by_id(req.from_account_id).await?;
        let dest = self.accounts.find_by_id(req.to_account_id).await?;
        let mut source = self.accounts.with_owner(source).await?;
        let mut dest = self.accounts.with_owner(dest).await?;

        if source.balance < req.amount {
            log::warn!(
                "Transfer of {} from account {} rejected: balance is {}",
                req.amount,
                source.id,
                source.balance
            );
            return Err(AppError::InsufficientFunds {
                account_id: source.id,
                balance: source.balance,
                requested: req.amount,
            });
        }

        source.balance = source
            .balance
            .checked_sub(req.amount)
            .ok_or_else(|| balance_overflow(source.id))?;
        dest.balance = dest
            .balance
            .checked_add(req.amount)
            .ok_or_else(|| balance_overflow(dest.id))?;

        let source = self.accounts.replace(source).await?;
        let dest = self.accounts.replace(dest).await.map_err(|e| {
            log::error!(
                "Account {} was debited {} but crediting account {} failed: {}",
                source.id,
                req.amount,
                req.to_account_id,
                e
            );
            e
        })?;

        self.histories.append(&source, -req.amount).await?;
        self.histories.append(&dest, req.amount).await?;

        let transfer = self
            .transfers
            .save(Transfer {
                id: 0,
                from_account_id: source.id,
                from_account: source,
                to_account_id: dest.id,
                to_account: dest,
                amount: req.amount,
                created_at: Utc::now(),
            })
            .await?;

        log::info!(
            "Transfer {} moved {} from account {} to account {}",
            transfer.id,
            transfer.amount,
            transfer.from_account_id,
            transfer.to_account_id
        );
        Ok(transfer)
    }

    /// Patch a stored transfer and refresh its account snapshots.
    ///
    /// Balances and history are left exactly as they are, even when the
    /// amount or either account changes.
    pub async fn revise(&self, id: i64, patch: TransferPatch) -> AppResult<Transfer> {
        let previous = self.transfers.find_by_id(id).await?;

        let from_account_id = patch.from_account_id.unwrap_or(previous.from_account_id);
        let to_account_id = patch.to_account_id.unwrap_or(previous.to_account_id);
        let amount = patch.amount.unwrap_or(previous.amount);
        validate_legs(from_account_id, to_account_id)?;
        validate_amount(amount)?;

        let from_account = self.accounts.find_with_owner(from_account_id).await?;
        let to_account = self.accounts.find_with_owner(to_account_id).await?;

        if from_account_id != previous.from_account_id
            || to_account_id != previous.to_account_id
            || amount != previous.amount
        {
            log::warn!(
                "Transfer {} revised to {} from {} to {}; balances and history were not adjusted",
                id,
                amount,
                from_account_id,
                to_account_id
            );
        }

        Ok(self
            .transfers
            .update(Transfer {
                id,
                from_account_id,
                from_account,
                to_account_id,
                to_account,
                amount,
                created_at: previous.created_at,
            })
            .await?)
    }

    pub async fn find_all(&self) -> AppResult<Vec<Transfer>> {
        Ok(self.transfers.find_all().await?)
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Transfer> {
        Ok(self.transfers.find_by_id(id).await?)
    }

    /// Remove the record only; the money stays where it went.
    pub async fn delete(&self, id: i64) -> AppResult<Transfer> {
        Ok(self.transfers.delete(id).await?)
    }
}
