use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::account::Account;
use crate::error::{AppError, AppResult};
use crate::store::Record;

/// A funds movement between two accounts, with both accounts as they were
/// right after the move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transfer {
    pub id: i64,
    pub from_account_id: i64,
    pub from_account: Account,
    pub to_account_id: i64,
    pub to_account: Account,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    pub created_at: DateTime<Utc>,
}

impl Record for Transfer {
    const COLLECTION: &'static str = "transfer";

    fn id(&self) -> i64 {
        self.id
    }

    fn assign(&mut self, id: i64, created_at: DateTime<Utc>) {
        self.id = id;
        self.created_at = created_at;
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransferRequest {
    pub from_account_id: i64,
    pub to_account_id: i64,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
}

impl TransferRequest {
    pub fn validate(&self) -> AppResult<()> {
        validate_legs(self.from_account_id, self.to_account_id)?;
        validate_amount(self.amount)
    }
}

/// Partial transfer update; absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransferPatch {
    pub from_account_id: Option<i64>,
    pub to_account_id: Option<i64>,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub amount: Option<Decimal>,
}

pub(crate) fn validate_legs(from_account_id: i64, to_account_id: i64) -> AppResult<()> {
    if from_account_id == 0 {
        return Err(AppError::Validation("from_account_id is required".to_string()));
    }
    if to_account_id == 0 {
        return Err(AppError::Validation("to_account_id is required".to_string()));
    }
    if from_account_id == to_account_id {
        return Err(AppError::Validation(
            "from_account_id and to_account_id must differ".to_string(),
        ));
    }
    Ok(())
}

pub(crate) fn validate_amount(amount: Decimal) -> AppResult<()> {
    if amount <= Decimal::ZERO {
        return Err(AppError::Validation(
            "Amount must be greater than 0".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(from: i64, to: i64, amount: i64) -> TransferRequest {
        TransferRequest {
            from_account_id: from,
            to_account_id: to,
            amount: Decimal::from(amount),
        }
    }

    #[test]
    fn rejects_missing_or_equal_accounts() {
        assert!(matches!(request(0, 2, 10).validate(), Err(AppError::Validation(_))));
        assert!(matches!(request(1, 0, 10).validate(), Err(AppError::Validation(_))));
        assert!(matches!(request(3, 3, 10).validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn rejects_non_positive_amounts() {
        assert!(request(1, 2, 0).validate().is_err());
        assert!(request(1, 2, -5).validate().is_err());
        assert!(request(1, 2, 5).validate().is_ok());
    }

    #[test]
    fn explicit_zero_in_patch_is_not_absent() {
        let patch: TransferPatch = serde_json::from_str(r#"{"amount": 0}"#).expect("parse");
        assert_eq!(patch.amount, Some(Decimal::ZERO));
        assert_eq!(patch.from_account_id, None);

        let empty: TransferPatch = serde_json::from_str("{}").expect("parse");
        assert_eq!(empty.amount, None);
    }
}
