use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::account::Account;
use crate::store::Record;

/// One signed balance change on one account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct History {
    pub id: i64,
    #[serde(rename = "id_account")]
    pub account_id: i64,
    pub account: Account,
    /// Negative for a debit, positive for a credit.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    pub created_at: DateTime<Utc>,
}

impl Record for History {
    const COLLECTION: &'static str = "history";

    fn id(&self) -> i64 {
        self.id
    }

    fn assign(&mut self, id: i64, created_at: DateTime<Utc>) {
        self.id = id;
        self.created_at = created_at;
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateHistoryRequest {
    #[serde(rename = "id_account")]
    pub account_id: i64,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
}

#[derive(Debug, Default, Deserialize)]
pub struct HistoryPatch {
    #[serde(rename = "id_account")]
    pub account_id: Option<i64>,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub amount: Option<Decimal>,
}
