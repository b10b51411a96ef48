use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::user::UserSnapshot;
use crate::store::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    #[serde(rename = "id_user")]
    pub user_id: i64,
    #[serde(default)]
    pub user: Option<UserSnapshot>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub balance: Decimal,
    pub created_at: DateTime<Utc>,
}

impl Record for Account {
    const COLLECTION: &'static str = "account";

    fn id(&self) -> i64 {
        self.id
    }

    fn assign(&mut self, id: i64, created_at: DateTime<Utc>) {
        self.id = id;
        self.created_at = created_at;
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub balance: Decimal,
}

/// Partial account update; absent fields keep their stored value.
#[derive(Debug, Default, Deserialize)]
pub struct AccountPatch {
    #[serde(rename = "id_user")]
    pub user_id: Option<i64>,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub balance: Option<Decimal>,
}
