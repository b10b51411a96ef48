use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::history::History;

#[derive(Deserialize)]
pub struct DepositRequest {
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
}

#[derive(Deserialize)]
pub struct WithdrawRequest {
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
}

#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    pub account_id: i64,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub balance_before: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub balance_after: Decimal,
    pub history: History,
}
