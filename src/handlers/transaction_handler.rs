use actix_web::{web, Error, HttpResponse, Result};

use crate::middleware::auth::AuthenticatedUser;
use crate::services::wallet_service::WalletService;
use crate::types::response::ApiResponse;
use crate::types::transaction::{DepositRequest, WithdrawRequest};

pub async fn deposit_money(
    wallet: web::Data<WalletService>,
    account_id: web::Path<i64>,
    req: web::Json<DepositRequest>,
    auth_user: web::ReqData<AuthenticatedUser>,
) -> Result<HttpResponse, Error> {
    let receipt = wallet
        .deposit(auth_user.id, *account_id, req.amount)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Deposit successful", receipt)))
}

pub async fn withdraw_money(
    wallet: web::Data<WalletService>,
    account_id: web::Path<i64>,
    req: web::Json<WithdrawRequest>,
    auth_user: web::ReqData<AuthenticatedUser>,
) -> Result<HttpResponse, Error> {
    let receipt = wallet
        .withdraw(auth_user.id, *account_id, req.amount)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Withdrawal successful", receipt)))
}
