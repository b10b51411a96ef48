use actix_web::{web, Error, HttpResponse, Result};

use crate::middleware::auth::AuthenticatedUser;
use crate::services::account_service::AccountService;
use crate::types::account::{AccountPatch, CreateAccountRequest};
use crate::types::response::ApiResponse;

pub async fn create_account(
    accounts: web::Data<AccountService>,
    req: web::Json<CreateAccountRequest>,
    auth_user: web::ReqData<AuthenticatedUser>,
) -> Result<HttpResponse, Error> {
    let account = accounts.create(auth_user.id, req.into_inner()).await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(
        "Account created successfully",
        account,
    )))
}

pub async fn get_accounts(accounts: web::Data<AccountService>) -> Result<HttpResponse, Error> {
    let all = accounts.find_all().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Accounts retrieved successfully",
        all,
    )))
}

pub async fn get_account(
    accounts: web::Data<AccountService>,
    account_id: web::Path<i64>,
) -> Result<HttpResponse, Error> {
    let account = accounts.find_by_id(*account_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Account retrieved successfully",
        account,
    )))
}

pub async fn get_my_accounts(
    accounts: web::Data<AccountService>,
    auth_user: web::ReqData<AuthenticatedUser>,
) -> Result<HttpResponse, Error> {
    let owned = accounts.find_by_user_id(auth_user.id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Accounts of current user retrieved successfully",
        owned,
    )))
}

pub async fn update_account(
    accounts: web::Data<AccountService>,
    account_id: web::Path<i64>,
    patch: web::Json<AccountPatch>,
) -> Result<HttpResponse, Error> {
    let account = accounts.update(*account_id, patch.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Account updated successfully",
        account,
    )))
}

pub async fn delete_account(
    accounts: web::Data<AccountService>,
    account_id: web::Path<i64>,
) -> Result<HttpResponse, Error> {
    let account = accounts.delete(*account_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Successfully deleted Account!",
        account,
    )))
}
