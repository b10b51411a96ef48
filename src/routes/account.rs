use crate::handlers::account_handler::{
    create_account, delete_account, get_account, get_accounts, get_my_accounts, update_account,
};
use crate::handlers::transaction_handler::{deposit_money, withdraw_money};
use crate::middleware::auth::AuthMiddleware;
use actix_web::web;

pub fn configure_account_routes() -> actix_web::Scope {
    web::scope("/account")
        .route("/", web::get().to(get_accounts))
        .route("/", web::post().to(create_account).wrap(AuthMiddleware))
        .route("/get", web::get().to(get_my_accounts).wrap(AuthMiddleware))
        .route("/{account_id}", web::get().to(get_account))
        .route("/{account_id}", web::put().to(update_account))
        .route("/{account_id}", web::delete().to(delete_account))
        .route("/{account_id}/deposit", web::post().to(deposit_money).wrap(AuthMiddleware))
        .route("/{account_id}/withdraw", web::post().to(withdraw_money).wrap(AuthMiddleware))
}
