use crate::handlers::history_handler::{
    create_history, delete_history, get_account_history, get_histories, get_history,
    update_history,
};
use actix_web::web;

pub fn configure_history_routes() -> actix_web::Scope {
    web::scope("/history")
        .route("/", web::get().to(get_histories))
        .route("/", web::post().to(create_history))
        .route("/account/{account_id}", web::get().to(get_account_history))
        .route("/{history_id}", web::get().to(get_history))
        .route("/{history_id}", web::put().to(update_history))
        .route("/{history_id}", web::delete().to(delete_history))
}
