use actix_web::web;

use crate::handlers::health::{health_check, index};
use crate::services::Services;
use crate::utils::jwt::TokenConfig;

/// Registers shared state and every route on an app or test service.
pub fn configure_app(cfg: &mut web::ServiceConfig, services: &Services, token_config: &TokenConfig) {
    cfg.app_data(web::Data::new(token_config.clone()))
        .app_data(web::Data::from(services.users.clone()))
        .app_data(web::Data::from(services.accounts.clone()))
        .app_data(web::Data::from(services.histories.clone()))
        .app_data(web::Data::from(services.transfers.clone()))
        .app_data(web::Data::from(services.sessions.clone()))
        .app_data(web::Data::from(services.auth.clone()))
        .app_data(web::Data::from(services.wallet.clone()))
        .service(configure_routes());
}

pub fn configure_routes() -> actix_web::Scope {
    web::scope("")
        .route("/", web::get().to(index))
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api")
                .service(crate::routes::auth::configure_auth_routes())
                .service(crate::routes::user::configure_user_routes())
                .service(crate::routes::account::configure_account_routes())
                .service(crate::routes::history::configure_history_routes())
                .service(crate::routes::transfer::configure_transfer_routes())
                .service(crate::routes::session::configure_session_routes()),
        )
}
