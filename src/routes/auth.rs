use crate::handlers::auth_handler::{login, logout};
use crate::middleware::auth::AuthMiddleware;
use actix_web::web;

pub fn configure_auth_routes() -> actix_web::Scope {
    web::scope("/auth")
        .route("/", web::post().to(login))
        .route("/logout", web::post().to(logout).wrap(AuthMiddleware))
}
