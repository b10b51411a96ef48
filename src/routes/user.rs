use crate::handlers::user_handler::{
    create_user, delete_user, get_current_user_details, get_user_by_username, get_user_details,
    get_users, update_user,
};
use crate::middleware::auth::AuthMiddleware;
use actix_web::web;

pub fn configure_user_routes() -> actix_web::Scope {
    web::scope("/user")
        .route("/", web::get().to(get_users))
        .route("/", web::post().to(create_user))
        .route("/get", web::get().to(get_current_user_details).wrap(AuthMiddleware))
        .route("/username/{username}", web::get().to(get_user_by_username))
        .route("/{user_id}", web::get().to(get_user_details))
        .route("/{user_id}", web::put().to(update_user))
        .route("/{user_id}", web::delete().to(delete_user))
}
