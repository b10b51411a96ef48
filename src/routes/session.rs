use crate::handlers::session_handler::{
    create_session, delete_session, get_session, get_sessions, update_session,
};
use actix_web::web;

pub fn configure_session_routes() -> actix_web::Scope {
    web::scope("/session")
        .route("/", web::get().to(get_sessions))
        .route("/", web::post().to(create_session))
        .route("/{session_id}", web::get().to(get_session))
        .route("/{session_id}", web::put().to(update_session))
        .route("/{session_id}", web::delete().to(delete_session))
}
