use crate::handlers::transfer_handler::{
    create_transfer, delete_transfer, get_transfer, get_transfers, update_transfer,
};
use actix_web::web;

pub fn configure_transfer_routes() -> actix_web::Scope {
    web::scope("/transfer")
        .route("/", web::get().to(get_transfers))
        .route("/", web::post().to(create_transfer))
        .route("/{transfer_id}", web::get().to(get_transfer))
        .route("/{transfer_id}", web::put().to(update_transfer))
        .route("/{transfer_id}", web::delete().to(delete_transfer))
}
