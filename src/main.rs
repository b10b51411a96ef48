use actix_cors::Cors;
use actix_web::{middleware::Logger, App, HttpServer};
use dotenv::dotenv;

mod constants;
mod error;
mod handlers;
mod middleware;
mod routes;
mod services;
mod store;
mod types;
mod utils;

use constants::config;
use services::{ServiceSettings, Services, Stores};
use utils::jwt::TokenConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let data_dir = config::get_data_dir();
    std::fs::create_dir_all(&data_dir)?;

    let token_config = TokenConfig::from_env();
    let services = Services::new(
        Stores::json_files(&data_dir),
        ServiceSettings {
            bcrypt_cost: config::get_bcrypt_cost(),
            token: token_config.clone(),
            serialize_transfers: config::get_serialize_transfers(),
        },
    );

    let server_address = config::get_server_address();
    log::info!("Starting Flatfile Bank API server...");
    log::info!("Collections stored under {}", data_dir.display());
    if config::get_serialize_transfers() {
        log::info!("Balance-changing operations are serialized");
    }
    log::info!("Server will be available at http://{}", server_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .configure(|cfg| routes::api::configure_app(cfg, &services, &token_config))
    })
    .bind(&server_address)?
    .run()
    .await
}
