use crate::types::response::ApiResponse;
use actix_web::{HttpResponse, Result};

pub async fn health_check() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::status("Flatfile Bank API is running", "healthy")))
}

pub async fn index() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::status("Welcome to Flatfile Bank API", "success")))
}
