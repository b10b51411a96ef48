use actix_web::{web, Error, HttpRequest, HttpResponse, Result};
use serde_json::json;

use crate::error::AppError;
use crate::services::auth_service::AuthService;
use crate::types::auth::LoginRequest;
use crate::types::response::ApiResponse;
use crate::utils::auth::bearer_token;

pub async fn login(
    auth: web::Data<AuthService>,
    req: web::Json<LoginRequest>,
) -> Result<HttpResponse, Error> {
    let token = auth.login(req.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Login successful",
        json!({ "token": token }),
    )))
}

pub async fn logout(auth: web::Data<AuthService>, req: HttpRequest) -> Result<HttpResponse, Error> {
    let token = bearer_token(&req)
        .ok_or_else(|| AppError::Unauthorized("Missing authorization header".to_string()))?;

    auth.logout(token).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::status("Logout successful", "success")))
}
