use actix_web::{web, Error, HttpResponse, Result};

use crate::services::session_service::SessionService;
use crate::types::response::ApiResponse;
use crate::types::session::{CreateSessionRequest, SessionPatch};

pub async fn create_session(
    sessions: web::Data<SessionService>,
    req: web::Json<CreateSessionRequest>,
) -> Result<HttpResponse, Error> {
    let session = sessions.create(req.into_inner()).await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(
        "Session created successfully",
        session,
    )))
}

pub async fn get_sessions(sessions: web::Data<SessionService>) -> Result<HttpResponse, Error> {
    let all = sessions.find_all().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Sessions retrieved successfully",
        all,
    )))
}

pub async fn get_session(
    sessions: web::Data<SessionService>,
    session_id: web::Path<i64>,
) -> Result<HttpResponse, Error> {
    let session = sessions.find_by_id(*session_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Session retrieved successfully",
        session,
    )))
}

pub async fn update_session(
    sessions: web::Data<SessionService>,
    session_id: web::Path<i64>,
    patch: web::Json<SessionPatch>,
) -> Result<HttpResponse, Error> {
    let session = sessions.update(*session_id, patch.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Session updated successfully",
        session,
    )))
}

pub async fn delete_session(
    sessions: web::Data<SessionService>,
    session_id: web::Path<i64>,
) -> Result<HttpResponse, Error> {
    let session = sessions.delete(*session_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Successfully deleted Session!",
        session,
    )))
}
