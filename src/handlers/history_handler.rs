use actix_web::{web, Error, HttpResponse, Result};

use crate::services::history_service::HistoryService;
use crate::types::history::{CreateHistoryRequest, HistoryPatch};
use crate::types::response::ApiResponse;
use crate::utils::pagination::{paginate, PaginationQuery};

pub async fn create_history(
    histories: web::Data<HistoryService>,
    req: web::Json<CreateHistoryRequest>,
) -> Result<HttpResponse, Error> {
    let entry = histories.create(req.into_inner()).await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(
        "History created successfully",
        entry,
    )))
}

pub async fn get_histories(
    histories: web::Data<HistoryService>,
    query: web::Query<PaginationQuery>,
) -> Result<HttpResponse, Error> {
    let all = histories.find_all().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "History retrieved successfully",
        paginate(all, &query),
    )))
}

pub async fn get_account_history(
    histories: web::Data<HistoryService>,
    account_id: web::Path<i64>,
) -> Result<HttpResponse, Error> {
    let entries = histories.find_by_account_id(*account_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Account history retrieved successfully",
        entries,
    )))
}

pub async fn get_history(
    histories: web::Data<HistoryService>,
    history_id: web::Path<i64>,
) -> Result<HttpResponse, Error> {
    let entry = histories.find_by_id(*history_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "History retrieved successfully",
        entry,
    )))
}

pub async fn update_history(
    histories: web::Data<HistoryService>,
    history_id: web::Path<i64>,
    patch: web::Json<HistoryPatch>,
) -> Result<HttpResponse, Error> {
    let entry = histories.update(*history_id, patch.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "History updated successfully",
        entry,
    )))
}

pub async fn delete_history(
    histories: web::Data<HistoryService>,
    history_id: web::Path<i64>,
) -> Result<HttpResponse, Error> {
    let entry = histories.delete(*history_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Successfully deleted History!",
        entry,
    )))
}
