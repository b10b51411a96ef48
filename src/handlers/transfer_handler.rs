use actix_web::{web, Error, HttpResponse, Result};

use crate::services::transfer_service::TransferService;
use crate::types::response::ApiResponse;
use crate::types::transfer::{TransferPatch, TransferRequest};
use crate::utils::pagination::{paginate, PaginationQuery};

pub async fn create_transfer(
    transfers: web::Data<TransferService>,
    req: web::Json<TransferRequest>,
) -> Result<HttpResponse, Error> {
    let req = req.into_inner();
    req.validate()?;

    let transfer = transfers.execute(req).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Transfer completed successfully",
        transfer,
    )))
}

pub async fn get_transfers(
    transfers: web::Data<TransferService>,
    query: web::Query<PaginationQuery>,
) -> Result<HttpResponse, Error> {
    let all = transfers.find_all().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Transfers retrieved successfully",
        paginate(all, &query),
    )))
}

pub async fn get_transfer(
    transfers: web::Data<TransferService>,
    transfer_id: web::Path<i64>,
) -> Result<HttpResponse, Error> {
    let transfer = transfers.find_by_id(*transfer_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Transfer retrieved successfully",
        transfer,
    )))
}

pub async fn update_transfer(
    transfers: web::Data<TransferService>,
    transfer_id: web::Path<i64>,
    patch: web::Json<TransferPatch>,
) -> Result<HttpResponse, Error> {
    let transfer = transfers.revise(*transfer_id, patch.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Transfer updated successfully",
        transfer,
    )))
}

pub async fn delete_transfer(
    transfers: web::Data<TransferService>,
    transfer_id: web::Path<i64>,
) -> Result<HttpResponse, Error> {
    let transfer = transfers.delete(*transfer_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Successfully deleted Transfer!",
        transfer,
    )))
}
