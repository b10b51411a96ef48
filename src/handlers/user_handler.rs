use actix_web::{web, Error, HttpResponse, Result};

use crate::middleware::auth::AuthenticatedUser;
use crate::services::user_service::UserService;
use crate::types::response::ApiResponse;
use crate::types::user::{CreateUserRequest, UserPatch, UserResponse};

pub async fn create_user(
    users: web::Data<UserService>,
    req: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, Error> {
    let user = users.create(req.into_inner()).await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(
        "User registered successfully",
        UserResponse::from(user),
    )))
}

pub async fn get_users(users: web::Data<UserService>) -> Result<HttpResponse, Error> {
    let all: Vec<UserResponse> = users
        .find_all()
        .await?
        .into_iter()
        .map(UserResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success("Users retrieved successfully", all)))
}

pub async fn get_user_details(
    users: web::Data<UserService>,
    user_id: web::Path<i64>,
) -> Result<HttpResponse, Error> {
    let user = users.find_by_id(*user_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "User details retrieved successfully",
        UserResponse::from(user),
    )))
}

pub async fn get_user_by_username(
    users: web::Data<UserService>,
    username: web::Path<String>,
) -> Result<HttpResponse, Error> {
    let user = users.find_by_username(&username).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "User details retrieved successfully",
        UserResponse::from(user),
    )))
}

pub async fn get_current_user_details(
    users: web::Data<UserService>,
    auth_user: web::ReqData<AuthenticatedUser>,
) -> Result<HttpResponse, Error> {
    let user = users.find_by_id(auth_user.id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Current user details retrieved successfully",
        UserResponse::from(user),
    )))
}

pub async fn update_user(
    users: web::Data<UserService>,
    user_id: web::Path<i64>,
    patch: web::Json<UserPatch>,
) -> Result<HttpResponse, Error> {
    let user = users.update(*user_id, patch.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "User updated successfully",
        UserResponse::from(user),
    )))
}

pub async fn delete_user(
    users: web::Data<UserService>,
    user_id: web::Path<i64>,
) -> Result<HttpResponse, Error> {
    let user = users.delete(*user_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Successfully deleted User!",
        UserResponse::from(user),
    )))
}
