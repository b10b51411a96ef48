use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    error::{ErrorInternalServerError, ErrorUnauthorized},
    web, Error, HttpMessage,
};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use std::rc::Rc;

use crate::utils::auth::bearer_token;
use crate::utils::jwt::{validate_jwt_token, TokenConfig};

/// Identity of the caller, inserted into request extensions.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub id: i64,
}

pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let svc = self.service.clone();

        Box::pin(async move {
            let token_config = req
                .app_data::<web::Data<TokenConfig>>()
                .cloned()
                .ok_or_else(|| ErrorInternalServerError("Token configuration missing"))?;

            let token = bearer_token(req.request())
                .ok_or_else(|| ErrorUnauthorized("Missing authorization header"))?;

            let claims = validate_jwt_token(token, &token_config).map_err(|e| {
                log::debug!("Rejected token: {}", e);
                ErrorUnauthorized("Invalid token")
            })?;
            let id = claims
                .user_id()
                .ok_or_else(|| ErrorUnauthorized("Invalid user ID in token"))?;

            req.extensions_mut().insert(AuthenticatedUser { id });
            svc.call(req).await
        })
    }
}
