use std::sync::Arc;

use super::session_service::SessionService;
use super::user_service::UserService;
use crate::error::{AppError, AppResult};
use crate::types::auth::LoginRequest;
use crate::types::session::{CreateSessionRequest, Session};
use crate::utils::jwt::{create_jwt_token, TokenConfig};

pub struct AuthService {
    users: Arc<UserService>,
    sessions: Arc<SessionService>,
    token_config: TokenConfig,
}

impl AuthService {
    pub fn new(users: Arc<UserService>, sessions: Arc<SessionService>, token_config: TokenConfig) -> Self {
        Self {
            users,
            sessions,
            token_config,
        }
    }

    /// Check credentials, issue a token and record it as a session.
    pub async fn login(&self, req: LoginRequest) -> AppResult<String> {
        let user = self
            .users
            .verify_credentials(&req.username, &req.password)
            .await?;

        let token = create_jwt_token(user.id, &self.token_config).map_err(|e| {
            log::error!("JWT token creation error: {}", e);
            AppError::Internal("Failed to create authentication token".to_string())
        })?;

        self.sessions
            .create(CreateSessionRequest {
                user_id: user.id,
                token: token.clone(),
            })
            .await?;

        log::info!("User {} logged in", user.id);
        Ok(token)
    }

    pub async fn logout(&self, token: &str) -> AppResult<Session> {
        let session = self.sessions.delete_by_token(token).await?;
        log::info!("User {} logged out", session.user_id);
        Ok(session)
    }
}
