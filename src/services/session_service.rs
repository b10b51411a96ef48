use std::sync::Arc;

use super::user_service::UserService;
use crate::error::{AppError, AppResult};
use crate::store::SharedStore;
use crate::types::session::{CreateSessionRequest, Session, SessionPatch};

pub struct SessionService {
    sessions: SharedStore<Session>,
    users: Arc<UserService>,
}

impl SessionService {
    pub fn new(sessions: SharedStore<Session>, users: Arc<UserService>) -> Self {
        Self { sessions, users }
    }

    pub async fn create(&self, req: CreateSessionRequest) -> AppResult<Session> {
        if req.token.is_empty() {
            return Err(AppError::Validation("token is required".to_string()));
        }
        let owner = self.users.snapshot(req.user_id).await?;

        Ok(self
            .sessions
            .save(Session {
                id: 0,
                user_id: req.user_id,
                user: Some(owner),
                token: req.token,
                created_at: chrono::Utc::now(),
            })
            .await?)
    }

    pub async fn find_all(&self) -> AppResult<Vec<Session>> {
        Ok(self.sessions.find_all().await?)
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Session> {
        Ok(self.sessions.find_by_id(id).await?)
    }

    pub async fn update(&self, id: i64, patch: SessionPatch) -> AppResult<Session> {
        let mut session = self.find_by_id(id).await?;

        if let Some(token) = patch.token {
            if token.is_empty() {
                return Err(AppError::Validation("token is required".to_string()));
            }
            session.token = token;
        }
        if let Some(user_id) = patch.user_id {
            session.user_id = user_id;
        }
        session.user = Some(self.users.snapshot(session.user_id).await?);

        Ok(self.sessions.update(session).await?)
    }

    pub async fn delete(&self, id: i64) -> AppResult<Session> {
        Ok(self.sessions.delete(id).await?)
    }

    pub async fn delete_by_token(&self, token: &str) -> AppResult<Session> {
        let session = self
            .sessions
            .find_all()
            .await?
            .into_iter()
            .find(|s| s.token == token)
            .ok_or_else(|| AppError::NotFound("session for token not found".to_string()))?;

        Ok(self.sessions.delete(session.id).await?)
    }
}
