use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::UserSnapshot;
use crate::store::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: i64,
    #[serde(rename = "id_user")]
    pub user_id: i64,
    #[serde(default)]
    pub user: Option<UserSnapshot>,
    pub token: String,
    pub created_at: DateTime<Utc>,
}

impl Record for Session {
    const COLLECTION: &'static str = "session";

    fn id(&self) -> i64 {
        self.id
    }

    fn assign(&mut self, id: i64, created_at: DateTime<Utc>) {
        self.id = id;
        self.created_at = created_at;
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    #[serde(rename = "id_user")]
    pub user_id: i64,
    pub token: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct SessionPatch {
    #[serde(rename = "id_user")]
    pub user_id: Option<i64>,
    pub token: Option<String>,
}
