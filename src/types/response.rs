use serde::Serialize;

#[derive(Serialize)]
pub struct ApiResponse<T: Serialize = ()> {
    pub message: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            status: "success".to_string(),
            data: Some(data),
        }
    }
}

impl ApiResponse {
    pub fn status(message: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: status.into(),
            data: None,
        }
    }
}
