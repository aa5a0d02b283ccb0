use serde::{Deserialize, Serialize};

/// JSON envelope shared by every API endpoint: `{success, data?, message?}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        ApiResponse {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        ApiResponse {
            success: true,
            data: Some(data),
            message: Some(message.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        ApiResponse {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }
}

impl ApiResponse<()> {
    pub fn message(message: impl Into<String>) -> Self {
        ApiResponse {
            success: true,
            data: None,
            message: Some(message.into()),
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CreatedId {
    pub id: i64,
}

/// Body of both delete endpoints.
#[derive(Serialize, Deserialize, Debug)]
pub struct DeleteSchema {
    #[serde(rename = "deletePassword", default)]
    pub delete_password: String,
}
