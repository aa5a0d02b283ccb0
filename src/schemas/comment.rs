use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use chrono::NaiveDateTime;

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct CreateCommentSchema {
    #[serde(default)]
    pub author: String,
    pub email: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub delete_password: String,
}

#[derive(Serialize, FromRow, Debug)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub author: String,
    pub email: Option<String>,
    pub content: String,
    pub created_at: NaiveDateTime,
    #[serde(skip_serializing)]
    pub delete_password: String,
}
