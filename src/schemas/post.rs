use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use chrono::NaiveDateTime;

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct CreatePostSchema {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: String,
    pub cover_image: Option<String>,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub delete_password: String,
}

#[derive(Serialize, FromRow, Debug)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub cover_image: Option<String>,
    pub excerpt: String,
    pub content: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    #[serde(skip_serializing)]
    pub delete_password: String,
}

#[derive(Serialize, FromRow, Debug)]
pub struct CategoryCount {
    pub category: String,
    pub count: i64,
}
