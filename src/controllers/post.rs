use axum::{Extension, Json, extract::{Path, rejection::JsonRejection}};

use crate::{
    controllers::parse_id,
    error::AppError,
    infra::context::AppContext,
    modules::sanitize::{sanitize, sanitize_optional, sanitize_required},
    schemas::{
        post::{CategoryCount, CreatePostSchema, Post},
        response::{ApiResponse, CreatedId, DeleteSchema},
    },
};

const POST_NOT_FOUND: &str = "post not found";

pub async fn list_posts(
    Extension(ctx): Extension<AppContext>,
) -> Result<Json<ApiResponse<Vec<Post>>>, AppError> {
    let posts = sqlx::query_as::<_, Post>(
        r#"
        SELECT *
        FROM posts
        ORDER BY created_at DESC, id DESC
        "#
    )
    .fetch_all(&ctx.pool)
    .await?;

    Ok(Json(ApiResponse::ok(posts)))
}

pub async fn find_post(
    Path(id): Path<String>,
    Extension(ctx): Extension<AppContext>,
) -> Result<Json<ApiResponse<Post>>, AppError> {
    let id = parse_id(&id, POST_NOT_FOUND)?;

    let post = sqlx::query_as::<_, Post>(r#"SELECT * FROM posts WHERE id = ?"#)
        .bind(id)
        .fetch_optional(&ctx.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(POST_NOT_FOUND.to_string()))?;

    Ok(Json(ApiResponse::ok(post)))
}

pub async fn create_post(
    Extension(ctx): Extension<AppContext>,
    body: Result<Json<CreatePostSchema>, JsonRejection>,
) -> Result<Json<ApiResponse<CreatedId>>, AppError> {
    let Json(body) = body?;

    let title = sanitize_required("title", &body.title)?;
    let category = sanitize_required("category", &body.category)?;
    let excerpt = sanitize_required("excerpt", &body.excerpt)?;
    let content = sanitize_required("content", &body.content)?;
    let delete_password = sanitize_required("delete_password", &body.delete_password)?;
    let cover_image = sanitize_optional(body.cover_image.as_deref());

    let id = sqlx::query(
        r#"INSERT INTO posts (title, category, cover_image, excerpt, content, delete_password) VALUES (?, ?, ?, ?, ?, ?)"#
    )
    .bind(title)
    .bind(category)
    .bind(cover_image)
    .bind(excerpt)
    .bind(content)
    .bind(delete_password)
    .execute(&ctx.pool)
    .await?
    .last_insert_rowid();

    tracing::info!(post_id = id, "post created");
    Ok(Json(ApiResponse::ok_with_message(CreatedId { id }, "post created")))
}

pub async fn delete_post(
    Path(id): Path<String>,
    Extension(ctx): Extension<AppContext>,
    body: Result<Json<DeleteSchema>, JsonRejection>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let id = parse_id(&id, POST_NOT_FOUND)?;
    let Json(body) = body?;

    let stored = sqlx::query_scalar::<_, String>(r#"SELECT delete_password FROM posts WHERE id = ?"#)
        .bind(id)
        .fetch_optional(&ctx.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(POST_NOT_FOUND.to_string()))?;

    if sanitize(&body.delete_password) != stored {
        tracing::warn!(post_id = id, "post delete rejected: wrong password");
        return Err(AppError::Forbidden("wrong password".to_string()));
    }

    // comments go with it through ON DELETE CASCADE
    sqlx::query(r#"DELETE FROM posts WHERE id = ?"#)
        .bind(id)
        .execute(&ctx.pool)
        .await?;

    tracing::info!(post_id = id, "post deleted");
    Ok(Json(ApiResponse::message("post deleted")))
}

pub async fn list_categories(
    Extension(ctx): Extension<AppContext>,
) -> Result<Json<ApiResponse<Vec<CategoryCount>>>, AppError> {
    let categories = sqlx::query_as::<_, CategoryCount>(
        r#"
        SELECT category, COUNT(*) AS count
        FROM posts
        GROUP BY category
        ORDER BY category
        "#
    )
    .fetch_all(&ctx.pool)
    .await?;

    Ok(Json(ApiResponse::ok(categories)))
}
