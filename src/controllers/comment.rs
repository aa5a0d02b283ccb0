use axum::{Extension, Json, extract::{Path, rejection::JsonRejection}};

use crate::{
    controllers::parse_id,
    error::AppError,
    infra::context::AppContext,
    modules::sanitize::{sanitize, sanitize_optional, sanitize_required},
    schemas::{
        comment::{Comment, CreateCommentSchema},
        response::{ApiResponse, CreatedId, DeleteSchema},
    },
};

const POST_NOT_FOUND: &str = "post not found";
const COMMENT_NOT_FOUND: &str = "comment not found";

pub async fn list_comments(
    Path(post_id): Path<String>,
    Extension(ctx): Extension<AppContext>,
) -> Result<Json<ApiResponse<Vec<Comment>>>, AppError> {
    let post_id = parse_id(&post_id, POST_NOT_FOUND)?;

    let comments = sqlx::query_as::<_, Comment>(
        r#"
        SELECT *
        FROM comments
        WHERE post_id = ?
        ORDER BY created_at DESC, id DESC
        "#
    )
    .bind(post_id)
    .fetch_all(&ctx.pool)
    .await?;

    Ok(Json(ApiResponse::ok(comments)))
}

pub async fn create_comment(
    Path(post_id): Path<String>,
    Extension(ctx): Extension<AppContext>,
    body: Result<Json<CreateCommentSchema>, JsonRejection>,
) -> Result<Json<ApiResponse<CreatedId>>, AppError> {
    let Json(body) = body?;

    if body.author.trim().is_empty() || body.content.trim().is_empty() {
        return Err(AppError::Validation("author and content are required".to_string()));
    }
    let author = sanitize_required("author", &body.author)?;
    let content = sanitize_required("content", &body.content)?;
    let email = sanitize_optional(body.email.as_deref());
    let delete_password = sanitize(&body.delete_password);
    let post_id = parse_id(&post_id, POST_NOT_FOUND)?;

    // The foreign key rejects comments for posts that do not exist.
    let query_result = sqlx::query(
        r#"INSERT INTO comments (post_id, author, email, content, delete_password) VALUES (?, ?, ?, ?, ?)"#
    )
    .bind(post_id)
    .bind(author)
    .bind(email)
    .bind(content)
    .bind(delete_password)
    .execute(&ctx.pool)
    .await;

    let id = match query_result {
        Ok(done) => done.last_insert_rowid(),
        Err(sqlx::Error::Database(err))
            if err.is_foreign_key_violation()
                || err.message().contains("FOREIGN KEY constraint failed") =>
        {
            return Err(AppError::NotFound(POST_NOT_FOUND.to_string()));
        }
        Err(err) => return Err(err.into()),
    };

    tracing::info!(post_id, comment_id = id, "comment created");
    Ok(Json(ApiResponse::ok_with_message(CreatedId { id }, "comment created")))
}

pub async fn delete_comment(
    Path(id): Path<String>,
    Extension(ctx): Extension<AppContext>,
    body: Result<Json<DeleteSchema>, JsonRejection>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let id = parse_id(&id, COMMENT_NOT_FOUND)?;
    let Json(body) = body?;

    let stored = sqlx::query_scalar::<_, String>(r#"SELECT delete_password FROM comments WHERE id = ?"#)
        .bind(id)
        .fetch_optional(&ctx.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(COMMENT_NOT_FOUND.to_string()))?;

    if sanitize(&body.delete_password) != stored {
        tracing::warn!(comment_id = id, "comment delete rejected: wrong password");
        return Err(AppError::Forbidden("wrong password".to_string()));
    }

    sqlx::query(r#"DELETE FROM comments WHERE id = ?"#)
        .bind(id)
        .execute(&ctx.pool)
        .await?;

    tracing::info!(comment_id = id, "comment deleted");
    Ok(Json(ApiResponse::message("comment deleted")))
}
