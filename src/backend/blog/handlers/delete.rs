/**
 * Delete Post Handler
 *
 * This module implements the post deletion handler for
 * DELETE /api/v1/blog/{id}.
 *
 * # Ownership
 *
 * Only the owning author may delete a post. The acting identity comes
 * from the verified token, never from the request body.
 */

use axum::{
    extract::{Path, State},
    Json,
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::blog::handlers::types::MessageResponse;
use crate::backend::blog::posts::{find_post_by_id, remove_post};
use crate::backend::error::ApiError;
use crate::backend::middleware::AuthUser;

/// Delete post handler
///
/// # Errors
///
/// * `400 Bad Request` if the id is not a UUID
/// * `404 Not Found` if the post does not exist
/// * `403 Forbidden` if the requester is not the author
pub async fn delete_post(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = Uuid::parse_str(&id)
        .map_err(|_| ApiError::Validation("Invalid post ID.".to_string()))?;

    let post = find_post_by_id(&pool, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Blog not found.".to_string()))?;

    if post.author_id != user.user_id {
        tracing::warn!(
            "User {} attempted to delete post {} owned by {}",
            user.user_id,
            post.id,
            post.author_id
        );
        return Err(ApiError::Forbidden(
            "You are not authorized to delete this post.".to_string(),
        ));
    }

    remove_post(&pool, post.id).await?;

    tracing::info!("Post {} deleted by {}", post.id, user.user_id);

    Ok(Json(MessageResponse {
        message: "Blog deleted successfully.".to_string(),
    }))
}
