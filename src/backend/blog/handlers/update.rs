/**
 * Update and Publish Handlers
 *
 * This module implements the post mutation handlers for
 * PUT /api/v1/blog and PUT /api/v1/blog/publish.
 *
 * # Update Rules
 *
 * - The target post must exist (404 otherwise)
 * - A published post can never be updated again, regardless of who
 *   asks (403)
 * - Only the owning author may update an unpublished post (403)
 *
 * # Publish Rules
 *
 * Publishing is a one-way transition and idempotent: republishing an
 * already published post succeeds and leaves it published. There is no
 * ownership check on publish.
 */

use axum::{extract::State, Json};
use sqlx::PgPool;

use crate::backend::blog::handlers::types::{
    MessageResponse, PostIdResponse, PublishRequest, UpdatePostRequest,
};
use crate::backend::blog::posts::{find_post_by_id, mark_post_published, update_post_content};
use crate::backend::error::ApiError;
use crate::backend::middleware::AuthUser;

/// Update post handler
///
/// Rewrites the title and content of an unpublished post owned by the
/// authenticated user.
///
/// # Errors
///
/// * `404 Not Found` if the post does not exist
/// * `403 Forbidden` if the post is already published
/// * `403 Forbidden` if the requester is not the author
pub async fn update_post(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    Json(request): Json<UpdatePostRequest>,
) -> Result<Json<PostIdResponse>, ApiError> {
    let data = request.data;

    let post = find_post_by_id(&pool, data.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Post not found".to_string()))?;

    if post.published {
        tracing::warn!("Rejected update of published post {}", post.id);
        return Err(ApiError::Forbidden(
            "Cannot update published post".to_string(),
        ));
    }

    if post.author_id != user.user_id {
        tracing::warn!(
            "User {} attempted to update post {} owned by {}",
            user.user_id,
            post.id,
            post.author_id
        );
        return Err(ApiError::Forbidden(
            "You are not authorized to update this post.".to_string(),
        ));
    }

    update_post_content(&pool, post.id, &data.title, &data.content).await?;

    Ok(Json(PostIdResponse { id: post.id }))
}

/// Publish post handler
///
/// Marks a post as published. Idempotent when the post is already
/// published.
///
/// # Errors
///
/// * `404 Not Found` if the post does not exist
pub async fn publish_post(
    State(pool): State<PgPool>,
    Json(request): Json<PublishRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let affected = mark_post_published(&pool, request.data.id).await?;

    if affected == 0 {
        return Err(ApiError::NotFound("Post not found".to_string()));
    }

    Ok(Json(MessageResponse {
        message: "Blog published successfully.".to_string(),
    }))
}
