/**
 * Create Post Handler
 *
 * This module implements the post creation handler for
 * POST /api/v1/blog.
 *
 * # Ownership
 *
 * The new post's author is always the authenticated user bound by the
 * auth middleware; the client cannot choose an author.
 */

use axum::{extract::State, Json};
use sqlx::PgPool;

use crate::backend::blog::handlers::types::{CreatePostRequest, PostIdResponse};
use crate::backend::blog::posts::insert_post;
use crate::backend::error::ApiError;
use crate::backend::middleware::AuthUser;

/// Create post handler
///
/// Creates an unpublished post owned by the authenticated user and
/// returns its id.
///
/// # Errors
///
/// * `500 Internal Server Error` on store failure
pub async fn create_post(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    Json(request): Json<CreatePostRequest>,
) -> Result<Json<PostIdResponse>, ApiError> {
    let data = request.data;

    let post = insert_post(
        &pool,
        &data.title,
        &data.content,
        data.genre.as_deref(),
        user.user_id,
    )
    .await?;

    tracing::info!("Post {} created by {}", post.id, user.user_id);

    Ok(Json(PostIdResponse { id: post.id }))
}
