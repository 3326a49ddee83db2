/**
 * Listing and Lookup Handlers
 *
 * This module implements the read-side handlers:
 *
 * - GET /api/v1/blog/bulk  - paginated listing of every post
 * - GET /api/v1/blog/me    - the caller's own posts
 * - GET /api/v1/blog/{id}  - public single-post lookup
 *
 * # Pagination
 *
 * `page` and `limit`, when supplied, must both be at least 1. When
 * neither is supplied the full collection is returned. In both cases
 * `total` reflects the real row count and
 * `totalPages = ceil(total / limit)`.
 */

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    Json,
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::blog::handlers::types::{
    ListQuery, MyPostsRequest, MyPostsResponse, PaginationInfo, PostDetailResponse,
    PostListResponse,
};
use crate::backend::blog::posts::{
    count_posts, find_post_with_author, list_all_posts, list_posts_page, posts_by_author,
};
use crate::backend::error::ApiError;
use crate::backend::middleware::AuthUser;

/// Default page size when only one pagination parameter is supplied
const DEFAULT_PAGE_LIMIT: i64 = 10;

/// Compute the number of pages needed for `total` rows
fn total_pages(total: i64, limit: i64) -> i64 {
    if limit <= 0 {
        return 0;
    }
    (total + limit - 1) / limit
}

/// Bulk listing handler
///
/// Without query parameters the whole collection is returned. With
/// `page` and/or `limit` an offset slice is returned; the missing
/// parameter defaults to page 1 or limit 10.
///
/// # Errors
///
/// * `400 Bad Request` if `page` or `limit` is below 1
/// * `500 Internal Server Error` on store failure
pub async fn list_posts(
    State(pool): State<PgPool>,
    Query(query): Query<ListQuery>,
) -> Result<Json<PostListResponse>, ApiError> {
    let paged = query.page.is_some() || query.limit.is_some();
    let page = query.page.unwrap_or(1);
    let limit = query.limit.unwrap_or(DEFAULT_PAGE_LIMIT);

    if page < 1 || limit < 1 {
        return Err(ApiError::Validation(
            "Invalid pagination parameters. Page and limit must be greater than 0.".to_string(),
        ));
    }

    let total = count_posts(&pool).await?;

    let posts = if paged {
        let offset = (page - 1) * limit;
        list_posts_page(&pool, offset, limit).await?
    } else {
        list_all_posts(&pool).await?
    };

    Ok(Json(PostListResponse {
        posts: posts.into_iter().map(Into::into).collect(),
        pagination: PaginationInfo {
            total,
            page,
            limit,
            total_pages: total_pages(total, limit),
        },
    }))
}

/// "My posts" handler
///
/// Returns the posts owned by the authenticated user. An optional JSON
/// body `{"data": {"published": bool}}` filters by published state.
///
/// # Errors
///
/// * `401 Unauthorized` if no authenticated user is bound
/// * `500 Internal Server Error` on store failure
pub async fn list_my_posts(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    body: Result<Json<MyPostsRequest>, JsonRejection>,
) -> Result<Json<MyPostsResponse>, ApiError> {
    // The filter body is optional; requests without one list everything
    let published = body.ok().and_then(|Json(request)| request.data.published);

    let posts = posts_by_author(&pool, user.user_id, published).await?;

    Ok(Json(MyPostsResponse {
        posts: posts.into_iter().map(Into::into).collect(),
    }))
}

/// Public single-post lookup handler
///
/// # Errors
///
/// * `404 Not Found` if the id is not a UUID or the post is absent
pub async fn get_post(
    State(pool): State<PgPool>,
    Path(id): Path<String>,
) -> Result<Json<PostDetailResponse>, ApiError> {
    let id = Uuid::parse_str(&id)
        .map_err(|_| ApiError::NotFound("Error while fetching post".to_string()))?;

    let post = find_post_with_author(&pool, id)
        .await
        .map_err(|e| {
            tracing::error!("Error while fetching post {}: {:?}", id, e);
            ApiError::NotFound("Error while fetching post".to_string())
        })?
        .ok_or_else(|| ApiError::NotFound("Error while fetching post".to_string()))?;

    Ok(Json(PostDetailResponse { post: post.into() }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_exact_division() {
        assert_eq!(total_pages(10, 5), 2);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(12, 5), 3);
    }

    #[test]
    fn test_total_pages_empty_collection() {
        assert_eq!(total_pages(0, 10), 0);
    }

    #[test]
    fn test_total_pages_single_partial_page() {
        assert_eq!(total_pages(3, 10), 1);
    }
}
