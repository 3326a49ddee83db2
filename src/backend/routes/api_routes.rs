/**
 * API Route Handlers
 *
 * This module defines the route tables for the JSON API, including:
 * - User endpoints (signup, signin, signout)
 * - Blog endpoints (create, update, publish, list, get, delete)
 *
 * # Routes
 *
 * ## User flow (public)
 * - `POST /api/v1/user/signup`  - User registration
 * - `POST /api/v1/user/signin`  - User authentication
 * - `POST /api/v1/user/signout` - Sign-out acknowledgment
 *
 * ## Post flow (bearer token verified by the auth middleware)
 * - `POST   /api/v1/blog`         - Create post
 * - `PUT    /api/v1/blog`         - Update post
 * - `PUT    /api/v1/blog/publish` - Publish post
 * - `GET    /api/v1/blog/bulk`    - Paginated listing
 * - `GET    /api/v1/blog/me`      - Caller's own posts
 * - `DELETE /api/v1/blog/{id}`    - Delete post
 *
 * ## Public post flow
 * - `GET /api/v1/blog/{id}` - Single-post lookup, no authentication
 */

use axum::{middleware, Router};

use crate::backend::auth::{signin, signout, signup};
use crate::backend::blog::{
    create_post, delete_post, get_post, list_my_posts, list_posts, publish_post, update_post,
};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Configure the user-flow routes
///
/// None of these routes sit behind the auth gate. Signout inspects the
/// Authorization header itself but never verifies the token.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/user/signup", axum::routing::post(signup))
        .route("/api/v1/user/signin", axum::routing::post(signin))
        .route("/api/v1/user/signout", axum::routing::post(signout))
}

/// Configure the blog routes
///
/// Every route except the public single-post lookup is wrapped by the
/// auth middleware, which rejects before any handler logic runs.
pub fn blog_routes() -> Router<AppState> {
    let protected = Router::new()
        .route(
            "/api/v1/blog",
            axum::routing::post(create_post).put(update_post),
        )
        .route("/api/v1/blog/publish", axum::routing::put(publish_post))
        .route("/api/v1/blog/bulk", axum::routing::get(list_posts))
        .route("/api/v1/blog/me", axum::routing::get(list_my_posts))
        .route("/api/v1/blog/{id}", axum::routing::delete(delete_post))
        .route_layer(middleware::from_fn(auth_middleware));

    let public = Router::new().route("/api/v1/blog/{id}", axum::routing::get(get_post));

    protected.merge(public)
}

/// Configure all API routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
///
/// # Returns
///
/// Router with the user and blog route tables configured
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router.merge(user_routes()).merge(blog_routes())
}
