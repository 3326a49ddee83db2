/**
 * Blog Handler Types
 *
 * This module defines the request and response types used by the blog
 * handlers. Mutating requests wrap their payload in a `{"data": ...}`
 * envelope; list responses carry the author's display name nested
 * under `author` and the pagination block uses camelCase keys.
 */

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::blog::posts::PostWithAuthor;

/// Create post request, `{"data": {"title", "content", "genre"}}`
#[derive(Deserialize, Debug)]
pub struct CreatePostRequest {
    pub data: CreatePostData,
}

/// Payload of a create post request
#[derive(Deserialize, Debug)]
pub struct CreatePostData {
    pub title: String,
    pub content: String,
    pub genre: Option<String>,
}

/// Update post request, `{"data": {"id", "title", "content"}}`
#[derive(Deserialize, Debug)]
pub struct UpdatePostRequest {
    pub data: UpdatePostData,
}

/// Payload of an update post request
#[derive(Deserialize, Debug)]
pub struct UpdatePostData {
    pub id: Uuid,
    pub title: String,
    pub content: String,
}

/// Publish request, `{"data": {"id"}}`
#[derive(Deserialize, Debug)]
pub struct PublishRequest {
    pub data: PublishData,
}

/// Payload of a publish request
#[derive(Deserialize, Debug)]
pub struct PublishData {
    pub id: Uuid,
}

/// Optional body of the "my posts" listing,
/// `{"data": {"published": bool}}`
#[derive(Deserialize, Debug)]
pub struct MyPostsRequest {
    pub data: MyPostsData,
}

/// Payload of a "my posts" listing request
#[derive(Deserialize, Debug, Default)]
pub struct MyPostsData {
    pub published: Option<bool>,
}

/// Pagination query parameters for the bulk listing
#[derive(Deserialize, Debug)]
pub struct ListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Response carrying the id of a created or updated post
#[derive(Serialize, Debug)]
pub struct PostIdResponse {
    pub id: Uuid,
}

/// Generic acknowledgment message
#[derive(Serialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

/// Author information nested in post responses
#[derive(Serialize, Debug)]
pub struct AuthorInfo {
    pub name: String,
}

/// Post shape returned by the bulk listing
#[derive(Serialize, Debug)]
pub struct PostSummary {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: AuthorInfo,
}

impl From<PostWithAuthor> for PostSummary {
    fn from(post: PostWithAuthor) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            author: AuthorInfo {
                name: post.author_name,
            },
        }
    }
}

/// Post shape returned by the "my posts" listing
#[derive(Serialize, Debug)]
pub struct MyPostSummary {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub published: bool,
    pub author: AuthorInfo,
}

impl From<PostWithAuthor> for MyPostSummary {
    fn from(post: PostWithAuthor) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            published: post.published,
            author: AuthorInfo {
                name: post.author_name,
            },
        }
    }
}

/// Post shape returned by the public get-by-id endpoint
#[derive(Serialize, Debug)]
pub struct PostDetail {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub genre: Option<String>,
    pub author: AuthorInfo,
}

impl From<PostWithAuthor> for PostDetail {
    fn from(post: PostWithAuthor) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            genre: post.genre,
            author: AuthorInfo {
                name: post.author_name,
            },
        }
    }
}

/// Pagination block of the bulk listing response
#[derive(Serialize, Debug)]
pub struct PaginationInfo {
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    #[serde(rename = "totalPages")]
    pub total_pages: i64,
}

/// Bulk listing response
#[derive(Serialize, Debug)]
pub struct PostListResponse {
    pub posts: Vec<PostSummary>,
    pub pagination: PaginationInfo,
}

/// "My posts" listing response
#[derive(Serialize, Debug)]
pub struct MyPostsResponse {
    pub posts: Vec<MyPostSummary>,
}

/// Get-by-id response
#[derive(Serialize, Debug)]
pub struct PostDetailResponse {
    pub post: PostDetail,
}
