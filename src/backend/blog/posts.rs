/**
 * Post Model and Database Operations
 *
 * This module handles blog post data and database operations. List
 * queries join the author row so responses can carry the author's
 * display name without a second round trip.
 */

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Post struct representing a blog post row in the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Post {
    /// Unique post ID (UUID)
    pub id: Uuid,
    /// Post title
    pub title: String,
    /// Post body
    pub content: String,
    /// Optional genre label
    pub genre: Option<String>,
    /// Whether the post has been published (one-way transition)
    pub published: bool,
    /// Owning author's user ID
    pub author_id: Uuid,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Post row joined with its author's display name
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PostWithAuthor {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub genre: Option<String>,
    pub published: bool,
    pub author_name: String,
}

/// Columns selected for every joined post query
const POST_WITH_AUTHOR_COLUMNS: &str =
    "p.id, p.title, p.content, p.genre, p.published, u.name AS author_name";

/// Create a new post owned by `author_id`
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `title` - Post title
/// * `content` - Post body
/// * `genre` - Optional genre label
/// * `author_id` - Owning author's user ID
///
/// # Returns
/// Created post or error
pub async fn insert_post(
    pool: &PgPool,
    title: &str,
    content: &str,
    genre: Option<&str>,
    author_id: Uuid,
) -> Result<Post, sqlx::Error> {
    let id = Uuid::new_v4();

    sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (id, title, content, genre, author_id)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, title, content, genre, published, author_id, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(title)
    .bind(content)
    .bind(genre)
    .bind(author_id)
    .fetch_one(pool)
    .await
}

/// Get a post by ID
///
/// # Returns
/// Post or None if not found
pub async fn find_post_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, content, genre, published, author_id, created_at, updated_at
        FROM posts
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Get a post by ID joined with its author's name
pub async fn find_post_with_author(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<PostWithAuthor>, sqlx::Error> {
    let sql = format!(
        "SELECT {POST_WITH_AUTHOR_COLUMNS}
         FROM posts p
         JOIN users u ON u.id = p.author_id
         WHERE p.id = $1"
    );

    sqlx::query_as::<_, PostWithAuthor>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Update a post's title and content
pub async fn update_post_content(
    pool: &PgPool,
    id: Uuid,
    title: &str,
    content: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE posts
        SET title = $1, content = $2, updated_at = now()
        WHERE id = $3
        "#,
    )
    .bind(title)
    .bind(content)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Mark a post as published
///
/// The transition is one-way and idempotent; republishing an already
/// published post is a no-op.
///
/// # Returns
/// Number of rows affected (0 when the post does not exist)
pub async fn mark_post_published(pool: &PgPool, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE posts
        SET published = TRUE, updated_at = now()
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// Delete a post by ID
///
/// # Returns
/// Number of rows affected (0 when the post does not exist)
pub async fn remove_post(pool: &PgPool, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM posts WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

/// Count all posts
pub async fn count_posts(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts")
        .fetch_one(pool)
        .await
}

/// List every post joined with author names, oldest first
pub async fn list_all_posts(pool: &PgPool) -> Result<Vec<PostWithAuthor>, sqlx::Error> {
    let sql = format!(
        "SELECT {POST_WITH_AUTHOR_COLUMNS}
         FROM posts p
         JOIN users u ON u.id = p.author_id
         ORDER BY p.created_at, p.id"
    );

    sqlx::query_as::<_, PostWithAuthor>(&sql).fetch_all(pool).await
}

/// List one page of posts joined with author names, oldest first
///
/// # Arguments
/// * `offset` - Rows to skip
/// * `limit` - Maximum rows to return
pub async fn list_posts_page(
    pool: &PgPool,
    offset: i64,
    limit: i64,
) -> Result<Vec<PostWithAuthor>, sqlx::Error> {
    let sql = format!(
        "SELECT {POST_WITH_AUTHOR_COLUMNS}
         FROM posts p
         JOIN users u ON u.id = p.author_id
         ORDER BY p.created_at, p.id
         LIMIT $1 OFFSET $2"
    );

    sqlx::query_as::<_, PostWithAuthor>(&sql)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
}

/// List the posts owned by one author, optionally filtered by
/// published state
pub async fn posts_by_author(
    pool: &PgPool,
    author_id: Uuid,
    published: Option<bool>,
) -> Result<Vec<PostWithAuthor>, sqlx::Error> {
    let sql = format!(
        "SELECT {POST_WITH_AUTHOR_COLUMNS}
         FROM posts p
         JOIN users u ON u.id = p.author_id
         WHERE p.author_id = $1
           AND ($2::boolean IS NULL OR p.published = $2)
         ORDER BY p.created_at, p.id"
    );

    sqlx::query_as::<_, PostWithAuthor>(&sql)
        .bind(author_id)
        .bind(published)
        .fetch_all(pool)
        .await
}
