//! Blog Module
//!
//! This module handles blog posts: the data model, database
//! operations, and the HTTP handlers for the post-flow endpoints.
//!
//! # Architecture
//!
//! The blog module is organized into focused submodules:
//!
//! - **`posts`** - Post data model and database operations
//! - **`handlers`** - HTTP handlers for the post-flow endpoints
//!
//! # Ownership Model
//!
//! Every post references its owning author. The acting identity for
//! mutations always comes from the verified token bound by the auth
//! middleware. Updates additionally require the post to be
//! unpublished; publishing is a one-way, idempotent transition; only
//! the author may delete.

/// Post data model and database operations
pub mod posts;

/// HTTP handlers for the post-flow endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::{
    create_post, delete_post, get_post, list_my_posts, list_posts, publish_post, update_post,
};
pub use posts::{Post, PostWithAuthor};
