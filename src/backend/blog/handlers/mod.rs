//! Blog Handlers Module
//!
//! This module contains all HTTP handlers for the post-flow endpoints.
//! Handlers are organized into focused submodules for maintainability.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── create.rs   - Post creation handler
//! ├── update.rs   - Update and publish handlers
//! ├── list.rs     - Bulk, "my posts", and get-by-id handlers
//! └── delete.rs   - Post deletion handler
//! ```
//!
//! # Handlers
//!
//! - **`create_post`**   - POST /api/v1/blog
//! - **`update_post`**   - PUT /api/v1/blog
//! - **`publish_post`**  - PUT /api/v1/blog/publish
//! - **`list_posts`**    - GET /api/v1/blog/bulk
//! - **`list_my_posts`** - GET /api/v1/blog/me
//! - **`get_post`**      - GET /api/v1/blog/{id} (public)
//! - **`delete_post`**   - DELETE /api/v1/blog/{id}

/// Request and response types
pub mod types;

/// Post creation handler
pub mod create;

/// Update and publish handlers
pub mod update;

/// Listing and lookup handlers
pub mod list;

/// Post deletion handler
pub mod delete;

// Re-export handlers
pub use create::create_post;
pub use delete::delete_post;
pub use list::{get_post, list_my_posts, list_posts};
pub use update::{publish_post, update_post};
