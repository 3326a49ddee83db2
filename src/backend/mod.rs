//! Backend Module
//!
//! This module contains all server-side code for the Inkpost application.
//! It provides a complete Axum HTTP server exposing a JSON API for user
//! accounts and blog posts.
//!
//! # Overview
//!
//! The backend module includes:
//! - Axum HTTP server setup and configuration
//! - Route configuration under `/api/v1`
//! - Authentication, JWT tokens, user management
//! - Blog post handlers and sqlx data access
//! - Database persistence (PostgreSQL)
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Authentication, JWT tokens, user management
//! - **`blog`** - Blog post handlers and database operations
//! - **`middleware`** - Bearer-token gate for protected routes
//! - **`error`** - Error taxonomy and HTTP response conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary entry point
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication and user flows
//! ├── blog/           - Post flows
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! Every request follows the same short path:
//!
//! 1. Router matches the path and method
//! 2. For protected routes, the auth middleware verifies the bearer token
//!    and binds the authenticated user id to the request
//! 3. The handler runs its sqlx queries against the pool
//! 4. The result (or an `ApiError`) is rendered as a JSON response
//!
//! There is no in-process shared mutable state beyond the connection pool,
//! and no background tasks.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, ApiError>`. Store and crypto failures are
//! translated at the handler boundary; clients never see internal error
//! details.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Blog post flows
pub mod blog;

/// Middleware for request processing
pub mod middleware;

/// Backend error types
pub mod error;

// Re-export commonly used types
pub use error::ApiError;
pub use server::state::AppState;
