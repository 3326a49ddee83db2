//! Inkpost - Main Library
//!
//! Inkpost is a minimal blogging backend built with Rust. It provides
//! password-based signup/signin, stateless JWT session authentication,
//! and CRUD operations over blog posts stored in PostgreSQL.
//!
//! # Overview
//!
//! This library provides the core functionality for Inkpost, including:
//! - User registration and authentication with JWT tokens
//! - Bearer-token middleware protecting the blog routes
//! - Post creation, update, publish, list, and delete flows
//! - Author-ownership enforcement on mutations
//! - Database persistence via sqlx and PostgreSQL
//!
//! # Module Structure
//!
//! The library is organized around a single `backend` module:
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server with route configuration
//!   - Authentication, JWT tokens, user management
//!   - Blog post handlers and database operations
//!   - Error taxonomy and HTTP response conversion
//!
//! # Usage
//!
//! ```rust,no_run
//! use inkpost::backend::server::init::create_app;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app().await?;
//! // Use app with axum::serve
//! # Ok(())
//! # }
//! ```

pub mod backend;
