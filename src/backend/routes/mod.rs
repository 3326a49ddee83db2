//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Architecture
//!
//! The routes module is organized into focused submodules:
//!
//! - **`router`** - Main router creation and route assembly
//! - **`api_routes`** - API endpoint route tables
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! └── api_routes.rs   - API endpoint route tables
//! ```
//!
//! # Route Overview
//!
//! ## User flow
//! - `POST /api/v1/user/signup` - User registration
//! - `POST /api/v1/user/signin` - User authentication
//! - `POST /api/v1/user/signout` - Sign-out acknowledgment
//!
//! ## Post flow
//! - `POST /api/v1/blog` - Create post (auth)
//! - `PUT /api/v1/blog` - Update post (auth)
//! - `PUT /api/v1/blog/publish` - Publish post (auth)
//! - `GET /api/v1/blog/bulk` - Paginated listing (auth)
//! - `GET /api/v1/blog/me` - Caller's own posts (auth)
//! - `GET /api/v1/blog/{id}` - Single-post lookup (public)
//! - `DELETE /api/v1/blog/{id}` - Delete post (auth)

/// Main router creation
pub mod router;

/// API endpoint route tables
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
