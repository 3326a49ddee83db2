//! Authentication Module
//!
//! This module handles user accounts, credentials, and session tokens.
//! It provides HTTP handlers for the user-flow endpoints and manages
//! user data and JWT tokens.
//!
//! # Architecture
//!
//! The auth module is organized into focused submodules:
//!
//! - **`users`** - User data model and database operations
//! - **`sessions`** - JWT token generation and verification
//! - **`handlers`** - HTTP handlers for the user-flow endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── sessions.rs     - JWT token management
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── signup.rs   - User registration handler
//!     ├── signin.rs   - User authentication handler
//!     └── signout.rs  - Sign-out acknowledgment handler
//! ```
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage
//! - JWT tokens are stateless; nothing is persisted per session
//! - Tokens expire after 30 days; sign-out does not revoke them
//! - Unknown usernames and wrong passwords are indistinguishable to
//!   clients

/// User data model and database operations
pub mod users;

/// JWT token generation and verification
pub mod sessions;

/// HTTP handlers for the user-flow endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::{signin, signout, signup, SigninRequest, SignupRequest};
pub use sessions::{create_token, verify_token, Claims};
