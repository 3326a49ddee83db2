//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for the user-flow endpoints.
//! Handlers are organized into focused submodules for maintainability.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── signup.rs   - User registration handler
//! ├── signin.rs   - User authentication handler
//! └── signout.rs  - Stateless sign-out acknowledgment
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /api/v1/user/signup - User registration
//! - **`signin`** - POST /api/v1/user/signin - User authentication
//! - **`signout`** - POST /api/v1/user/signout - Sign-out acknowledgment
//!
//! # Authentication Flow
//!
//! 1. **Signup**: username/password/name → user created → JWT token returned
//! 2. **Signin**: username/password → credentials verified → JWT token returned
//! 3. **Signout**: Bearer header checked for shape only → acknowledgment

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Signin handler
pub mod signin;

/// Signout handler
pub mod signout;

// Re-export commonly used types
pub use types::{SigninRequest, SignoutResponse, SignupRequest};

// Re-export handlers
pub use signin::signin;
pub use signout::signout;
pub use signup::signup;
