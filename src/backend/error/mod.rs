//! Backend Error Module
//!
//! This module defines error types specific to the backend server.
//! These errors are used in HTTP handlers and can be converted to HTTP
//! responses.
//!
//! # Architecture
//!
//! The error module is organized into focused submodules:
//!
//! - **`types`** - Error type definitions and status/message mapping
//! - **`conversion`** - Error conversion implementations (IntoResponse, From)
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations
//! ```
//!
//! # HTTP Response Conversion
//!
//! `ApiError` implements `IntoResponse` from Axum, allowing it to be
//! returned directly from handlers. The error is converted to the
//! appropriate HTTP status code and a JSON body carrying only a
//! client-safe message.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
