//! Server Module
//!
//! This module contains all server-side code for initializing and configuring
//! the Axum HTTP server. It provides the foundation for the application's
//! backend infrastructure.
//!
//! # Architecture
//!
//! The server module is organized into focused submodules:
//!
//! - **`state`** - Application state structure and `FromRef` implementations
//! - **`config`** - Database pool creation and migrations
//! - **`init`** - Server initialization and app creation
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Configuration loading (database)
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: reads `DATABASE_URL`, connects, migrates
//! 2. **State Creation**: wraps the connection pool in `AppState`
//! 3. **Router Creation**: configures all routes and middleware

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use init::create_app;
pub use state::AppState;
