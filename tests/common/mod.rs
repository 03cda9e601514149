//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - Mock EasyBlog server helpers
//! - Authentication test helpers
//! - Custom assertion macros


// Re-export commonly used utilities
pub use auth_helpers::*;
pub use mock_server::*;
