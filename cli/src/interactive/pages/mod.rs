//! Page components for the interactive application
//!
//! This module contains the pages the router view switches between.

pub mod board_page;
pub mod not_found;

// Re-export commonly used types
pub use board_page::BoardPage;
pub use not_found::NotFoundPage;
