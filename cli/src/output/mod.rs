//! CLI-specific output implementations
//!
//! Plain-text rendering for the one-shot commands. Interactive mode draws
//! frames with iocraft instead.

pub mod board_table;

pub use board_table::render_frame;
