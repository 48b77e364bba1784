//! UI components for interactive mode

pub mod status_line;

pub use status_line::StatusLine;
