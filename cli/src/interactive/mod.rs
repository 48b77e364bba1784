//! Interactive terminal board built on iocraft

pub mod app;
pub mod components;
pub mod keys;
pub mod pages;
pub mod router;

pub use app::run_interactive;
