//! Router glue between the core navigator and the iocraft UI

pub mod integration;

pub use integration::{use_router_handle, RouterHandle, RouterView};
