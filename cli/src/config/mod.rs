//! Configuration loading for the CLI

mod loader;

pub use loader::CliConfigLoader;
