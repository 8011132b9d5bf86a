//! # Distro Icons - frozen operating-system icon catalog
//!
//! An ordered, immutable list of icon descriptors (index, title, path)
//! consumed by icon pickers.
//!
//! Distro Icons provides:
//! - A process-wide static catalog readable from any thread without locking
//! - Indexed, title and slug lookups with a typed `NotFound` error
//! - A one-time invariant check over the shipped data
//! - A CLI and a read-only JSON endpoint over the same data

pub mod icon;
pub mod catalog;
pub mod config;
pub mod output;
pub mod server;
pub mod ui;

// Re-exports for convenient access
pub use icon::IconDescriptor;
pub use catalog::{IconCatalog, ICONS};
pub use config::IconsConfig;

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for catalog operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Icon not found: index {index} is outside [0, {count})")]
    NotFound { index: i64, count: usize },

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
