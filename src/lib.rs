//! This crate provides the startup sequence of the novel class discovery web interface.
//! It validates the boot configuration, registers global stylesheets in cascade order,
//! resolves the mount point and performs the initial render through a rendering runtime.

pub mod bootstrap;
pub mod config;
pub mod diagnostics;
pub mod runtime;
pub mod stylesheets;
pub mod types;

/// Re-exports the bootstrap sequence and its mounted handle.
pub use bootstrap::{Bootstrap, Mounted};
/// Re-exports the boot configuration.
pub use config::BootConfig;
/// Re-exports the traits the bootstrap talks through.
pub use runtime::{HostDocument, RenderRuntime};
/// Re-exports stylesheet descriptions and the cascade plan.
pub use stylesheets::{CascadePlan, Stylesheet, StylesheetSource};
/// Re-exports the lifecycle phase, cascade layers and error type.
pub use types::{BootError, Layer, Phase, DEFAULT_MOUNT_POINT};
