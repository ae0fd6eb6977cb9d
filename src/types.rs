//! This module defines the core types shared by the bootstrap sequence: the lifecycle
//! phase of a mount, the cascade layers stylesheets belong to, and the error type.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The element id the hosting document is expected to provide.
pub const DEFAULT_MOUNT_POINT: &str = "root";

/// Lifecycle of a bootstrap.
///
/// A bootstrap starts `Unmounted` and moves to `Mounted` after its single render call.
/// There is no transition back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Unmounted,
    Mounted,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Unmounted => write!(f, "unmounted"),
            Phase::Mounted => write!(f, "mounted"),
        }
    }
}

/// The cascade layer a stylesheet belongs to.
///
/// Layers are ordered: rules registered by a later layer override conflicting rules of an
/// earlier one, so a plan must never place a lower layer after a higher one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    /// The base UI framework (Bootstrap).
    Framework,
    /// Stylesheets shipped with individual widgets.
    Widget,
    /// Application-local overrides.
    Local,
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layer::Framework => write!(f, "framework"),
            Layer::Widget => write!(f, "widget"),
            Layer::Local => write!(f, "local"),
        }
    }
}

/// Represents the errors that can abort the bootstrap sequence.
///
/// Every variant is fatal: the page stays unrendered and the error is reported through the
/// logger.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BootError {
    /// The hosting document has no element with the configured id.
    #[error("Mount point #{0} not found in document")]
    MountPointMissing(String),
    /// The configured mount point id can never match an element.
    #[error("Invalid mount point id: {0:?}")]
    InvalidMountPoint(String),
    /// A stylesheet is placed after one of a higher cascade layer.
    #[error("Stylesheet {name} ({layer}) is registered after a {previous} stylesheet")]
    CascadeOrder {
        name: String,
        layer: Layer,
        previous: Layer,
    },
    /// Two stylesheets share the same name.
    #[error("Duplicate stylesheet: {0}")]
    DuplicateStylesheet(String),
    /// A stylesheet entry is missing its name or source.
    #[error("Invalid stylesheet: {0}")]
    InvalidStylesheet(String),
    /// A stylesheet could not be registered with the document.
    #[error("Failed to load stylesheet {name}: {reason}")]
    AssetLoad { name: String, reason: String },
    /// Creating the render root or rendering the tree failed.
    #[error("Render failed: {0}")]
    Render(String),
    /// The hosting environment lacks a window, document or head.
    #[error("Host environment error: {0}")]
    Host(String),
    /// The boot configuration could not be parsed.
    #[error("Invalid boot configuration: {0}")]
    Config(String),
}
