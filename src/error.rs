use std::path::PathBuf;

use thiserror::Error;

use crate::host::ElementId;

/// A container the widget needs is not on the page.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("required element `{0}` is missing")]
pub struct MissingElement(pub ElementId);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WidgetError {
    #[error(transparent)]
    Missing(#[from] MissingElement),
    #[error("carousel needs at least one item")]
    NoItems,
}

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {path:?}: {reason}")]
    Decode { path: PathBuf, reason: String },
    #[error("failed to upload texture for {path:?}: {reason}")]
    Texture { path: PathBuf, reason: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be greater than zero")]
    ZeroInterval { name: &'static str },
}
