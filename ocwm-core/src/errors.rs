use crate::models::{ViewHandle, WorkspaceId};
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, OcwmError>;

#[derive(Debug, Error)]
pub enum OcwmError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("No workspace with id {0}")]
    WorkspaceNotFound(WorkspaceId),
    #[error("A workspace with id {0} already exists")]
    DuplicateWorkspace(WorkspaceId),
    #[error("No view with handle {0}")]
    ViewNotFound(ViewHandle),
    #[error("Could not parse layout: {0}")]
    UnknownLayout(String),
    #[error("Unknown hook event: {0}")]
    UnknownHook(String),
    #[error("Invalid keybinding {binding:?}: {reason}")]
    InvalidKeybind { binding: String, reason: String },
    #[error("No configuration file found")]
    NoConfig,
    #[error("Configuration error in {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },
    #[error("Callback failed: {0}")]
    Callback(String),
    #[error("Backend error: {0}")]
    Backend(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
