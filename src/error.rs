//! Error type shared by tree construction, selection, themes and assets.

use std::path::PathBuf;

use crate::tree::WidgetId;

/// Errors reported to the caller by the toolkit core.
///
/// Recoverable conditions (bad indices, duplicate names, unknown labels) come
/// back as values of this type; nothing in the routing path unwinds.
#[derive(Debug, thiserror::Error)]
pub enum GuiError {
    #[error("widget {0:?} does not exist")]
    WidgetNotFound(WidgetId),
    #[error("widget {0:?} is not a container")]
    NotAContainer(WidgetId),
    #[error("widget {0:?} is not a form")]
    NotAForm(WidgetId),
    #[error("widget {0:?} already belongs to a container")]
    AlreadyAttached(WidgetId),
    #[error("widget {child:?} cannot be attached inside its own subtree at {parent:?}")]
    CyclicAttach { parent: WidgetId, child: WidgetId },
    #[error("the root container cannot be removed")]
    RootRemoval,
    #[error("widget {id:?} is not a {expected}")]
    WrongType { id: WidgetId, expected: &'static str },
    #[error("name {0:?} is already registered")]
    DuplicateName(String),
    #[error("container {0:?} is not attached to the gui root")]
    Detached(WidgetId),
    #[error("index {index} is out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("no item is labelled {0:?}")]
    LabelNotFound(String),
    #[error("no item holds the requested value")]
    ValueNotFound,
    #[error("invalid color {0:?}")]
    InvalidColor(String),
    #[error("failed to load {kind} {path:?}: {message}")]
    Asset {
        kind: &'static str,
        path: PathBuf,
        message: String,
    },
    #[error("invalid theme config: {0}")]
    Config(#[from] toml::de::Error),
    #[error("layout computation failed: {0}")]
    Layout(String),
    #[error("the gui command queue is closed")]
    Disconnected,
}

/// Result alias used across the crate.
pub type Result<T, E = GuiError> = std::result::Result<T, E>;
