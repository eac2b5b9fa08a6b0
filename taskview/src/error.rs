use std::fmt;

use crate::algorithms::halfedge::MeshError;

#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// The payload held no tasks, so there is nothing to navigate.
    EmptyTaskList,
    /// The payload is not valid JSON or does not match any known task schema.
    Payload(String),
    LimitExceeded { what: &'static str, max: usize, got: usize },
    NonFinite { what: &'static str },
    Mesh { task: String, source: MeshError },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyTaskList => write!(f, "task list is empty"),
            Error::Payload(msg) => write!(f, "invalid task payload: {}", msg),
            Error::LimitExceeded { what, max, got } => {
                write!(f, "{} exceeds limit ({} > {})", what, got, max)
            }
            Error::NonFinite { what } => write!(f, "{} has a non-finite or out-of-range coordinate", what),
            Error::Mesh { task, source } => write!(f, "mesh of task '{}': {}", task, source),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Mesh { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Payload(e.to_string())
    }
}

impl Error {
    /// Stable machine-readable code, shared with the JS error objects.
    pub fn code(&self) -> &'static str {
        match self {
            Error::EmptyTaskList => "empty_task_list",
            Error::Payload(_) => "payload",
            Error::LimitExceeded { .. } => "limit_exceeded",
            Error::NonFinite { .. } => "non_finite",
            Error::Mesh { source: MeshError::Malformed { .. }, .. } => "malformed_mesh",
            Error::Mesh { .. } => "invalid_mesh",
        }
    }

    pub(crate) fn mesh(task: &str, source: MeshError) -> Error {
        Error::Mesh { task: task.to_string(), source }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
