use std::path::PathBuf;

use thiserror::Error;

/// Everything that can abort a setup run.
///
/// Missing manifests are not represented here: they are reported as
/// [`FileOutcome::Skipped`](crate::manifest::FileOutcome::Skipped) and the run
/// carries on.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("Project name must be lowercase alphanumeric with hyphens only (got `{0}`)")]
    InvalidName(String),

    #[error("README template not found at {}", .0.display())]
    TemplateMissing(PathBuf),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid JSON: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} does not contain a JSON object", .0.display())]
    NotAnObject(PathBuf),

    #[error("`git` not found in PATH")]
    GitNotFound,

    #[error("{0}")]
    Git(String),

    #[error("prompt error: {0}")]
    Prompt(String),

    #[error("{0}")]
    Usage(String),
}

impl SetupError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SetupError::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            SetupError::Usage(_) => 2,
            _ => 1,
        }
    }
}
