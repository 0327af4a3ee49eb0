use std::path::PathBuf;

use crate::document::path::NodePath;

/// Convenience result type used across the checker.
pub type CheckResult<T> = Result<T, CheckError>;

/// Everything that can stop a run before a verdict is reached.
///
/// A count below the minimum is not an error; it is reported through
/// [`crate::Outcome::Violation`].
#[derive(thiserror::Error, Debug)]
pub enum CheckError {
    /// The document could not be opened or read.
    #[error("read '{}'", .path.display())]
    Io {
        /// Document path as given by the caller.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON.
    #[error("parse JSON in '{}'", .path.display())]
    Parse {
        /// Document path as given by the caller.
        path: PathBuf,
        /// Underlying parser failure, with line and column.
        #[source]
        source: serde_json::Error,
    },

    /// A recognized node is missing the fields its kind requires.
    #[error("structure error at {path}: {message}")]
    Structure {
        /// Location of the offending node.
        path: NodePath,
        /// What is wrong with it.
        message: String,
    },

    /// The minimum argument is not a usable number.
    #[error("invalid minimum: {0}")]
    Minimum(String),

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CheckError {
    /// Build a [`CheckError::Structure`] value.
    pub fn structure(path: &NodePath, msg: impl Into<String>) -> Self {
        Self::Structure {
            path: path.clone(),
            message: msg.into(),
        }
    }

    /// Build a [`CheckError::Minimum`] value.
    pub fn minimum(msg: impl Into<String>) -> Self {
        Self::Minimum(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
