//! Error types for contained discovery failures.
//!
//! None of these reach the public discovery contract: a failed probe yields
//! an empty version and a failed walk yields fewer candidates. They exist so
//! that failures are logged with a precise cause and so the fallible
//! [`try_probe_version`](crate::try_probe_version) can report what happened.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Failure while probing a Java executable for its version.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProbeError {
    /// The executable could not be started.
    #[error("failed to run {}: {source}", path.display())]
    Spawn {
        /// Executable that was invoked.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The executable did not exit within the configured timeout.
    #[error("{} did not exit within {timeout:?}", path.display())]
    Timeout {
        /// Executable that was invoked.
        path: PathBuf,
        /// Timeout that elapsed.
        timeout: Duration,
    },

    /// The diagnostic output contained no recognizable version.
    #[error("no version found in output of {}", path.display())]
    NoVersion {
        /// Executable that was invoked.
        path: PathBuf,
    },
}

impl ProbeError {
    /// Whether the failure was a permission problem on the executable.
    pub fn is_permission_denied(&self) -> bool {
        matches!(
            self,
            Self::Spawn { source, .. } if source.kind() == std::io::ErrorKind::PermissionDenied
        )
    }
}

/// Failure while scanning a root directory.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ScanError {
    /// An entry below the root could not be read.
    #[error("cannot read directory entry: {0}")]
    Walk(#[from] walkdir::Error),

    /// The scan task for a root terminated abnormally.
    #[error("scan task for {} failed: {source}", root.display())]
    Task {
        /// Root the task was scanning.
        root: PathBuf,
        /// Join failure reported by the runtime.
        #[source]
        source: tokio::task::JoinError,
    },
}
