//! Discovery result types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// A discovered Java executable paired with its reported version.
///
/// Candidates are only constructed after a version was successfully
/// extracted, so `version` is never empty for values produced by this crate.
/// Equality and hashing are structural over both fields; this is what
/// discovery uses to deduplicate results.
///
/// Serializes as `{"Path": ..., "Version": ...}`.
///
/// # Example
///
/// ```rust
/// use jvm_discovery::JavaCandidate;
///
/// let candidate = JavaCandidate::new("/usr/lib/jvm/jdk-17/bin/java", "17.0.2");
/// assert_eq!(candidate.version(), "17.0.2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JavaCandidate {
    #[serde(rename = "Path")]
    path: PathBuf,
    #[serde(rename = "Version")]
    version: String,
}

impl JavaCandidate {
    /// Create a candidate from an executable path and a version string.
    pub fn new(path: impl Into<PathBuf>, version: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            version: version.into(),
        }
    }

    /// Path to the `java` executable.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Normalized version string, e.g. `1.8.0.312` or `17.0.2`.
    pub fn version(&self) -> &str {
        &self.version
    }
}

impl fmt::Display for JavaCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.version, self.path.display())
    }
}

/// Remove duplicate candidates, keeping the first occurrence of each.
pub(crate) fn dedup_candidates(candidates: Vec<JavaCandidate>) -> Vec<JavaCandidate> {
    let mut seen = std::collections::HashSet::with_capacity(candidates.len());
    candidates
        .into_iter()
        .filter(|c| seen.insert(c.clone()))
        .collect()
}
