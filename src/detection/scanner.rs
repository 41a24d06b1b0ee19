//! Recursive directory scan for Java installations below one root.

use super::probe_version;
use crate::{JavaCandidate, ScanError};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use walkdir::{DirEntry, WalkDir};

/// Directory name filters applied during a scan.
///
/// A name is excluded when it contains any exclusion keyword (case-sensitive).
/// A name that is not excluded matches when its lowercased form contains any
/// inclusion keyword. Inclusion keywords are expected in lowercase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordFilter {
    include: Vec<String>,
    exclude: Vec<String>,
}

impl KeywordFilter {
    /// Create a filter from inclusion and exclusion keywords.
    pub fn new<I, E>(include: I, exclude: E) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        Self {
            include: include.into_iter().map(Into::into).collect(),
            exclude: exclude.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `name` contains an exclusion keyword.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.exclude.iter().any(|k| name.contains(k.as_str()))
    }

    /// Whether `name` should be checked for a Java executable.
    ///
    /// Exclusion wins when a name carries both kinds of keyword.
    pub fn is_match(&self, name: &str) -> bool {
        if self.is_excluded(name) {
            return false;
        }
        let lower = name.to_lowercase();
        self.include.iter().any(|k| lower.contains(k.as_str()))
    }
}

/// One unit of scan work: a root directory and the shared name filters.
#[derive(Debug, Clone)]
pub struct ScanRequest {
    root: PathBuf,
    filter: Arc<KeywordFilter>,
}

impl ScanRequest {
    /// Create a request for `root` sharing `filter` with other requests.
    pub fn new(root: impl Into<PathBuf>, filter: Arc<KeywordFilter>) -> Self {
        Self {
            root: root.into(),
            filter,
        }
    }

    /// Directory the scan starts from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Name filters applied below the root.
    pub fn filter(&self) -> &KeywordFilter {
        &self.filter
    }
}

/// Walks a root directory and probes every Java executable it finds.
#[derive(Debug, Clone)]
pub struct DirectoryScanner {
    executable_name: &'static str,
    probe_timeout: Option<Duration>,
}

impl DirectoryScanner {
    /// Create a scanner looking for `<dir>/bin/<executable_name>`.
    pub fn new(executable_name: &'static str, probe_timeout: Option<Duration>) -> Self {
        Self {
            executable_name,
            probe_timeout,
        }
    }

    /// Scan the request's root and return every candidate with a version.
    ///
    /// The walk runs on the blocking thread pool; probes run sequentially
    /// afterwards. Unreadable entries are logged and skipped, so a root with
    /// nothing to find returns an empty list. The only error is the walk task
    /// itself failing to complete.
    pub async fn scan(&self, request: ScanRequest) -> Result<Vec<JavaCandidate>, ScanError> {
        let root = request.root.clone();
        let executable_name = self.executable_name;
        let executables =
            tokio::task::spawn_blocking(move || find_executables(&request, executable_name))
                .await
                .map_err(|source| ScanError::Task {
                    root: root.clone(),
                    source,
                })?;

        let mut candidates = Vec::new();
        for path in executables {
            let version = probe_version(&path, self.probe_timeout).await;
            if version.is_empty() {
                continue;
            }
            tracing::debug!(path = %path.display(), %version, "found java");
            candidates.push(JavaCandidate::new(path, version));
        }

        tracing::debug!(
            root = %root.display(),
            found = candidates.len(),
            "scan finished"
        );
        Ok(candidates)
    }
}

/// Collect `<dir>/bin/<executable_name>` for every matching directory below
/// the root.
///
/// An excluded directory is not checked itself, but the walk still descends
/// into it. Symlinked directories are checked but not descended into.
pub(crate) fn find_executables(request: &ScanRequest, executable_name: &str) -> Vec<PathBuf> {
    let filter = request.filter();
    let walker = WalkDir::new(request.root())
        .min_depth(1)
        .sort_by_file_name();

    let mut found = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(
                    root = %request.root().display(),
                    error = %ScanError::from(err),
                    "skipping unreadable entry"
                );
                continue;
            }
        };

        if !is_directory(&entry) || !filter.is_match(&entry.file_name().to_string_lossy()) {
            continue;
        }

        let executable = entry.path().join("bin").join(executable_name);
        if executable.is_file() {
            found.push(executable);
        }
    }
    found
}

fn is_directory(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir())
}
