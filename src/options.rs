//! Discovery options configuration.
//!
//! This module provides the [`DiscoverOptions`] struct for configuring
//! Java discovery: pool size, directory name filters, the Windows
//! installation directory, and how the search path is read.

use crate::Platform;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Number of scan tasks allowed to run at once.
pub const DEFAULT_WORKER_COUNT: usize = 20;

/// Directory name fragments that mark a directory as a possible Java home.
pub const DEFAULT_MATCH_KEYWORDS: &[&str] = &[
    "bin",
    "java",
    "jdk",
    "jre",
    "minecraft",
    "launcher",
    "pcl",
    "hmcl",
];

/// Directory name fragments that rule a directory out.
pub const DEFAULT_EXCLUDE_KEYWORDS: &[&str] = &["$", "{", "}", "__"];

/// Configuration options for Java discovery.
///
/// # Default Behavior
///
/// Twenty scan tasks run concurrently, the match and exclude keyword lists
/// are [`DEFAULT_MATCH_KEYWORDS`] and [`DEFAULT_EXCLUDE_KEYWORDS`], version
/// probes wait for the executable without a timeout, and the search path is
/// read from `PATH` using the separator of the current platform.
///
/// # Example
///
/// ```rust
/// use jvm_discovery::DiscoverOptions;
/// use std::time::Duration;
///
/// // Defaults
/// let opts = DiscoverOptions::default();
/// assert_eq!(opts.worker_count, 20);
///
/// // Bound each `java -version` call
/// let opts = DiscoverOptions {
///     probe_timeout: Some(Duration::from_secs(5)),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoverOptions {
    /// Maximum number of root paths scanned concurrently.
    ///
    /// Values below 1 are treated as 1.
    ///
    /// Default: 20
    pub worker_count: usize,

    /// A directory is checked when its lowercased name contains any of these.
    pub match_keywords: Vec<String>,

    /// A directory is skipped when its name contains any of these.
    ///
    /// Matching is case-sensitive and wins over `match_keywords`.
    pub exclude_keywords: Vec<String>,

    /// Installation directory scanned by local discovery on Windows.
    ///
    /// Default: `None` (local discovery on Windows only sweeps the search path)
    pub default_install_dir: Option<PathBuf>,

    /// Upper bound on each `java -version` invocation.
    ///
    /// Default: `None` (wait for the process to exit)
    pub probe_timeout: Option<Duration>,

    /// Environment variable holding the executable search path.
    ///
    /// Default: `"PATH"`
    pub search_path_var: String,

    /// Separator used to split the search path.
    ///
    /// Default: `None` (use [`Platform::path_list_separator`])
    pub path_separator: Option<char>,

    /// Platform whose conventions (root lists, executable name) apply.
    ///
    /// Default: [`Platform::current`]
    pub platform: Platform,
}

impl DiscoverOptions {
    /// The search path separator in effect.
    pub fn effective_path_separator(&self) -> char {
        self.path_separator
            .unwrap_or_else(|| self.platform.path_list_separator())
    }

    /// The worker count in effect, never zero.
    pub fn effective_worker_count(&self) -> usize {
        self.worker_count.max(1)
    }
}

impl Default for DiscoverOptions {
    fn default() -> Self {
        Self {
            worker_count: DEFAULT_WORKER_COUNT,
            match_keywords: DEFAULT_MATCH_KEYWORDS.iter().map(|s| s.to_string()).collect(),
            exclude_keywords: DEFAULT_EXCLUDE_KEYWORDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            default_install_dir: None,
            probe_timeout: None,
            search_path_var: "PATH".to_string(),
            path_separator: None,
            platform: Platform::current(),
        }
    }
}
