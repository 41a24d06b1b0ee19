//! Java discovery functions.

use crate::candidate::dedup_candidates;
use crate::detection::{probe_version, DirectoryScanner, KeywordFilter, ScanRequest};
use crate::roots::split_search_path;
use crate::{DiscoverOptions, DiscoveryMode, JavaCandidate, RootPathProvider};
use futures::stream::{self, StreamExt};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;

/// Discover Java installations below the given root directories.
///
/// One scan task is created per root and at most
/// [`DiscoverOptions::worker_count`] of them run at the same time. Results
/// are appended in the order tasks finish, only by this function, and
/// duplicates are removed once every task has completed.
///
/// Failures never surface: unreadable directories, executables that cannot
/// be run, and banners without a version are logged and skipped. A root with
/// nothing to find contributes nothing.
///
/// # Arguments
///
/// * `roots` - Directories to scan recursively
/// * `options` - Keywords, pool size, and probe settings
///
/// # Example
///
/// ```rust,no_run
/// use jvm_discovery::{discover, DiscoverOptions};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let found = discover(["/usr/lib/jvm", "/opt/jdks"], &DiscoverOptions::default()).await;
///     for candidate in &found {
///         println!("{candidate}");
///     }
/// }
/// ```
pub async fn discover<I, P>(roots: I, options: &DiscoverOptions) -> Vec<JavaCandidate>
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    let roots: Vec<PathBuf> = roots.into_iter().map(Into::into).collect();
    dedup_candidates(scan_roots(roots, options).await)
}

/// Discover Java installations for a discovery mode.
///
/// Root directories come from [`RootPathProvider`]. In
/// [`DiscoveryMode::Local`], once every scan task has finished, each entry of
/// the search-path variable is also checked for a Java executable directly
/// inside it, and any new installation found there is appended.
///
/// # Example
///
/// ```rust,no_run
/// use jvm_discovery::{discover_mode, DiscoverOptions, DiscoveryMode};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let found = discover_mode(DiscoveryMode::Local, &DiscoverOptions::default()).await;
///     println!("{} Java installations", found.len());
/// }
/// ```
pub async fn discover_mode(mode: DiscoveryMode, options: &DiscoverOptions) -> Vec<JavaCandidate> {
    let roots = RootPathProvider::from_options(options).roots(mode);
    tracing::info!(?mode, roots = roots.len(), "starting java discovery");

    let mut collected = scan_roots(roots, options).await;
    if mode == DiscoveryMode::Local {
        sweep_search_path(options, &mut collected).await;
    }

    let found = dedup_candidates(collected);
    tracing::info!(?mode, found = found.len(), "java discovery finished");
    found
}

/// Run [`discover_mode`] in the background.
///
/// The receiver resolves exactly once, with the complete result list, after
/// every scan task has finished. There are no intermediate notifications.
/// Dropping the receiver does not cancel the scan.
///
/// Must be called from within a Tokio runtime.
///
/// # Example
///
/// ```rust,no_run
/// use jvm_discovery::{spawn_discovery, DiscoverOptions, DiscoveryMode};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let finished = spawn_discovery(DiscoveryMode::Global, DiscoverOptions::default());
///     if let Ok(found) = finished.await {
///         println!("{} Java installations", found.len());
///     }
/// }
/// ```
pub fn spawn_discovery(
    mode: DiscoveryMode,
    options: DiscoverOptions,
) -> oneshot::Receiver<Vec<JavaCandidate>> {
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        let found = discover_mode(mode, &options).await;
        if tx.send(found).is_err() {
            tracing::debug!("discovery result dropped, receiver gone");
        }
    });
    rx
}

/// Scan every root through the bounded pool and concatenate the results.
async fn scan_roots(roots: Vec<PathBuf>, options: &DiscoverOptions) -> Vec<JavaCandidate> {
    let filter = Arc::new(KeywordFilter::new(
        options.match_keywords.iter().cloned(),
        options.exclude_keywords.iter().cloned(),
    ));
    let scanner = DirectoryScanner::new(
        options.platform.java_executable_name(),
        options.probe_timeout,
    );

    let mut finished = stream::iter(roots)
        .map(|root| {
            let scanner = &scanner;
            let request = ScanRequest::new(root, Arc::clone(&filter));
            async move { scanner.scan(request).await }
        })
        .buffer_unordered(options.effective_worker_count());

    let mut collected = Vec::new();
    while let Some(result) = finished.next().await {
        match result {
            Ok(candidates) => collected.extend(candidates),
            Err(e) => tracing::error!(error = %e, "scan task failed"),
        }
    }
    collected
}

/// Check each search-path entry for a Java executable and append new finds.
async fn sweep_search_path(options: &DiscoverOptions, collected: &mut Vec<JavaCandidate>) {
    let Some(value) = std::env::var_os(&options.search_path_var) else {
        tracing::debug!(var = %options.search_path_var, "search path variable not set");
        return;
    };

    let entries = split_search_path(&value, options.effective_path_separator());
    sweep_entries(
        &entries,
        options.platform.java_executable_name(),
        options.probe_timeout,
        collected,
    )
    .await;
}

async fn sweep_entries(
    entries: &[PathBuf],
    executable_name: &str,
    probe_timeout: Option<Duration>,
    collected: &mut Vec<JavaCandidate>,
) {
    for dir in entries {
        let executable = dir.join(executable_name);
        if !executable.is_file() {
            continue;
        }

        let version = probe_version(&executable, probe_timeout).await;
        if version.is_empty() {
            continue;
        }

        let candidate = JavaCandidate::new(executable, version);
        if !collected.contains(&candidate) {
            tracing::debug!(path = %candidate.path().display(), "found java on search path");
            collected.push(candidate);
        }
    }
}
