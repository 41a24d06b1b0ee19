//! Version probing by running `java -version`.

use super::parse_version;
use crate::ProbeError;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

/// Flag that makes the Java launcher print its version banner.
const VERSION_FLAG: &str = "-version";

/// Run an executable with `-version` and extract its version.
///
/// The launcher writes its banner to stderr, so only stderr is inspected.
/// Invalid UTF-8 is replaced rather than rejected, and the exit status is
/// ignored: a non-zero exit with a readable banner still yields a version.
///
/// # Arguments
///
/// * `path` - Path to the executable to run
/// * `limit` - Optional upper bound on how long to wait for the process
///
/// # Returns
///
/// The normalized version, or a [`ProbeError`] describing why none was found.
///
/// # Example
///
/// ```rust,no_run
/// use jvm_discovery::try_probe_version;
/// use std::path::Path;
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     match try_probe_version(Path::new("/usr/bin/java"), None).await {
///         Ok(version) => println!("java {version}"),
///         Err(e) => eprintln!("{e}"),
///     }
/// }
/// ```
pub async fn try_probe_version(
    path: &Path,
    limit: Option<Duration>,
) -> Result<String, ProbeError> {
    let mut command = Command::new(path);
    command
        .arg(VERSION_FLAG)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let spawn_error = |source: std::io::Error| ProbeError::Spawn {
        path: path.to_path_buf(),
        source,
    };

    let output = match limit {
        Some(limit) => timeout(limit, command.output())
            .await
            .map_err(|_| ProbeError::Timeout {
                path: path.to_path_buf(),
                timeout: limit,
            })?
            .map_err(spawn_error)?,
        None => command.output().await.map_err(spawn_error)?,
    };

    let stderr = String::from_utf8_lossy(&output.stderr);
    tracing::debug!(
        path = %path.display(),
        status = ?output.status.code(),
        output = %stderr.trim(),
        "java -version finished"
    );

    parse_version(&stderr).ok_or_else(|| ProbeError::NoVersion {
        path: path.to_path_buf(),
    })
}

/// Run an executable with `-version` and return its version, or `""`.
///
/// Every failure (missing executable, permission denied, timeout, output
/// without a version) is logged and collapsed into an empty string. There is
/// exactly one attempt per call.
///
/// # Example
///
/// ```rust,no_run
/// use jvm_discovery::probe_version;
/// use std::path::Path;
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let version = probe_version(Path::new("/usr/bin/java"), None).await;
///     if !version.is_empty() {
///         println!("java {version}");
///     }
/// }
/// ```
pub async fn probe_version(path: &Path, limit: Option<Duration>) -> String {
    match try_probe_version(path, limit).await {
        Ok(version) => version,
        Err(e @ ProbeError::NoVersion { .. }) => {
            tracing::debug!(error = %e, "no version reported");
            String::new()
        }
        Err(e) if e.is_permission_denied() => {
            tracing::warn!(error = %e, "java launcher is not executable");
            String::new()
        }
        Err(e) => {
            tracing::warn!(error = %e, "version probe failed");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[tokio::test]
    async fn test_probe_nonexistent_is_empty() {
        let path = PathBuf::from("/nonexistent/path/to/java");
        assert_eq!(probe_version(&path, None).await, "");
    }

    #[tokio::test]
    async fn test_try_probe_nonexistent_is_spawn_error() {
        let path = PathBuf::from("/nonexistent/path/to/java");
        let result = try_probe_version(&path, None).await;
        assert!(matches!(result, Err(ProbeError::Spawn { .. })));
    }

    #[cfg(unix)]
    mod unix {
        use super::*;
        use std::fs;
        use std::os::unix::fs::PermissionsExt;
        use tempfile::TempDir;

        fn fake_java(dir: &TempDir, body: &str) -> PathBuf {
            let path = dir.path().join("java");
            fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
            path
        }

        #[tokio::test]
        async fn test_probe_reads_stderr() {
            let dir = TempDir::new().unwrap();
            let java = fake_java(&dir, "echo 'openjdk version \"17.0.2\" 2022-01-18' >&2");
            assert_eq!(probe_version(&java, None).await, "17.0.2");
        }

        #[tokio::test]
        async fn test_probe_ignores_stdout() {
            let dir = TempDir::new().unwrap();
            let java = fake_java(&dir, "echo '17.0.2'");
            assert_eq!(probe_version(&java, None).await, "");
        }

        #[tokio::test]
        async fn test_probe_ignores_exit_status() {
            let dir = TempDir::new().unwrap();
            let java = fake_java(&dir, "echo '2.3.4_05-beta' >&2\nexit 3");
            assert_eq!(probe_version(&java, None).await, "2.3.4.05.beta");
        }

        #[tokio::test]
        async fn test_probe_passes_version_flag() {
            let dir = TempDir::new().unwrap();
            let java = fake_java(&dir, "[ \"$1\" = \"-version\" ] && echo '11.0.20' >&2");
            assert_eq!(probe_version(&java, None).await, "11.0.20");
        }

        #[tokio::test]
        async fn test_probe_tolerates_invalid_utf8() {
            let dir = TempDir::new().unwrap();
            let java = fake_java(&dir, "printf '\\377\\376 version 21.0.1\\n' >&2");
            assert_eq!(probe_version(&java, None).await, "21.0.1");
        }

        #[tokio::test]
        async fn test_probe_not_executable() {
            let dir = TempDir::new().unwrap();
            let path = dir.path().join("java");
            fs::write(&path, "not a program").unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();
            let result = try_probe_version(&path, None).await;
            assert!(matches!(result, Err(ProbeError::Spawn { .. })));
            assert_eq!(probe_version(&path, None).await, "");
        }

        #[tokio::test]
        async fn test_probe_timeout() {
            let dir = TempDir::new().unwrap();
            let java = fake_java(&dir, "sleep 5\necho '1.0' >&2");
            let result = try_probe_version(&java, Some(Duration::from_millis(200))).await;
            assert!(matches!(result, Err(ProbeError::Timeout { .. })));
        }
    }
}
