//! Root path selection for each discovery mode.

use crate::{DiscoverOptions, Platform};
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// How widely discovery searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum DiscoveryMode {
    /// Scan every mounted drive on Windows, or the conventional installation
    /// roots elsewhere.
    Global,
    /// Scan the configured installation directory on Windows, or the
    /// conventional installation roots elsewhere, then sweep the search path.
    Local,
}

/// Supplies the root directories a discovery run starts from.
///
/// # Example
///
/// ```rust
/// use jvm_discovery::{DiscoverOptions, DiscoveryMode, Platform, RootPathProvider};
///
/// let options = DiscoverOptions {
///     platform: Platform::Linux,
///     ..Default::default()
/// };
/// let roots = RootPathProvider::from_options(&options).roots(DiscoveryMode::Global);
/// assert!(roots.iter().any(|p| p.ends_with("lib/jvm")));
/// ```
#[derive(Debug, Clone)]
pub struct RootPathProvider {
    platform: Platform,
    default_install_dir: Option<PathBuf>,
}

impl RootPathProvider {
    /// Create a provider for `platform`.
    pub fn new(platform: Platform, default_install_dir: Option<PathBuf>) -> Self {
        Self {
            platform,
            default_install_dir,
        }
    }

    /// Create a provider from discovery options.
    pub fn from_options(options: &DiscoverOptions) -> Self {
        Self::new(options.platform, options.default_install_dir.clone())
    }

    /// Root directories for `mode`.
    pub fn roots(&self, mode: DiscoveryMode) -> Vec<PathBuf> {
        self.roots_with(mode, Path::exists)
    }

    /// Root directories for `mode`, using `exists` to test drive roots.
    pub(crate) fn roots_with<F>(&self, mode: DiscoveryMode, exists: F) -> Vec<PathBuf>
    where
        F: Fn(&Path) -> bool,
    {
        match (self.platform, mode) {
            (Platform::Windows, DiscoveryMode::Global) => drive_roots(exists),
            (Platform::Windows, DiscoveryMode::Local) => {
                self.default_install_dir.iter().cloned().collect()
            }
            (platform, _) => platform
                .conventional_roots()
                .iter()
                .map(PathBuf::from)
                .collect(),
        }
    }
}

/// `A:\` through `Z:\`, keeping the ones that exist.
fn drive_roots<F>(exists: F) -> Vec<PathBuf>
where
    F: Fn(&Path) -> bool,
{
    ('A'..='Z')
        .map(|letter| PathBuf::from(format!("{letter}:\\")))
        .filter(|root| exists(root))
        .collect()
}

/// Split a search-path value on `separator`, dropping empty entries.
pub(crate) fn split_search_path(value: &OsStr, separator: char) -> Vec<PathBuf> {
    value
        .to_string_lossy()
        .split(separator)
        .filter(|entry| !entry.is_empty())
        .map(PathBuf::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unix_roots_same_for_both_modes() {
        for platform in [Platform::Linux, Platform::MacOS] {
            let provider = RootPathProvider::new(platform, Some(PathBuf::from("/ignored")));
            let global = provider.roots(DiscoveryMode::Global);
            let local = provider.roots(DiscoveryMode::Local);
            assert_eq!(global.len(), 6);
            assert_eq!(global, local);
            assert_eq!(global[0], PathBuf::from("/usr"));
            assert!(!global.contains(&PathBuf::from("/ignored")));
        }
    }

    #[test]
    fn test_windows_global_uses_existing_drives() {
        let provider = RootPathProvider::new(Platform::Windows, None);
        let roots = provider.roots_with(DiscoveryMode::Global, |p| {
            matches!(p.to_str(), Some("C:\\") | Some("D:\\"))
        });
        assert_eq!(roots, vec![PathBuf::from("C:\\"), PathBuf::from("D:\\")]);
    }

    #[test]
    fn test_windows_global_enumerates_all_letters() {
        let provider = RootPathProvider::new(Platform::Windows, None);
        let roots = provider.roots_with(DiscoveryMode::Global, |_| true);
        assert_eq!(roots.len(), 26);
        assert_eq!(roots[0], PathBuf::from("A:\\"));
        assert_eq!(roots[25], PathBuf::from("Z:\\"));
    }

    #[test]
    fn test_windows_local_uses_install_dir() {
        let dir = PathBuf::from("D:\\Games\\.minecraft");
        let provider = RootPathProvider::new(Platform::Windows, Some(dir.clone()));
        assert_eq!(provider.roots(DiscoveryMode::Local), vec![dir]);
    }

    #[test]
    fn test_windows_local_without_install_dir() {
        let provider = RootPathProvider::new(Platform::Windows, None);
        assert!(provider.roots(DiscoveryMode::Local).is_empty());
    }

    #[test]
    fn test_split_search_path() {
        let entries = split_search_path(OsStr::new("/usr/bin::/opt/jdk/bin:"), ':');
        assert_eq!(
            entries,
            vec![PathBuf::from("/usr/bin"), PathBuf::from("/opt/jdk/bin")]
        );

        let entries = split_search_path(OsStr::new("C:\\Java\\bin;C:\\Windows"), ';');
        assert_eq!(
            entries,
            vec![PathBuf::from("C:\\Java\\bin"), PathBuf::from("C:\\Windows")]
        );
    }

    #[test]
    fn test_split_search_path_empty() {
        assert!(split_search_path(OsStr::new(""), ':').is_empty());
    }
}
