//! Platform identifiers and the per-platform conventions discovery depends on.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Conventional Java installation roots on non-Windows systems.
const UNIX_JAVA_ROOTS: &[&str] = &[
    "/usr",
    "/usr/java",
    "/usr/lib/jvm",
    "/usr/lib64/jvm",
    "/opt/jdk",
    "/opt/jdks",
];

/// The operating system family discovery runs against.
///
/// Every platform-dependent decision (executable name, search-path separator,
/// conventional roots) is keyed by this enum so that the behaviour for each
/// platform can be exercised from any host.
///
/// This enum is marked `#[non_exhaustive]` to allow adding platforms later.
///
/// # Example
///
/// ```rust
/// use jvm_discovery::Platform;
///
/// for platform in Platform::all() {
///     println!("{:?}: {}", platform, platform.java_executable_name());
/// }
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
#[non_exhaustive]
pub enum Platform {
    /// Microsoft Windows.
    Windows,
    /// Apple macOS.
    MacOS,
    /// Linux and other Unix-like systems.
    Linux,
}

impl Platform {
    /// The platform this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::MacOS
        } else {
            Self::Linux
        }
    }

    /// File name of the Java launcher inside a `bin` directory.
    ///
    /// # Example
    ///
    /// ```rust
    /// use jvm_discovery::Platform;
    ///
    /// assert_eq!(Platform::Windows.java_executable_name(), "java.exe");
    /// assert_eq!(Platform::Linux.java_executable_name(), "java");
    /// ```
    pub fn java_executable_name(&self) -> &'static str {
        match self {
            Self::Windows => "java.exe",
            Self::MacOS | Self::Linux => "java",
        }
    }

    /// Separator used by search-path environment variables such as `PATH`.
    pub fn path_list_separator(&self) -> char {
        match self {
            Self::Windows => ';',
            Self::MacOS | Self::Linux => ':',
        }
    }

    /// Fixed installation roots scanned on this platform.
    ///
    /// Windows has no fixed list; its roots are resolved at runtime from the
    /// mounted drives or the configured installation directory.
    pub fn conventional_roots(&self) -> &'static [&'static str] {
        match self {
            Self::Windows => &[],
            Self::MacOS | Self::Linux => UNIX_JAVA_ROOTS,
        }
    }

    /// Iterator over all known platforms.
    pub fn all() -> impl Iterator<Item = Self> {
        <Self as IntoEnumIterator>::iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_executable_names() {
        assert_eq!(Platform::Windows.java_executable_name(), "java.exe");
        assert_eq!(Platform::MacOS.java_executable_name(), "java");
        assert_eq!(Platform::Linux.java_executable_name(), "java");
    }

    #[test]
    fn test_path_separators() {
        assert_eq!(Platform::Windows.path_list_separator(), ';');
        assert_eq!(Platform::MacOS.path_list_separator(), ':');
        assert_eq!(Platform::Linux.path_list_separator(), ':');
    }

    #[test]
    fn test_conventional_roots() {
        assert!(Platform::Windows.conventional_roots().is_empty());
        assert_eq!(
            Platform::Linux.conventional_roots(),
            &[
                "/usr",
                "/usr/java",
                "/usr/lib/jvm",
                "/usr/lib64/jvm",
                "/opt/jdk",
                "/opt/jdks"
            ]
        );
        assert_eq!(
            Platform::MacOS.conventional_roots(),
            Platform::Linux.conventional_roots()
        );
    }

    #[test]
    fn test_current_matches_target() {
        let current = Platform::current();
        if cfg!(windows) {
            assert_eq!(current, Platform::Windows);
        } else {
            assert_ne!(current, Platform::Windows);
        }
    }

    #[test]
    fn test_all_iterator() {
        let all: Vec<_> = Platform::all().collect();
        assert_eq!(all.len(), 3);
        assert!(all.contains(&Platform::Windows));
    }

    #[test]
    fn test_serde_roundtrip() {
        let json = serde_json::to_string(&Platform::MacOS).unwrap();
        assert_eq!(json, "\"MacOS\"");
        let back: Platform = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Platform::MacOS);
    }
}
