//! Version extraction from `java -version` output.

use regex::Regex;
use std::sync::LazyLock;

/// `major[.minor[.patch[(.|_)build]]][-suffix]`
static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)(?:\.(\d+))?(?:\.(\d+))?(?:[._](\d+))?(?:-(.+))?")
        .expect("Invalid regex pattern")
});

/// Extract a normalized version string from diagnostic output.
///
/// The first version-shaped sequence in the text is used. Every captured
/// component is joined with `.` in order, and components that did not match
/// are dropped:
///
/// - `openjdk version "17.0.2" 2022-01-18` -> `17.0.2`
/// - `java version "1.8.0_312"` -> `1.8.0.312`
/// - `2.3.4_05-beta` -> `2.3.4.05.beta`
///
/// Returns `None` when the text contains no digits at all.
pub(crate) fn parse_version(output: &str) -> Option<String> {
    let caps = VERSION_RE.captures(output)?;

    let version = caps
        .iter()
        .skip(1)
        .flatten()
        .map(|m| m.as_str())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(".");

    if version.is_empty() {
        None
    } else {
        Some(version)
    }
}
