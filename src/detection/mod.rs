//! Detection implementation submodule.
//!
//! - `parse_version`: regex-based version extraction from launcher output
//! - `probe_version`: runs `java -version` and extracts the version
//! - `DirectoryScanner`: recursive walk of one root with name filters

mod parser;
mod scanner;
mod version;

pub(crate) use parser::parse_version;
pub use scanner::{DirectoryScanner, KeywordFilter, ScanRequest};
pub use version::{probe_version, try_probe_version};
